//! Helpers for 3D input devices that report positions and orientations
//! relative to where they currently point.

use crate::{axis::RotationAxis, euler_angles::EulerAngles, transform_matrix::TransformMatrix};
use coordinate_systems::{ConversionErrors, Triple, convert_position, systems::PositionSystem};
use serde::{Deserialize, Serialize};

/// Moves `current` (expressed in `system`) by an offset given relative to
/// `orientation`, and returns the new position in `system`.
///
/// The offset's x component moves along the orientation's y axis, y along
/// its -z axis and z along its -x axis.
pub fn relative_position(
    current: Triple,
    system: PositionSystem,
    orientation: &TransformMatrix,
    relative: Triple,
) -> Result<Triple, ConversionErrors> {
    let mut global = convert_position(system, PositionSystem::RectangularCartesian, current)?;
    let m = &orientation.0;
    for i in 0..3 {
        global[i] += relative[0] * m[(1, i)];
        global[i] -= relative[1] * m[(2, i)];
        global[i] -= relative[2] * m[(0, i)];
    }
    convert_position(PositionSystem::RectangularCartesian, system, global)
}

/// Turns `orientation` by a relative change given as (about -z, about -y,
/// about -x) in degrees and returns the Euler angles of the new orientation.
/// Zero components are skipped.
pub fn relative_direction(orientation: &mut TransformMatrix, relative: Triple) -> EulerAngles {
    let turns = [
        (relative[0], RotationAxis::Z),
        (relative[1], RotationAxis::Y),
        (relative[2], RotationAxis::X),
    ];
    for (angle, axis) in turns {
        if angle != 0.0 {
            orientation.rotate_about(-angle, axis);
        }
    }
    EulerAngles::from(&*orientation)
}

/// Origin for a device whose readings are absolute orientations.
///
/// `last` holds the latest reading and `origin` the matrix that takes
/// readings to orientations relative to the chosen origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalOrigin {
    pub last: TransformMatrix,
    pub origin: TransformMatrix,
}

impl ExternalOrigin {
    pub fn new(last: TransformMatrix) -> Self {
        Self {
            last,
            origin: TransformMatrix::identity(),
        }
    }

    /// Re-zeroes the origin so the latest reading corresponds to `relative`.
    /// Returns the orientation matrix for `relative`.
    pub fn update(&mut self, relative: EulerAngles) -> TransformMatrix {
        let orientation = TransformMatrix::from(relative);
        self.origin = TransformMatrix::multiply(&self.last, &orientation);
        orientation
    }

    /// Expresses an absolute reading relative to the origin, as a matrix and
    /// as Euler angles.
    pub fn direction_relative(&self, absolute: &TransformMatrix) -> (TransformMatrix, EulerAngles) {
        let orientation = TransformMatrix::multiply(absolute, &self.origin);
        let angles = EulerAngles::from(&orientation);
        (orientation, angles)
    }

    /// Expresses an absolute position change in the frame of the origin:
    /// `new[i] = sum_j origin[j][i] * change[j]`.
    pub fn position_relative(&self, change: Triple) -> Triple {
        self.origin.postmultiply_vector(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_relative_position_identity_orientation() {
        let result = relative_position(
            Triple::new(1.0, 2.0, 3.0),
            PositionSystem::RectangularCartesian,
            &TransformMatrix::identity(),
            Triple::new(1.0, 2.0, 3.0),
        )
        .unwrap();
        // +1 along y, -2 along z, -3 along x
        assert_abs_diff_eq!(result, Triple::new(-2.0, 3.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn test_relative_position_in_cylindrical() {
        let result = relative_position(
            Triple::new(1.0, 0.0, 0.0),
            PositionSystem::CylindricalPolar,
            &TransformMatrix::identity(),
            Triple::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(result, Triple::new(2.0_f64.sqrt(), 45.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn test_relative_position_follows_orientation() {
        // device turned 90 degrees in azimuth: its y axis is world -x
        let orientation = TransformMatrix::from(EulerAngles::new(90.0, 0.0, 0.0));
        let result = relative_position(
            Triple::zeros(),
            PositionSystem::RectangularCartesian,
            &orientation,
            Triple::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(result, Triple::new(-1.0, 0.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn test_relative_direction_azimuth() {
        let mut orientation = TransformMatrix::identity();
        let angles = relative_direction(&mut orientation, Triple::new(90.0, 0.0, 0.0));
        assert_abs_diff_eq!(angles.azimuth, 90.0, epsilon = TOL);
        assert_abs_diff_eq!(angles.elevation, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(angles.roll, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(
            orientation.0,
            TransformMatrix::from(angles).0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_relative_direction_zero_is_noop() {
        let start = TransformMatrix::from(EulerAngles::new(10.0, 20.0, 30.0));
        let mut orientation = start;
        let angles = relative_direction(&mut orientation, Triple::zeros());
        assert_eq!(orientation, start);
        assert_abs_diff_eq!(angles.azimuth, 10.0, epsilon = TOL);
        assert_abs_diff_eq!(angles.elevation, 20.0, epsilon = TOL);
        assert_abs_diff_eq!(angles.roll, 30.0, epsilon = TOL);
    }

    #[test]
    fn test_external_origin() {
        let reading = TransformMatrix::from(EulerAngles::new(40.0, -15.0, 5.0));
        let mut origin = ExternalOrigin::new(reading.invert().unwrap());
        let wanted = EulerAngles::new(-20.0, 10.0, 60.0);
        origin.update(wanted);

        let (_, angles) = origin.direction_relative(&reading);
        assert_abs_diff_eq!(angles.azimuth, wanted.azimuth, epsilon = TOL);
        assert_abs_diff_eq!(angles.elevation, wanted.elevation, epsilon = TOL);
        assert_abs_diff_eq!(angles.roll, wanted.roll, epsilon = TOL);
    }

    #[test]
    fn test_external_origin_position() {
        let mut origin = ExternalOrigin::default();
        assert_eq!(
            origin.position_relative(Triple::new(1.0, 2.0, 3.0)),
            Triple::new(1.0, 2.0, 3.0)
        );

        // origin turned 90 degrees in azimuth: rows are (0,1,0), (-1,0,0), (0,0,1)
        origin.update(EulerAngles::new(90.0, 0.0, 0.0));
        let change = origin.position_relative(Triple::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(change, Triple::new(0.0, 1.0, 0.0), epsilon = TOL);
        let change = origin.position_relative(Triple::new(0.0, 1.0, 5.0));
        assert_abs_diff_eq!(change, Triple::new(-1.0, 0.0, 5.0), epsilon = TOL);
    }
}
