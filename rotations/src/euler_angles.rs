use crate::transform_matrix::TransformMatrix;
use coordinate_systems::{DEGREES_TO_RADIANS, Triple};
use serde::{Deserialize, Serialize};

/// Elements of the first row smaller than this are treated as zero when
/// recovering angles from a matrix.
const MATRIX_TO_EULER_TOLERANCE: f64 = 1.0E-12;

/// Azimuth, elevation and roll in degrees, as reported by Polhemus trackers.
///
/// The matching matrix applies azimuth about z, then elevation about the new
/// y, then roll about the new x, and maps world components into the rotated
/// frame (its rows are the rotated axes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub azimuth: f64,
    pub elevation: f64,
    pub roll: f64,
}

impl EulerAngles {
    pub fn new(azimuth: f64, elevation: f64, roll: f64) -> Self {
        Self {
            azimuth,
            elevation,
            roll,
        }
    }
}

impl From<Triple> for EulerAngles {
    fn from(v: Triple) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<EulerAngles> for Triple {
    fn from(e: EulerAngles) -> Triple {
        Triple::new(e.azimuth, e.elevation, e.roll)
    }
}

impl From<EulerAngles> for TransformMatrix {
    /// Converts `EulerAngles` into a `TransformMatrix`.
    ///
    /// # Arguments
    ///
    /// * `euler_angles` - The euler_angles to be converted.
    ///
    /// # Returns
    ///
    /// A new `TransformMatrix` representing the rotation defined by the euler angles.
    fn from(euler_angles: EulerAngles) -> TransformMatrix {
        let (sin_azimuth, cos_azimuth) = (euler_angles.azimuth * DEGREES_TO_RADIANS).sin_cos();
        let (sin_elevation, cos_elevation) =
            (euler_angles.elevation * DEGREES_TO_RADIANS).sin_cos();
        let (sin_roll, cos_roll) = (euler_angles.roll * DEGREES_TO_RADIANS).sin_cos();

        TransformMatrix::new(
            cos_azimuth * cos_elevation,
            sin_azimuth * cos_elevation,
            -sin_elevation,
            cos_azimuth * sin_elevation * sin_roll - sin_azimuth * cos_roll,
            sin_azimuth * sin_elevation * sin_roll + cos_azimuth * cos_roll,
            cos_elevation * sin_roll,
            cos_azimuth * sin_elevation * cos_roll + sin_azimuth * sin_roll,
            sin_azimuth * sin_elevation * cos_roll - cos_azimuth * sin_roll,
            cos_elevation * cos_roll,
        )
    }
}

impl From<&TransformMatrix> for EulerAngles {
    /// Recovers the angles of a rotation matrix.
    ///
    /// Elevation is returned in [-90, 90]. At +/-90 degrees of elevation only
    /// the difference (or sum) of azimuth and roll is defined: azimuth is then
    /// reported as 0 and the whole rotation about the vertical goes into roll,
    /// so converting the result back gives the same matrix.
    fn from(matrix: &TransformMatrix) -> EulerAngles {
        let m = &matrix.0;
        let first_significant = m[(0, 0)].abs() > MATRIX_TO_EULER_TOLERANCE;
        let second_significant = m[(0, 1)].abs() > MATRIX_TO_EULER_TOLERANCE;

        let (azimuth, elevation, roll) = if first_significant || second_significant {
            let azimuth = m[(0, 1)].atan2(m[(0, 0)]);
            let roll = m[(1, 2)].atan2(m[(2, 2)]);
            // divide by whichever of cos/sin is the reliable one
            let horizontal = if first_significant {
                m[(0, 0)] / azimuth.cos()
            } else {
                m[(0, 1)] / azimuth.sin()
            };
            let elevation = (-m[(0, 2)]).atan2(horizontal);
            (azimuth, elevation, roll)
        } else {
            // gimbal lock
            let elevation = (-m[(0, 2)]).atan2(0.0);
            let roll = (-m[(2, 1)]).atan2(-m[(2, 0)] * m[(0, 2)]);
            (0.0, elevation, roll)
        };

        EulerAngles::new(
            azimuth / DEGREES_TO_RADIANS,
            elevation / DEGREES_TO_RADIANS,
            roll / DEGREES_TO_RADIANS,
        )
    }
}

impl From<TransformMatrix> for EulerAngles {
    fn from(matrix: TransformMatrix) -> EulerAngles {
        EulerAngles::from(&matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::RotationAxis;
    use approx::assert_abs_diff_eq;
    use nalgebra::Matrix3;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const TOL: f64 = 1e-9;

    fn assert_angles_close(actual: EulerAngles, expected: EulerAngles) {
        assert_abs_diff_eq!(actual.azimuth, expected.azimuth, epsilon = TOL);
        assert_abs_diff_eq!(actual.elevation, expected.elevation, epsilon = TOL);
        assert_abs_diff_eq!(actual.roll, expected.roll, epsilon = TOL);
    }

    #[test]
    fn test_zero_angles_are_identity() {
        let m = TransformMatrix::from(EulerAngles::default());
        assert_eq!(m, TransformMatrix::identity());
        assert_angles_close(EulerAngles::from(&m), EulerAngles::default());
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        let m = TransformMatrix::from(EulerAngles::new(35.0, -20.0, 110.0));
        assert_abs_diff_eq!(m.0 * m.0.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_azimuth_only_matches_rotation_about_z() {
        let m = TransformMatrix::from(EulerAngles::new(30.0, 0.0, 0.0));
        let expected = TransformMatrix::rotation(-30.0, RotationAxis::Z);
        assert_abs_diff_eq!(m.0, expected.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            EulerAngles::new(10.0, 20.0, 30.0),
            EulerAngles::new(-150.0, 45.0, -10.0),
            EulerAngles::new(90.0, -60.0, 170.0),
            EulerAngles::new(-90.0, 89.0, 0.0),
            EulerAngles::new(0.0, -89.5, 45.0),
        ];
        for e in samples {
            let m = TransformMatrix::from(e);
            assert_angles_close(EulerAngles::from(&m), e);
        }
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let e = EulerAngles::new(
                rng.random_range(-179.0..179.0),
                rng.random_range(-89.0..89.0),
                rng.random_range(-179.0..179.0),
            );
            let m = TransformMatrix::from(e);
            assert_angles_close(EulerAngles::from(&m), e);
        }
    }

    #[test]
    fn test_gimbal_lock_up() {
        let e = EulerAngles::new(30.0, 90.0, 10.0);
        let m = TransformMatrix::from(e);
        let recovered = EulerAngles::from(&m);

        assert_angles_close(recovered, EulerAngles::new(0.0, 90.0, -20.0));
        let rebuilt = TransformMatrix::from(recovered);
        assert_abs_diff_eq!(rebuilt.0, m.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gimbal_lock_down() {
        let e = EulerAngles::new(30.0, -90.0, 10.0);
        let m = TransformMatrix::from(e);
        let recovered = EulerAngles::from(&m);

        assert_angles_close(recovered, EulerAngles::new(0.0, -90.0, 40.0));
        let rebuilt = TransformMatrix::from(recovered);
        assert_abs_diff_eq!(rebuilt.0, m.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triple_conversion() {
        let e = EulerAngles::new(1.0, 2.0, 3.0);
        let t = Triple::from(e);
        assert_eq!(t, Triple::new(1.0, 2.0, 3.0));
        assert_eq!(EulerAngles::from(t), e);
    }
}
