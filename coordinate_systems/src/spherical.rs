use super::{DEGREES_TO_RADIANS, Triple, cartesian::Cartesian, cylindrical::Cylindrical};
use serde::{Deserialize, Serialize};

/// Represents a point in spherical polar coordinates. Relative to a Cartesian x-y-z coordinate
/// system, azimuth is the right hand rotation angle about +z where +x is 0, and elevation is the
/// angle up from the x-y plane towards +z. Both angles are in degrees.
/// Unique values are not enforced (all values can be negative and are unbounded).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    pub radius: f64,
    pub azimuth: f64,
    pub elevation: f64,
}

impl Spherical {
    /// Creates a new `Spherical` instance with the given radius, azimuth, and elevation.
    ///
    /// # Arguments
    ///
    /// * `radius` - The radial distance from the origin.
    /// * `azimuth` - The azimuth angle in degrees.
    /// * `elevation` - The elevation angle in degrees.
    ///
    /// # Returns
    ///
    /// A `Spherical` instance.
    pub fn new(radius: f64, azimuth: f64, elevation: f64) -> Self {
        Self {
            radius,
            azimuth,
            elevation,
        }
    }
}

impl From<Triple> for Spherical {
    fn from(v: Triple) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Spherical> for Triple {
    fn from(s: Spherical) -> Triple {
        Triple::new(s.radius, s.azimuth, s.elevation)
    }
}

/// Elevation in radians of the point (x, y, z) whose azimuth is `azimuth` radians.
///
/// The horizontal distance is recovered by dividing x by cos(azimuth). Near
/// azimuths of +/-90 degrees that division is ill conditioned (and undefined
/// when the cosine is zero), so y / sin(azimuth) is used whenever the cosine
/// is the smaller of the two.
pub(crate) fn elevation_of(x: f64, y: f64, z: f64, azimuth: f64) -> f64 {
    let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
    if cos_azimuth.abs() >= sin_azimuth.abs() {
        z.atan2(x / cos_azimuth)
    } else {
        z.atan2(y / sin_azimuth)
    }
}

impl From<Cartesian> for Spherical {
    /// Converts a `Cartesian` coordinate to a `Spherical` coordinate.
    ///
    /// # Arguments
    ///
    /// * `cartesian` - A `Cartesian` instance.
    ///
    /// # Returns
    ///
    /// A `Spherical` instance with angles in degrees.
    fn from(cartesian: Cartesian) -> Self {
        let Cartesian { x, y, z } = cartesian;
        let radius = (x * x + y * y + z * z).sqrt();
        let azimuth = y.atan2(x);
        let elevation = elevation_of(x, y, z, azimuth);
        Spherical::new(
            radius,
            azimuth / DEGREES_TO_RADIANS,
            elevation / DEGREES_TO_RADIANS,
        )
    }
}

impl From<Cylindrical> for Spherical {
    /// Converts a `Cylindrical` coordinate to a `Spherical` coordinate.
    ///
    /// # Arguments
    ///
    /// * `cylindrical` - A `Cylindrical` instance.
    ///
    /// # Returns
    ///
    /// A `Spherical` instance.
    fn from(cylindrical: Cylindrical) -> Self {
        let radius = (cylindrical.radius * cylindrical.radius
            + cylindrical.height * cylindrical.height)
            .sqrt();
        let elevation = cylindrical.height.atan2(cylindrical.radius) / DEGREES_TO_RADIANS;
        Spherical::new(radius, cylindrical.azimuth, elevation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_spherical_from_cartesian() {
        let spherical = Spherical::from(Cartesian::new(3.0, 4.0, 5.0));

        assert_abs_diff_eq!(spherical.radius, 7.0710678118654755, epsilon = TOL);
        assert_abs_diff_eq!(spherical.azimuth, 53.13010235415598, epsilon = TOL);
        assert_abs_diff_eq!(spherical.elevation, 45.0, epsilon = TOL);
    }

    #[test]
    fn test_spherical_from_cartesian_pole() {
        let spherical = Spherical::from(Cartesian::new(0.0, 0.0, 5.0));

        assert_eq!(spherical.radius, 5.0);
        assert_eq!(spherical.azimuth, 0.0);
        assert_abs_diff_eq!(spherical.elevation, 90.0, epsilon = TOL);
    }

    #[test]
    fn test_spherical_from_cartesian_on_y_axis() {
        // azimuth is 90 degrees, so the sine form is used
        let spherical = Spherical::from(Cartesian::new(0.0, 3.0, 4.0));

        assert_abs_diff_eq!(spherical.radius, 5.0, epsilon = TOL);
        assert_abs_diff_eq!(spherical.azimuth, 90.0, epsilon = TOL);
        assert_abs_diff_eq!(spherical.elevation, 53.13010235415598, epsilon = TOL);
    }

    #[test]
    fn test_spherical_from_cartesian_negative_y_axis() {
        let spherical = Spherical::from(Cartesian::new(0.0, -3.0, -4.0));

        assert_abs_diff_eq!(spherical.azimuth, -90.0, epsilon = TOL);
        assert_abs_diff_eq!(spherical.elevation, -53.13010235415598, epsilon = TOL);
    }

    #[test]
    fn test_spherical_from_cylindrical() {
        let spherical = Spherical::from(Cylindrical::new(3.0, 45.0, 4.0));

        assert_abs_diff_eq!(spherical.radius, 5.0, epsilon = TOL);
        assert_eq!(spherical.azimuth, 45.0);
        assert_abs_diff_eq!(spherical.elevation, 53.13010235415598, epsilon = TOL);
    }
}
