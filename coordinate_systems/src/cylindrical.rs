use super::{DEGREES_TO_RADIANS, Triple, cartesian::Cartesian, spherical::Spherical};
use serde::{Deserialize, Serialize};

/// A point in cylindrical polar coordinates. The azimuth is in degrees,
/// measured right handed about +z from +x.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical {
    pub radius: f64,
    pub azimuth: f64,
    pub height: f64,
}

impl Cylindrical {
    pub fn new(radius: f64, azimuth: f64, height: f64) -> Self {
        Self {
            radius,
            azimuth,
            height,
        }
    }
}

impl From<Triple> for Cylindrical {
    fn from(v: Triple) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Cylindrical> for Triple {
    fn from(c: Cylindrical) -> Triple {
        Triple::new(c.radius, c.azimuth, c.height)
    }
}

impl From<Cartesian> for Cylindrical {
    fn from(cartesian: Cartesian) -> Self {
        let radius = (cartesian.x * cartesian.x + cartesian.y * cartesian.y).sqrt();
        let azimuth = cartesian.y.atan2(cartesian.x) / DEGREES_TO_RADIANS;
        Cylindrical::new(radius, azimuth, cartesian.z)
    }
}

impl From<Spherical> for Cylindrical {
    fn from(spherical: Spherical) -> Self {
        let elevation = spherical.elevation * DEGREES_TO_RADIANS;
        let radius = spherical.radius * elevation.cos();
        let height = spherical.radius * elevation.sin();
        Cylindrical::new(radius, spherical.azimuth, height)
    }
}
