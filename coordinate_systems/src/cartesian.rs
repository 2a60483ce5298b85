use super::{DEGREES_TO_RADIANS, Triple, cylindrical::Cylindrical, spherical::Spherical};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Represents a point in rectangular cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    /// Creates a new `Cartesian` instance with the given x, y, and z components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts the `Cartesian` instance to a `Triple`.
    pub fn vec(&self) -> Triple {
        Triple::new(self.x, self.y, self.z)
    }
}

impl From<Triple> for Cartesian {
    fn from(v: Triple) -> Cartesian {
        Cartesian::new(v[0], v[1], v[2])
    }
}

impl From<Cartesian> for Triple {
    fn from(c: Cartesian) -> Triple {
        c.vec()
    }
}

impl From<Cylindrical> for Cartesian {
    /// Converts a `Cylindrical` coordinate to a `Cartesian` coordinate.
    ///
    /// # Arguments
    ///
    /// * `cyl` - A `Cylindrical` instance, azimuth in degrees.
    ///
    /// # Returns
    ///
    /// A `Cartesian` instance.
    fn from(cyl: Cylindrical) -> Self {
        let azimuth = cyl.azimuth * DEGREES_TO_RADIANS;

        let x = cyl.radius * azimuth.cos();
        let y = cyl.radius * azimuth.sin();

        Self::new(x, y, cyl.height)
    }
}

impl From<Spherical> for Cartesian {
    /// Converts a `Spherical` coordinate to a `Cartesian` coordinate.
    ///
    /// # Arguments
    ///
    /// * `sph` - A `Spherical` instance, azimuth and elevation in degrees.
    ///
    /// # Returns
    ///
    /// A `Cartesian` instance.
    fn from(sph: Spherical) -> Self {
        let azimuth = sph.azimuth * DEGREES_TO_RADIANS;
        let elevation = sph.elevation * DEGREES_TO_RADIANS;

        let x = sph.radius * elevation.cos() * azimuth.cos();
        let y = sph.radius * elevation.cos() * azimuth.sin();
        let z = sph.radius * elevation.sin();

        Self::new(x, y, z)
    }
}

impl Add<Cartesian> for Cartesian {
    type Output = Self;

    fn add(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
