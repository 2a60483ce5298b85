use crate::{Triple, cartesian::Cartesian, cylindrical::Cylindrical, spherical::Spherical};

/// One cell of a conversion table.
///
/// Pairs of coordinate systems without a real conversion hold `Identity`,
/// which passes the value through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Conversion {
    #[default]
    Identity,
    CylindricalToCartesian,
    CartesianToCylindrical,
    SphericalToCartesian,
    CartesianToSpherical,
    CylindricalToSpherical,
    SphericalToCylindrical,
}

impl Conversion {
    /// Converts `value`. Non-finite components are not checked and propagate
    /// through the trigonometry as NaN.
    pub fn apply(&self, value: Triple) -> Triple {
        match self {
            Conversion::Identity => value,
            Conversion::CylindricalToCartesian => {
                Cartesian::from(Cylindrical::from(value)).into()
            }
            Conversion::CartesianToCylindrical => {
                Cylindrical::from(Cartesian::from(value)).into()
            }
            Conversion::SphericalToCartesian => Cartesian::from(Spherical::from(value)).into(),
            Conversion::CartesianToSpherical => Spherical::from(Cartesian::from(value)).into(),
            Conversion::CylindricalToSpherical => {
                Spherical::from(Cylindrical::from(value)).into()
            }
            Conversion::SphericalToCylindrical => {
                Cylindrical::from(Spherical::from(value)).into()
            }
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Conversion::Identity
    }
}

/// One cell of an incremental conversion table. The increment is always
/// rectangular cartesian; the base and the result are in the destination
/// system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IncrementalConversion {
    /// Componentwise `base + increment`.
    #[default]
    Sum,
    /// Base is cylindrical polar.
    Cylindrical,
    /// Base is spherical polar.
    Spherical,
}

impl IncrementalConversion {
    pub fn apply(&self, increment: Triple, base: Triple) -> Triple {
        let increment = Cartesian::from(increment);
        match self {
            IncrementalConversion::Sum => base + increment.vec(),
            IncrementalConversion::Cylindrical => {
                let base = Cartesian::from(Cylindrical::from(base));
                Cylindrical::from(base + increment).into()
            }
            IncrementalConversion::Spherical => {
                let base = Cartesian::from(Spherical::from(base));
                Spherical::from(base + increment).into()
            }
        }
    }
}
