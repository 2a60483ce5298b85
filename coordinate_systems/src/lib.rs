pub mod cartesian;
pub mod conversion;
pub mod cylindrical;
pub mod spherical;
pub mod systems;
pub mod table;

use nalgebra::Vector3;
use systems::Family;
use thiserror::Error;

pub use table::{
    convert_direction, convert_position, convert_position_incremental, convert_vector,
    convert_vector_incremental, initialize_conversion_tables, lookup_direction, lookup_position,
    lookup_position_incremental, lookup_vector, lookup_vector_incremental,
};

pub mod prelude {
    pub use crate::cartesian::*;
    pub use crate::conversion::*;
    pub use crate::cylindrical::*;
    pub use crate::spherical::*;
    pub use crate::systems::*;
    pub use crate::table::*;
    pub use crate::{ConversionErrors, Triple};
}

/// Three values whose meaning (position, Euler angles, vector components) is
/// given only by the coordinate system it is passed with.
pub type Triple = Vector3<f64>;

/// Value of pi used for every degree/radian conversion in the workspace.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.1415926535898;

/// Angles cross the public API in degrees and are multiplied by this before
/// any trigonometry.
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionErrors {
    #[error("no {family} coordinate system has index {index}")]
    InvalidCoordinateSystem { family: Family, index: usize },
    #[error("the {family} conversion table has no entry from {from} to {to}")]
    NoTableEntry {
        family: Family,
        from: &'static str,
        to: &'static str,
    },
    #[error("unknown coordinate system '{0}'")]
    UnknownCoordinateSystem(String),
}
