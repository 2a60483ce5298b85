pub mod axis;
pub mod device;
pub mod euler_angles;
pub mod transform_matrix;

use thiserror::Error;

pub mod prelude {
    pub use crate::MatrixErrors;
    pub use crate::axis::*;
    pub use crate::device::*;
    pub use crate::euler_angles::*;
    pub use crate::transform_matrix::*;
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixErrors {
    #[error("matrix is singular and cannot be inverted")]
    Singular,
    #[error("'{0}' is not a rotation axis, expected one of x, y or z")]
    UnsupportedAxis(char),
}
