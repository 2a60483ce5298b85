use crate::MatrixErrors;
use serde::{Deserialize, Serialize};

/// A coordinate axis to rotate about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl TryFrom<char> for RotationAxis {
    type Error = MatrixErrors;

    /// Accepts `x`, `y` and `z` in either case.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'x' => Ok(RotationAxis::X),
            'y' => Ok(RotationAxis::Y),
            'z' => Ok(RotationAxis::Z),
            _ => Err(MatrixErrors::UnsupportedAxis(c)),
        }
    }
}

impl From<RotationAxis> for char {
    fn from(axis: RotationAxis) -> char {
        match axis {
            RotationAxis::X => 'x',
            RotationAxis::Y => 'y',
            RotationAxis::Z => 'z',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_from_char() {
        assert_eq!(RotationAxis::try_from('x'), Ok(RotationAxis::X));
        assert_eq!(RotationAxis::try_from('Y'), Ok(RotationAxis::Y));
        assert_eq!(RotationAxis::try_from('z'), Ok(RotationAxis::Z));
        assert_eq!(
            RotationAxis::try_from('w'),
            Err(MatrixErrors::UnsupportedAxis('w'))
        );
        assert_eq!(char::from(RotationAxis::Y), 'y');
    }
}
