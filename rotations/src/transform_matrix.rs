use crate::{MatrixErrors, axis::RotationAxis};
use coordinate_systems::{DEGREES_TO_RADIANS, Triple};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A 3x3 linear transform, usually a rotation. Indexed `(row, column)`.
///
/// There is no translation part; positions are composed separately.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformMatrix(pub Matrix3<f64>);

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix3<f64>> for TransformMatrix {
    fn from(value: Matrix3<f64>) -> Self {
        Self(value)
    }
}

impl TransformMatrix {
    /// Creates a new `TransformMatrix` from its elements in row order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        e11: f64,
        e12: f64,
        e13: f64,
        e21: f64,
        e22: f64,
        e23: f64,
        e31: f64,
        e32: f64,
        e33: f64,
    ) -> Self {
        Self(Matrix3::new(e11, e12, e13, e21, e22, e23, e31, e32, e33))
    }

    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    /// The transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let m = &self.0;
        Self::new(
            m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
            m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
            m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
            m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
            m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
            m[(0, 2)] * m[(1, 0)] - m[(0, 0)] * m[(1, 2)],
            m[(1, 0)] * m[(2, 1)] - m[(2, 0)] * m[(1, 1)],
            m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)],
            m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        )
    }

    /// True if the matrix only acts on x and y: the third row and column are
    /// those of the identity.
    pub fn is_planar(&self) -> bool {
        let m = &self.0;
        m[(2, 2)] == 1.0
            && m[(0, 2)] == 0.0
            && m[(2, 0)] == 0.0
            && m[(1, 2)] == 0.0
            && m[(2, 1)] == 0.0
    }

    /// Returns the inverse.
    ///
    /// Planar matrices are inverted from their upper 2x2 block, anything else
    /// through the adjugate. Fails with `MatrixErrors::Singular` when the
    /// determinant is smaller in magnitude than `f64::EPSILON`.
    pub fn invert(&self) -> Result<Self, MatrixErrors> {
        if self.is_planar() {
            let m = &self.0;
            let det = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
            if det.abs() < f64::EPSILON {
                return Err(MatrixErrors::Singular);
            }
            return Ok(Self::new(
                m[(1, 1)] / det,
                -m[(0, 1)] / det,
                0.0,
                -m[(1, 0)] / det,
                m[(0, 0)] / det,
                0.0,
                0.0,
                0.0,
                1.0,
            ));
        }

        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return Err(MatrixErrors::Singular);
        }
        Ok(Self(self.adjugate().0 / det))
    }

    /// `pre * post`.
    pub fn multiply(pre: &TransformMatrix, post: &TransformMatrix) -> Self {
        Self(pre.0 * post.0)
    }

    /// `self = pre * self`
    pub fn premultiply(&mut self, pre: &TransformMatrix) {
        self.0 = pre.0 * self.0;
    }

    /// `self = self * post`
    pub fn postmultiply(&mut self, post: &TransformMatrix) {
        self.0 *= post.0;
    }

    /// Column vector product `M v`: `v[i] = sum_j M[i][j] v[j]`.
    pub fn premultiply_vector(&self, v: Triple) -> Triple {
        self.0 * v
    }

    /// Row vector product `v M`: `v[i] = sum_j v[j] M[j][i]`.
    pub fn postmultiply_vector(&self, v: Triple) -> Triple {
        self.0.tr_mul(&v)
    }

    /// Right handed rotation of `angle` degrees about `axis`.
    pub fn rotation(angle: f64, axis: RotationAxis) -> Self {
        let (s, c) = (angle * DEGREES_TO_RADIANS).sin_cos();
        match axis {
            RotationAxis::X => Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c),
            RotationAxis::Y => Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c),
            RotationAxis::Z => Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Premultiplies by a rotation of `angle` degrees about `axis`.
    pub fn rotate_about(&mut self, angle: f64, axis: RotationAxis) {
        self.premultiply(&Self::rotation(angle, axis));
    }

    /// Premultiplies by a rotation of `angle` degrees about the axis named by
    /// `axis` (`x`, `y` or `z`, either case). Any other character leaves the
    /// matrix unchanged and returns `MatrixErrors::UnsupportedAxis`.
    pub fn rotate(&mut self, angle: f64, axis: char) -> Result<(), MatrixErrors> {
        let axis = RotationAxis::try_from(axis).inspect_err(|_| {
            tracing::warn!(axis = %axis, "rotation about an unknown axis rejected");
        })?;
        self.rotate_about(angle, axis);
        Ok(())
    }

    /// True if no elements differ by more than `tolerance` times the largest
    /// absolute element of either matrix. `tolerance` must be in `[0, 1]`.
    pub fn match_with_tolerance(&self, other: &TransformMatrix, tolerance: f64) -> bool {
        tolerance::match_scaled(self.0.as_slice(), other.0.as_slice(), tolerance)
    }
}

impl Mul<TransformMatrix> for TransformMatrix {
    type Output = TransformMatrix;

    fn mul(self, rhs: TransformMatrix) -> TransformMatrix {
        TransformMatrix::multiply(&self, &rhs)
    }
}

impl Mul<Triple> for TransformMatrix {
    type Output = Triple;

    fn mul(self, rhs: Triple) -> Triple {
        self.premultiply_vector(rhs)
    }
}
