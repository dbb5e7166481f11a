use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::LogoMatrix;

/// One-shot value transform applied before layout.
///
/// Negation runs first, then row centering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatrixTransform {
    pub negate: bool,
    pub center: bool,
}

impl MatrixTransform {
    #[must_use]
    pub fn new(negate: bool, center: bool) -> Self {
        Self { negate, center }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        !self.negate && !self.center
    }

    #[must_use]
    pub fn apply(self, matrix: LogoMatrix) -> LogoMatrix {
        if self.is_identity() {
            return matrix;
        }
        trace!(
            negate = self.negate,
            center = self.center,
            positions = matrix.len(),
            "transform matrix"
        );
        let matrix = if self.negate { matrix.negated() } else { matrix };
        if self.center {
            matrix.centered()
        } else {
            matrix
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::MatrixTransform;
    use crate::core::LogoMatrix;

    #[test]
    fn negation_happens_before_centering() {
        let matrix =
            LogoMatrix::with_default_positions(["A", "B"], vec![vec![1.0, 3.0]]).expect("matrix");
        let out = MatrixTransform::new(true, true).apply(matrix);
        let row = out.row(0).expect("row");
        assert_abs_diff_eq!(row[0], 1.0);
        assert_abs_diff_eq!(row[1], -1.0);
    }

    #[test]
    fn identity_leaves_values_untouched() {
        let matrix =
            LogoMatrix::with_default_positions(["A", "B"], vec![vec![0.4, -0.2]]).expect("matrix");
        let out = MatrixTransform::default().apply(matrix.clone());
        assert_eq!(out, matrix);
    }
}
