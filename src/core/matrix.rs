use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{LogoError, LogoResult};

/// Position x character value table.
///
/// Rows are positions (unique, finite, kept in input order); columns are
/// characters (unique, non-empty strings, kept in input order). A `NaN` cell
/// is an absent contribution: it produces no glyph and takes no part in
/// stacking or centering. Infinite cells are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MatrixData", into = "MatrixData")]
pub struct LogoMatrix {
    positions: IndexSet<OrderedFloat<f64>>,
    characters: IndexSet<String>,
    values: Vec<f64>,
}

/// Wire form of [`LogoMatrix`]; `null` cells are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixData {
    pub positions: Vec<f64>,
    pub characters: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl LogoMatrix {
    /// Builds a validated matrix from explicit position labels, character
    /// labels and one row of values per position.
    pub fn new<S: Into<String>>(
        positions: Vec<f64>,
        characters: impl IntoIterator<Item = S>,
        rows: Vec<Vec<f64>>,
    ) -> LogoResult<Self> {
        if positions.is_empty() {
            return Err(LogoError::InvalidConfig(
                "matrix must contain at least one position".to_owned(),
            ));
        }
        if rows.len() != positions.len() {
            return Err(LogoError::InvalidConfig(format!(
                "matrix has {} positions but {} rows",
                positions.len(),
                rows.len()
            )));
        }

        let mut position_set = IndexSet::with_capacity(positions.len());
        for position in positions {
            if !position.is_finite() {
                return Err(LogoError::InvalidConfig(format!(
                    "matrix position {position} must be finite"
                )));
            }
            // -0.0 and 0.0 are the same label.
            let key = OrderedFloat(position + 0.0);
            if !position_set.insert(key) {
                return Err(LogoError::InvalidConfig(format!(
                    "matrix position {position} appears more than once"
                )));
            }
        }

        let mut character_set = IndexSet::new();
        for character in characters {
            let character = character.into();
            if character.is_empty() {
                return Err(LogoError::InvalidConfig(
                    "matrix characters must be non-empty strings".to_owned(),
                ));
            }
            if character_set.contains(&character) {
                return Err(LogoError::InvalidConfig(format!(
                    "matrix character `{character}` appears more than once"
                )));
            }
            character_set.insert(character);
        }
        if character_set.is_empty() {
            return Err(LogoError::InvalidConfig(
                "matrix must contain at least one character".to_owned(),
            ));
        }

        let width = character_set.len();
        let mut values = Vec::with_capacity(rows.len() * width);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LogoError::InvalidConfig(format!(
                    "matrix row {row_index} has {} values, expected {width}",
                    row.len()
                )));
            }
            if let Some(bad) = row.iter().find(|value| value.is_infinite()) {
                return Err(LogoError::InvalidConfig(format!(
                    "matrix row {row_index} contains non-finite value {bad}"
                )));
            }
            values.extend(row);
        }

        Ok(Self {
            positions: position_set,
            characters: character_set,
            values,
        })
    }

    /// Builds a matrix whose positions are `0, 1, 2, ...` in row order.
    pub fn with_default_positions<S: Into<String>>(
        characters: impl IntoIterator<Item = S>,
        rows: Vec<Vec<f64>>,
    ) -> LogoResult<Self> {
        let positions = (0..rows.len()).map(|index| index as f64).collect();
        Self::new(positions, characters, rows)
    }

    /// Number of positions (the logo length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; construction rejects empty matrices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.positions.iter().map(|position| position.0)
    }

    #[must_use]
    pub fn position_at(&self, row: usize) -> Option<f64> {
        self.positions.get_index(row).map(|position| position.0)
    }

    #[must_use]
    pub fn characters(&self) -> &IndexSet<String> {
        &self.characters
    }

    #[must_use]
    pub fn position_index(&self, position: f64) -> Option<usize> {
        self.positions.get_index_of(&OrderedFloat(position + 0.0))
    }

    #[must_use]
    pub fn character_index(&self, character: &str) -> Option<usize> {
        self.characters.get_index_of(character)
    }

    /// Values of one position across all characters, in column order.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let width = self.characters.len();
        let start = row.checked_mul(width)?;
        self.values.get(start..start.checked_add(width)?)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.characters.len())
    }

    #[must_use]
    pub fn value(&self, position: f64, character: &str) -> Option<f64> {
        let row = self.position_index(position)?;
        let column = self.character_index(character)?;
        self.row(row)?.get(column).copied()
    }

    /// Smallest and largest position label.
    #[must_use]
    pub fn position_range(&self) -> (f64, f64) {
        self.positions()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), p| {
                (low.min(p), high.max(p))
            })
    }

    /// Count of present (non-`NaN`) cells.
    #[must_use]
    pub fn present_cell_count(&self) -> usize {
        self.values.iter().filter(|value| !value.is_nan()).count()
    }

    /// Multiplies every value by -1. Absent cells stay absent.
    #[must_use]
    pub fn negated(mut self) -> Self {
        for value in &mut self.values {
            *value = -*value;
        }
        self
    }

    /// Subtracts each row's mean over its present cells from that row.
    #[must_use]
    pub fn centered(mut self) -> Self {
        let width = self.characters.len();
        for row in self.values.chunks_exact_mut(width) {
            let (sum, count) = row
                .iter()
                .filter(|value| !value.is_nan())
                .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
            if count == 0 {
                continue;
            }
            let mean = sum / count as f64;
            for value in row.iter_mut() {
                *value -= mean;
            }
        }
        self
    }
}

impl TryFrom<MatrixData> for LogoMatrix {
    type Error = LogoError;

    fn try_from(data: MatrixData) -> LogoResult<Self> {
        let rows = data
            .values
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.unwrap_or(f64::NAN)).collect())
            .collect();
        Self::new(data.positions, data.characters, rows)
    }
}

impl From<LogoMatrix> for MatrixData {
    fn from(matrix: LogoMatrix) -> Self {
        let values = matrix
            .rows()
            .map(|row| {
                row.iter()
                    .map(|value| (!value.is_nan()).then_some(*value))
                    .collect()
            })
            .collect();
        Self {
            positions: matrix.positions().collect(),
            characters: matrix.characters.iter().cloned().collect(),
            values,
        }
    }
}

impl PartialEq for LogoMatrix {
    /// Labels must match exactly; cells compare bitwise-equal-or-both-absent.
    fn eq(&self, other: &Self) -> bool {
        self.positions.iter().eq(other.positions.iter())
            && self.characters.iter().eq(other.characters.iter())
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(left, right)| left == right || (left.is_nan() && right.is_nan()))
    }
}

#[cfg(test)]
mod tests {
    use super::LogoMatrix;

    fn acgt(rows: Vec<Vec<f64>>) -> LogoMatrix {
        LogoMatrix::with_default_positions(["A", "C", "G", "T"], rows).expect("matrix")
    }

    #[test]
    fn duplicate_positions_are_rejected() {
        let err = LogoMatrix::new(vec![1.0, 1.0], ["A"], vec![vec![0.1], vec![0.2]])
            .expect_err("duplicate");
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(LogoMatrix::with_default_positions(["A", "C"], vec![vec![0.1]]).is_err());
    }

    #[test]
    fn rows_past_the_end_are_absent() {
        let matrix = acgt(vec![vec![0.1, 0.2, 0.3, 0.4]]);
        assert_eq!(matrix.row(0), Some(&[0.1, 0.2, 0.3, 0.4][..]));
        assert_eq!(matrix.row(1), None);
        assert_eq!(matrix.row(usize::MAX), None);
    }

    #[test]
    fn infinite_cells_are_rejected() {
        assert!(LogoMatrix::with_default_positions(["A"], vec![vec![f64::INFINITY]]).is_err());
    }

    #[test]
    fn centering_ignores_absent_cells() {
        let matrix = acgt(vec![vec![1.0, 3.0, f64::NAN, 2.0]]).centered();
        let row = matrix.row(0).expect("row");
        assert_eq!(row[0], -1.0);
        assert_eq!(row[1], 1.0);
        assert!(row[2].is_nan());
        assert_eq!(row[3], 0.0);
    }

    #[test]
    fn negative_zero_position_matches_zero() {
        let matrix = acgt(vec![vec![0.0; 4]]);
        assert_eq!(matrix.position_index(-0.0), Some(0));
    }

    #[test]
    fn json_round_trip_keeps_absent_cells() {
        let matrix = acgt(vec![vec![0.5, f64::NAN, -0.25, 0.0]]);
        let json = serde_json::to_string(&matrix).expect("serialize");
        assert!(json.contains("null"));
        let back: LogoMatrix = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, matrix);
    }
}
