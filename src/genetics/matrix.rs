//! DNA matrix — six codon pairs forming a 6×6 grid of bases
//!
//! Built in two phases. [`MatrixBuilder`] collects rows and may still be
//! edited; once it holds six rows it converts into a [`DnaMatrix`], which
//! derives its columns and diagonals exactly once and never changes again.

use super::codon_pair::CodonPair;
use super::symbol::Symbol;
use log::debug;
use std::fmt;
use std::iter;

/// Rows (and columns) in a complete matrix
pub const MATRIX_SIZE: usize = 6;

/// Where in a matrix a sequence was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Horizontal row, 0-indexed
    Row(usize),
    /// Vertical column, 0-indexed, columns over the first codons come first
    Column(usize),
    /// Top-left to bottom-right
    DiagonalTopLeft,
    /// Bottom-left to top-right
    DiagonalBottomLeft,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Row(i) => write!(f, "row {}", i + 1),
            Direction::Column(i) => write!(f, "column {}", i + 1),
            Direction::DiagonalTopLeft => write!(f, "top-left diagonal"),
            Direction::DiagonalBottomLeft => write!(f, "bottom-left diagonal"),
        }
    }
}

/// Growable matrix holding at most [`MATRIX_SIZE`] rows
#[derive(Debug, Clone)]
pub struct MatrixBuilder<S> {
    rows: Vec<CodonPair<S>>,
}

impl<S: Symbol> MatrixBuilder<S> {
    pub fn new() -> Self {
        Self {
            rows: Vec::with_capacity(MATRIX_SIZE),
        }
    }

    /// Append a row; fails once the matrix is complete
    pub fn append(&mut self, pair: CodonPair<S>) -> Result<(), MatrixError> {
        if self.is_valid() {
            return Err(MatrixError::CapacityExceeded);
        }
        self.rows.push(pair);
        if self.is_valid() {
            debug!("Matrix complete: {:?}", self.to_sequence_list());
        }
        Ok(())
    }

    /// Remove the first row with the same sequence as `pair`.
    /// Only allowed while the matrix is incomplete.
    pub fn remove(&mut self, pair: &CodonPair<S>) -> Result<CodonPair<S>, MatrixError> {
        if self.is_valid() {
            return Err(MatrixError::RemovalNotAllowed);
        }
        let index = self
            .rows
            .iter()
            .position(|row| row.is_equal(pair))
            .ok_or_else(|| MatrixError::NotFound {
                sequence: pair.sequence(),
            })?;
        Ok(self.rows.remove(index))
    }

    /// True once the matrix holds exactly six rows
    pub fn is_valid(&self) -> bool {
        self.rows.len() == MATRIX_SIZE
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[CodonPair<S>] {
        &self.rows
    }

    pub fn to_sequence_list(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.sequence()).collect()
    }

    /// Derive the completed matrix without consuming the builder
    pub fn complete(&self) -> Result<DnaMatrix<S>, MatrixError> {
        let rows: [CodonPair<S>; MATRIX_SIZE] = self
            .rows
            .as_slice()
            .try_into()
            .map_err(|_| MatrixError::IncompleteMatrix { count: self.len() })?;
        Ok(DnaMatrix::from_rows(rows))
    }

    pub fn into_matrix(self) -> Result<DnaMatrix<S>, MatrixError> {
        self.complete()
    }
}

impl<S: Symbol> Default for MatrixBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> TryFrom<MatrixBuilder<S>> for DnaMatrix<S> {
    type Error = MatrixError;

    fn try_from(builder: MatrixBuilder<S>) -> Result<Self, Self::Error> {
        builder.into_matrix()
    }
}

/// Complete, immutable 6×6 matrix with derived columns and diagonals
#[derive(Debug, Clone)]
pub struct DnaMatrix<S> {
    rows: [CodonPair<S>; MATRIX_SIZE],
    vertical_columns: [CodonPair<S>; MATRIX_SIZE],
    diagonal_top_left: CodonPair<S>,
    diagonal_bottom_left: CodonPair<S>,
}

impl<S: Symbol> DnaMatrix<S> {
    /// Build from six rows, deriving columns and diagonals
    pub fn from_rows(rows: [CodonPair<S>; MATRIX_SIZE]) -> Self {
        let vertical_columns = std::array::from_fn(|i| {
            if i < 3 {
                column(&rows, |pair| pair.first, i)
            } else {
                column(&rows, |pair| pair.second, i - 3)
            }
        });

        let [r1, r2, r3, r4, r5, r6] = rows;

        // Down-right through rows 1-3 on the first codons, rows 4-6 on the second
        let diagonal_top_left = CodonPair::new(
            [r1.first[0], r2.first[1], r3.first[2]],
            [r4.second[0], r5.second[1], r6.second[2]],
        );

        // Up-right through rows 6-4 on the first codons, rows 3-1 on the second
        let diagonal_bottom_left = CodonPair::new(
            [r6.first[0], r5.first[1], r4.first[2]],
            [r3.second[0], r2.second[1], r1.second[2]],
        );

        Self {
            rows,
            vertical_columns,
            diagonal_top_left,
            diagonal_bottom_left,
        }
    }

    pub fn rows(&self) -> &[CodonPair<S>; MATRIX_SIZE] {
        &self.rows
    }

    pub fn vertical_columns(&self) -> &[CodonPair<S>; MATRIX_SIZE] {
        &self.vertical_columns
    }

    pub fn diagonal_top_left(&self) -> &CodonPair<S> {
        &self.diagonal_top_left
    }

    pub fn diagonal_bottom_left(&self) -> &CodonPair<S> {
        &self.diagonal_bottom_left
    }

    pub fn to_sequence_list(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.sequence()).collect()
    }

    /// Every scanned sequence with its position: rows, columns, then both diagonals
    pub fn sequences(&self) -> impl Iterator<Item = (Direction, &CodonPair<S>)> {
        let rows = self.rows.iter().enumerate().map(|(i, p)| (Direction::Row(i), p));
        let columns = self
            .vertical_columns
            .iter()
            .enumerate()
            .map(|(i, p)| (Direction::Column(i), p));
        rows.chain(columns)
            .chain(iter::once((Direction::DiagonalTopLeft, &self.diagonal_top_left)))
            .chain(iter::once((Direction::DiagonalBottomLeft, &self.diagonal_bottom_left)))
    }

    /// First place `pair`'s sequence occurs in this matrix
    pub fn locate(&self, pair: &CodonPair<S>) -> Option<Direction> {
        self.sequences()
            .find(|(_, candidate)| candidate.is_equal(pair))
            .map(|(direction, _)| direction)
    }

    /// Whether `pair`'s sequence occurs in any row, column or diagonal
    pub fn has_sequence(&self, pair: &CodonPair<S>) -> bool {
        self.locate(pair).is_some()
    }
}

impl<S: Symbol> fmt::Display for DnaMatrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Column `c` of the codon selected by `codon`, read top to bottom
fn column<S: Symbol>(
    rows: &[CodonPair<S>; MATRIX_SIZE],
    codon: impl Fn(&CodonPair<S>) -> [S; 3],
    c: usize,
) -> CodonPair<S> {
    CodonPair::new(
        [codon(&rows[0])[c], codon(&rows[1])[c], codon(&rows[2])[c]],
        [codon(&rows[3])[c], codon(&rows[4])[c], codon(&rows[5])[c]],
    )
}

/// Matrix construction and query errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix already holds {} codon pairs", MATRIX_SIZE)]
    CapacityExceeded,

    #[error("codon pairs cannot be removed from a complete matrix")]
    RemovalNotAllowed,

    #[error("codon pair {sequence} not found in matrix")]
    NotFound { sequence: String },

    #[error("matrix is not valid: it has {count} codon pairs only")]
    IncompleteMatrix { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::testing::{builder, pair, random_matrix, random_pair, random_pair_from, rng};
    use crate::genetics::Nucleotide::{self, A, C, G};

    #[test]
    fn test_appending_codon_pairs() {
        let mut rng = rng(1);
        let pairs: Vec<_> = (0..3).map(|_| random_pair(&mut rng)).collect();
        let matrix = builder(&pairs);

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.rows(), pairs.as_slice());
    }

    #[test]
    fn test_valid_matrix() {
        let mut rng = rng(2);
        let mut matrix = MatrixBuilder::new();
        for _ in 0..5 {
            matrix.append(random_pair(&mut rng)).unwrap();
            assert!(!matrix.is_valid());
        }
        matrix.append(random_pair(&mut rng)).unwrap();
        assert!(matrix.is_valid());
    }

    #[test]
    fn test_error_if_more_than_six_codon_pairs() {
        let mut rng = rng(3);
        let pairs: Vec<_> = (0..6).map(|_| random_pair(&mut rng)).collect();
        let mut matrix = builder(&pairs);

        let result = matrix.append(random_pair(&mut rng));
        assert_eq!(result, Err(MatrixError::CapacityExceeded));
        assert_eq!(matrix.len(), 6);
    }

    #[test]
    fn test_removal_error_after_valid() {
        let mut rng = rng(4);
        let p1 = pair("AAAAAA");
        let p2 = pair("CCCCCC");
        let p3 = pair("GGGGGG");
        let mut matrix = builder(&[p1, p2, p3]);
        assert!(!matrix.is_valid());

        let removed = matrix.remove(&p3).unwrap();
        assert_eq!(removed, p3);
        assert_eq!(matrix.len(), 2);

        let p4 = random_pair(&mut rng);
        for p in [random_pair(&mut rng), p4, random_pair(&mut rng), random_pair(&mut rng)] {
            matrix.append(p).unwrap();
        }
        assert!(matrix.is_valid());
        assert_eq!(matrix.remove(&p4), Err(MatrixError::RemovalNotAllowed));
        assert_eq!(matrix.len(), 6);
    }

    #[test]
    fn test_remove_missing_pair() {
        let mut matrix = builder(&[pair("AAAAAA"), pair("CCCCCC")]);
        let result = matrix.remove(&pair("TTTTTT"));
        assert_eq!(
            result,
            Err(MatrixError::NotFound {
                sequence: "TTTTTT".into()
            })
        );
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn test_remove_takes_first_equal_sequence() {
        let mut matrix = builder(&[pair("ACGTAC"), pair("CCCCCC"), pair("ACGTAC")]);
        matrix.remove(&pair("ACGTAC")).unwrap();
        assert_eq!(matrix.to_sequence_list(), vec!["CCCCCC", "ACGTAC"]);
    }

    #[test]
    fn test_incomplete_matrix_cannot_complete() {
        let matrix = builder(&[pair("ACGTAC"), pair("CCCCCC")]);
        assert_eq!(
            matrix.complete().unwrap_err(),
            MatrixError::IncompleteMatrix { count: 2 }
        );
        assert!(DnaMatrix::try_from(MatrixBuilder::<Nucleotide>::new()).is_err());
    }

    #[test]
    fn test_matrix_existent_sequence() {
        let mut rng = rng(5);
        let pairs: Vec<_> = (0..6).map(|_| random_pair(&mut rng)).collect();
        let matrix = builder(&pairs).into_matrix().unwrap();

        for (row, original) in matrix.rows().iter().zip(&pairs) {
            assert_eq!(row.sequence(), original.sequence());
        }
    }

    #[test]
    fn test_correct_sequence_list() {
        let mut rng = rng(6);
        let pairs: Vec<_> = (0..6).map(|_| random_pair(&mut rng)).collect();
        let sequences: Vec<String> = pairs.iter().map(|p| p.sequence()).collect();

        let matrix = builder(&pairs);
        assert_eq!(matrix.to_sequence_list(), sequences);
        assert_eq!(matrix.complete().unwrap().to_sequence_list(), sequences);
    }

    #[test]
    fn test_vertical_pairs_built() {
        let matrix = random_matrix(&mut rng(7));
        let p = matrix.rows();
        let name = |s: Nucleotide| s.to_string();

        let mut first_codon_columns = Vec::new();
        let mut second_codon_columns = Vec::new();
        for c in 0..3 {
            let top: String = (0..3).map(|r| name(p[r].first[c])).collect();
            let bottom: String = (3..6).map(|r| name(p[r].first[c])).collect();
            first_codon_columns.push(top + &bottom);

            let top: String = (0..3).map(|r| name(p[r].second[c])).collect();
            let bottom: String = (3..6).map(|r| name(p[r].second[c])).collect();
            second_codon_columns.push(top + &bottom);
        }
        let columns: Vec<String> = first_codon_columns.into_iter().chain(second_codon_columns).collect();

        assert_eq!(matrix.vertical_columns().len(), 6);
        for (expected, column) in columns.iter().zip(matrix.vertical_columns()) {
            assert_eq!(expected, &column.sequence());
        }
    }

    #[test]
    fn test_oblique_pairs_built() {
        let matrix = random_matrix(&mut rng(8));
        let p = matrix.rows();

        let top_down: String = [
            p[0].first[0], p[1].first[1], p[2].first[2],
            p[3].second[0], p[4].second[1], p[5].second[2],
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let bottom_up: String = [
            p[5].first[0], p[4].first[1], p[3].first[2],
            p[2].second[0], p[1].second[1], p[0].second[2],
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(top_down, matrix.diagonal_top_left().sequence());
        assert_eq!(bottom_up, matrix.diagonal_bottom_left().sequence());
    }

    #[test]
    fn test_known_layout() {
        let rows = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
        let matrix = builder(&rows.map(pair)).into_matrix().unwrap();

        let columns: Vec<String> = matrix.vertical_columns().iter().map(|c| c.sequence()).collect();
        assert_eq!(columns, vec!["ACTACT", "TATGCC", "GGAACA", "CTTACC", "GGGGTT", "ACTGAG"]);
        assert_eq!(matrix.diagonal_top_left().sequence(), "AAAATG");
        assert_eq!(matrix.diagonal_bottom_left().sequence(), "TCATGA");
    }

    #[test]
    fn test_horizontal_sequence_match() {
        let mut rng = rng(9);
        let matrix = DnaMatrix::from_rows(std::array::from_fn(|_| random_pair_from(&mut rng, &[A, C, G])));

        assert!(!matrix.has_sequence(&pair("TTTTTT")));
        assert!(matrix.has_sequence(&matrix.rows()[2]));
        assert_eq!(matrix.locate(&matrix.rows()[2]).map(|d| matches!(d, Direction::Row(_))), Some(true));
    }

    #[test]
    fn test_vertical_sequence_match() {
        let mut rng = rng(10);
        let matrix = DnaMatrix::from_rows(std::array::from_fn(|_| random_pair_from(&mut rng, &[A, C, G])));

        assert!(!matrix.has_sequence(&pair("TTTTTT")));
        assert!(matrix.has_sequence(&matrix.vertical_columns()[2]));
    }

    #[test]
    fn test_oblique_sequence_match() {
        let mut rng = rng(11);
        let matrix = DnaMatrix::from_rows(std::array::from_fn(|_| random_pair_from(&mut rng, &[A, C, G])));

        assert!(!matrix.has_sequence(&pair("TTTTTT")));
        assert!(matrix.has_sequence(matrix.diagonal_top_left()));
        assert!(matrix.has_sequence(matrix.diagonal_bottom_left()));
    }

    #[test]
    fn test_locate_reports_direction() {
        let rows = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
        let matrix = DnaMatrix::from_rows(rows.map(pair));

        assert_eq!(matrix.locate(&pair("CAGTGC")), Some(Direction::Row(1)));
        assert_eq!(matrix.locate(&pair("GGGGTT")), Some(Direction::Column(4)));
        assert_eq!(matrix.locate(&pair("AAAATG")), Some(Direction::DiagonalTopLeft));
        assert_eq!(matrix.locate(&pair("TCATGA")), Some(Direction::DiagonalBottomLeft));
        assert_eq!(matrix.locate(&pair("TTTTTT")), None);
        assert_eq!(matrix.sequences().count(), 14);
    }

    #[test]
    fn test_has_sequence_is_reflexive() {
        let mut rng = rng(12);
        for _ in 0..20 {
            let matrix = random_matrix(&mut rng);
            for row in matrix.rows() {
                assert!(matrix.has_sequence(row));
            }
        }
    }

    #[test]
    fn test_display_prints_rows() {
        let rows = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
        let matrix = DnaMatrix::from_rows(rows.map(pair));
        assert_eq!(matrix.to_string(), rows.join("\n"));
    }
}
