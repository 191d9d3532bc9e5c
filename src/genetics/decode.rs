//! Decoding text rows into codon pairs and matrices
//!
//! Input is six strings of six symbol names each, e.g. `"ATGCGA"`. Every
//! rejection names the offending row so callers can report it as-is.

use super::codon_pair::{CodonPair, PAIR_LEN};
use super::matrix::{DnaMatrix, MatrixBuilder, MatrixError};
use super::symbol::Symbol;

/// Decode a single 6-symbol row
pub fn parse_row<S: Symbol>(row: &str) -> Result<CodonPair<S>, DecodeError> {
    decode_row(0, row)
}

/// Decode a complete matrix; exactly six valid rows are required
pub fn parse_matrix<S: Symbol, T: AsRef<str>>(rows: &[T]) -> Result<DnaMatrix<S>, DecodeError> {
    if rows.is_empty() {
        return Err(DecodeError::Empty);
    }
    let mut builder = MatrixBuilder::new();
    for (index, row) in rows.iter().enumerate() {
        builder.append(decode_row(index, row.as_ref())?)?;
    }
    Ok(builder.into_matrix()?)
}

fn decode_row<S: Symbol>(index: usize, row: &str) -> Result<CodonPair<S>, DecodeError> {
    let len = row.chars().count();
    if len != PAIR_LEN {
        return Err(DecodeError::InvalidLength { row: index, len });
    }

    let mut symbols = [S::ALPHABET[0]; PAIR_LEN];
    for (slot, name) in symbols.iter_mut().zip(row.chars()) {
        *slot = S::from_name(name).ok_or_else(|| DecodeError::InvalidSymbol {
            row: index,
            symbol: name,
            value: row.to_string(),
            allowed: S::alphabet_names(),
        })?;
    }

    let [a, b, c, d, e, f] = symbols;
    Ok(CodonPair::new([a, b, c], [d, e, f]))
}

/// Reasons a text matrix is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("no DNA rows provided")]
    Empty,

    #[error("row {}: expected {} symbols, got {len}", .row + 1, PAIR_LEN)]
    InvalidLength { row: usize, len: usize },

    #[error("row {}: invalid symbol '{symbol}' in {value}; rows must have {} symbols from: {allowed}", .row + 1, PAIR_LEN)]
    InvalidSymbol {
        row: usize,
        symbol: char,
        value: String,
        allowed: String,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
