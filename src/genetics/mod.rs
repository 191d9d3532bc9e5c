//! Genetics — codon-pair matrices and mutant detection
//!
//! A DNA matrix is a 6×6 grid of bases stored as six codon pairs (rows).
//! Completing the matrix derives its six columns and two diagonals; the
//! analyser compares a candidate's rows against the mutant signature.

mod symbol;
mod codon_pair;
mod matrix;
mod analyser;
pub mod decode;

pub use symbol::{Nucleotide, Symbol};
pub use codon_pair::{CodonPair, CODON_LEN, PAIR_LEN};
pub use matrix::{Direction, DnaMatrix, MatrixBuilder, MatrixError, MATRIX_SIZE};
pub use analyser::{mutant_signature, Analyser, MUTANT_MATCH_THRESHOLD};
pub use decode::{parse_matrix, parse_row, DecodeError};
