//! Mutant DNA — codon-pair matrices matched against a mutant signature
//!
//! A 6×6 grid of nucleotides is read as six codon-pair rows. The analyser
//! flags a grid as mutant when more than one of its rows recurs in the
//! signature's rows, columns or diagonals.

pub mod genetics;
pub mod ledger;
pub mod config;

pub use genetics::{
    mutant_signature, parse_matrix, parse_row, Analyser, CodonPair, DecodeError, Direction,
    DnaMatrix, MatrixBuilder, MatrixError, Nucleotide, Symbol,
};
pub use ledger::{Statistics, VerdictLedger, VerdictRecord};
pub use config::{AnalyserConfig, ConfigError};
