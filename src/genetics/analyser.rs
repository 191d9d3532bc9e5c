//! Analyser — decides whether a DNA matrix is mutant
//!
//! The analyser holds the mutant signature, a fixed reference matrix. A
//! candidate is mutant when more than one of its rows recurs somewhere in
//! the signature: in a row, a column or either diagonal.

use super::codon_pair::CodonPair;
use super::matrix::{DnaMatrix, MatrixBuilder, MatrixError};
use super::symbol::{Nucleotide, Symbol};
use super::symbol::Nucleotide::{A, C, G, T};
use log::debug;

/// A candidate is mutant when strictly more rows than this match
pub const MUTANT_MATCH_THRESHOLD: usize = 1;

/// Rows of the canonical mutant signature
const MUTANT_SIGNATURE: [([Nucleotide; 3], [Nucleotide; 3]); 6] = [
    ([A, T, G], [C, G, A]),
    ([C, A, G], [T, G, C]),
    ([T, T, A], [T, G, T]),
    ([A, G, A], [A, G, G]),
    ([C, C, C], [C, T, A]),
    ([T, C, A], [C, T, G]),
];

/// The canonical mutant signature: `ATGCGA CAGTGC TTATGT AGAAGG CCCCTA TCACTG`
pub fn mutant_signature() -> DnaMatrix<Nucleotide> {
    DnaMatrix::from_rows(MUTANT_SIGNATURE.map(|(first, second)| CodonPair::new(first, second)))
}

/// Mutant detector over a fixed reference matrix
#[derive(Debug, Clone)]
pub struct Analyser<S> {
    reference: DnaMatrix<S>,
}

impl Analyser<Nucleotide> {
    /// Analyser over the canonical mutant signature
    pub fn new() -> Self {
        Self::with_reference(mutant_signature())
    }
}

impl Default for Analyser<Nucleotide> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Analyser<S> {
    pub fn with_reference(reference: DnaMatrix<S>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &DnaMatrix<S> {
        &self.reference
    }

    /// Indices of the candidate rows found anywhere in the reference
    pub fn matching_rows(&self, candidate: &DnaMatrix<S>) -> Vec<usize> {
        candidate
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| self.reference.has_sequence(row))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_mutant(&self, candidate: &DnaMatrix<S>) -> bool {
        let matches = self.matching_rows(candidate);
        let mutant = matches.len() > MUTANT_MATCH_THRESHOLD;
        debug!(
            "Analysed {:?}: {} matching rows {:?} -> mutant={}",
            candidate.to_sequence_list(),
            matches.len(),
            matches,
            mutant
        );
        mutant
    }

    /// Verdict for a matrix still under construction; fails unless it is complete
    pub fn evaluate(&self, candidate: &MatrixBuilder<S>) -> Result<bool, MatrixError> {
        let matrix = candidate.complete()?;
        Ok(self.is_mutant(&matrix))
    }
}
