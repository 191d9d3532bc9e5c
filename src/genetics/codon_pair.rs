//! CodonPair — two codons read as one 6-symbol sequence
//!
//! A codon is a triplet of bases. A matrix row, column or diagonal is two
//! codons back to back, and two pairs are "the same" exactly when their
//! concatenated sequences are equal.

use super::symbol::Symbol;
use rand::Rng;
use std::fmt;

/// Number of symbols in a single codon
pub const CODON_LEN: usize = 3;

/// Number of symbols in a full pair sequence
pub const PAIR_LEN: usize = CODON_LEN * 2;

/// Two ordered codons forming a 6-symbol sequence
#[derive(Debug, Clone, Copy)]
pub struct CodonPair<S> {
    pub first: [S; CODON_LEN],
    pub second: [S; CODON_LEN],
}

impl<S: Symbol> CodonPair<S> {
    pub fn new(first: [S; CODON_LEN], second: [S; CODON_LEN]) -> Self {
        Self { first, second }
    }

    /// Generate a pair with every symbol drawn uniformly from the alphabet
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pick = || S::ALPHABET[rng.gen_range(0..S::ALPHABET.len())];
        Self {
            first: [pick(), pick(), pick()],
            second: [pick(), pick(), pick()],
        }
    }

    /// All six symbols in positional order
    pub fn symbols(&self) -> [S; PAIR_LEN] {
        let [a, b, c] = self.first;
        let [d, e, f] = self.second;
        [a, b, c, d, e, f]
    }

    /// Names of all six symbols, first codon then second
    pub fn sequence(&self) -> String {
        self.symbols().iter().map(|s| s.name()).collect()
    }

    /// Sequence equality, the one sameness check used for matching
    pub fn is_equal(&self, other: &CodonPair<S>) -> bool {
        self.sequence() == other.sequence()
    }
}

impl<S: Symbol> PartialEq for CodonPair<S> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<S: Symbol> Eq for CodonPair<S> {}

impl<S: Symbol> fmt::Display for CodonPair<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::symbol::Nucleotide::{self, A, C, G, T};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_correct_sequence() {
        let first = [A, C, G];
        let second = [G, T, T];
        let pair = CodonPair::new(first, second);

        let expected: String = first.iter().chain(second.iter()).map(|s| s.name()).collect();
        assert_eq!(pair.sequence(), expected);
        assert_eq!(pair.sequence(), "ACGGTT");
        assert_eq!(pair.to_string(), "ACGGTT");
    }

    #[test]
    fn test_sequence_equality() {
        let pair1 = CodonPair::new([A, C, G], [G, T, T]);
        let pair2 = CodonPair::new([A, C, G], [G, T, T]);
        let pair3 = CodonPair::new([A, A, G], [C, T, G]);

        assert!(!pair1.is_equal(&pair3));
        assert!(!pair2.is_equal(&pair3));
        assert!(!pair3.is_equal(&pair1));
        assert!(!pair3.is_equal(&pair2));

        assert!(pair1.is_equal(&pair2));
        assert!(pair2.is_equal(&pair1));
        assert_eq!(pair1, pair2);
    }

    #[test]
    fn test_codon_order_matters() {
        // Same symbols, swapped codons
        let pair = CodonPair::new([A, A, A], [T, T, T]);
        let swapped = CodonPair::new([T, T, T], [A, A, A]);
        assert!(!pair.is_equal(&swapped));
    }

    #[test]
    fn test_random_pairs_use_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pair: CodonPair<Nucleotide> = CodonPair::random(&mut rng);
            let seq = pair.sequence();
            assert_eq!(seq.len(), PAIR_LEN);
            assert!(seq.chars().all(|c| Nucleotide::from_name(c).is_some()));
        }
    }
}
