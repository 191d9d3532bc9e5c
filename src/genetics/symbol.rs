//! Symbol alphabets — the letters a codon pair is spelled with
//!
//! An alphabet is a closed enum implementing [`Symbol`]. Name lookups are
//! exhaustive matches, so membership is checked at compile time and the
//! only runtime check left is decoding characters from untrusted input.

use std::fmt;

/// A letter of a finite, closed alphabet
pub trait Symbol: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every member of the alphabet, in display order. Must not be empty.
    const ALPHABET: &'static [Self];

    /// Single-character name used to spell sequences
    fn name(self) -> char;

    /// Inverse of [`Symbol::name`]
    fn from_name(name: char) -> Option<Self>;

    /// Comma-separated list of the alphabet's names, e.g. `"A, C, G, T"`
    fn alphabet_names() -> String {
        Self::ALPHABET
            .iter()
            .map(|s| s.name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Nucleotide bases: adenine, cytosine, guanine and thymine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Full chemical name of the base
    pub fn chemical_name(&self) -> &str {
        match self {
            Nucleotide::A => "Adenine",
            Nucleotide::C => "Cytosine",
            Nucleotide::G => "Guanine",
            Nucleotide::T => "Thymine",
        }
    }
}

impl Symbol for Nucleotide {
    const ALPHABET: &'static [Self] = &[Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    fn name(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    fn from_name(name: char) -> Option<Self> {
        match name {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
