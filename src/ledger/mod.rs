//! Verdict ledger — in-memory log of analysed matrices
//!
//! Every verdict is recorded with its rows and time. Statistics are derived
//! from the records on demand, so there is nothing to invalidate.

use crate::genetics::{DnaMatrix, Symbol};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

/// A single analysed matrix and its verdict
#[derive(Debug, Clone, Serialize)]
pub struct VerdictRecord {
    pub dna_sequence: Vec<String>,
    pub mutant: bool,
    pub requested_at: DateTime<Utc>,
}

/// Aggregate counts over all recorded verdicts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub count_human_dna: u64,
    pub count_mutant_dna: u64,
    /// Mutants per human, one decimal place; 0 until more than one human is seen
    pub ratio: f64,
}

impl Statistics {
    pub fn from_counts(count_human_dna: u64, count_mutant_dna: u64) -> Self {
        let ratio = if count_human_dna > 1 {
            let raw = count_mutant_dna as f64 / count_human_dna as f64;
            (raw * 10.0).round() / 10.0
        } else {
            0.0
        };
        Self {
            count_human_dna,
            count_mutant_dna,
            ratio,
        }
    }
}

#[derive(Debug, Default)]
pub struct VerdictLedger {
    records: Vec<VerdictRecord>,
}

impl VerdictLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the verdict reached for `matrix`
    pub fn record<S: Symbol>(&mut self, matrix: &DnaMatrix<S>, mutant: bool) -> &VerdictRecord {
        let record = VerdictRecord {
            dna_sequence: matrix.to_sequence_list(),
            mutant,
            requested_at: Utc::now(),
        };
        debug!("Recorded verdict mutant={} for {:?}", mutant, record.dna_sequence);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Records in the order they were made
    pub fn records(&self) -> &[VerdictRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn statistics(&self) -> Statistics {
        let mutants = self.records.iter().filter(|r| r.mutant).count() as u64;
        let humans = self.records.len() as u64 - mutants;
        Statistics::from_counts(humans, mutants)
    }

    pub fn summary(&self) -> String {
        let stats = self.statistics();
        format!(
            "VerdictLedger | {} verdicts | {} human | {} mutant | ratio {:.1}",
            self.records.len(),
            stats.count_human_dna,
            stats.count_mutant_dna,
            stats.ratio
        )
    }
}
