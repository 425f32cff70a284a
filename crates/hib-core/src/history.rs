use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Yearly citation counts, index 0 = publication year.
///
/// Counts are `u32`, so the non-negativity invariant holds by construction
/// (including on deserialization, where a negative count is a parse error).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationHistory(Vec<u32>);

impl CitationHistory {
    pub fn new(counts: Vec<u32>) -> Self {
        Self(counts)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Citations received `offset` years after publication.
    pub fn get(&self, offset: usize) -> Option<u32> {
        self.0.get(offset).copied()
    }

    /// Total citations over the whole history.
    pub fn total(&self) -> u64 {
        sum(&self.0)
    }

    pub fn is_uncited(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Index and value of the first maximum, `None` for an empty history.
    pub fn peak(&self) -> Option<(usize, u32)> {
        peak(&self.0)
    }

    /// Running totals: `cumulative()[t] = c[0] + ... + c[t]`.
    pub fn cumulative(&self) -> Vec<u64> {
        self.0
            .iter()
            .scan(0u64, |acc, &c| {
                *acc += u64::from(c);
                Some(*acc)
            })
            .collect()
    }

    /// Cumulative citation share `cumsum(c) / sum(c)`; `None` when uncited.
    pub fn cumulative_share(&self) -> Option<Vec<f64>> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = total as f64;
        Some(
            self.cumulative()
                .into_iter()
                .map(|acc| acc as f64 / total)
                .collect(),
        )
    }

    /// `c[..end]`, failing instead of truncating when the history is shorter.
    pub fn head(&self, end: usize) -> Result<&[u32]> {
        self.0.get(..end).ok_or(IndicatorError::HistoryTooShort {
            needed: end,
            actual: self.0.len(),
        })
    }

    /// `c[start..end]`, failing instead of truncating when the history is shorter.
    pub fn window(&self, start: usize, end: usize) -> Result<&[u32]> {
        self.0.get(start..end).ok_or(IndicatorError::HistoryTooShort {
            needed: end,
            actual: self.0.len(),
        })
    }
}

impl From<Vec<u32>> for CitationHistory {
    fn from(counts: Vec<u32>) -> Self {
        Self(counts)
    }
}

impl From<&[u32]> for CitationHistory {
    fn from(counts: &[u32]) -> Self {
        Self(counts.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for CitationHistory {
    fn from(counts: [u32; N]) -> Self {
        Self(counts.to_vec())
    }
}

impl FromIterator<u32> for CitationHistory {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub(crate) fn sum(counts: &[u32]) -> u64 {
    counts.iter().map(|&c| u64::from(c)).sum()
}

/// Arithmetic mean; 0.0 for an empty slice.
pub(crate) fn mean(counts: &[u32]) -> f64 {
    if counts.is_empty() {
        0.0
    } else {
        sum(counts) as f64 / counts.len() as f64
    }
}

/// First maximum, matching `argmax` tie-breaking.
pub(crate) fn peak(counts: &[u32]) -> Option<(usize, u32)> {
    let mut best: Option<(usize, u32)> = None;
    for (t, &c) in counts.iter().enumerate() {
        match best {
            Some((_, m)) if c <= m => {}
            _ => best = Some((t, c)),
        }
    }
    best
}
