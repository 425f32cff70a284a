use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Corpus-derived scalar per (subject, calendar year).
///
/// Built once from a corpus snapshot and read-only afterward. Iteration is
/// ordered by subject, then year, so two builds from the same corpus compare
/// and serialize identically.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineTable<V> {
    cells: BTreeMap<String, BTreeMap<i32, V>>,
}

/// Average normalized citation per (subject, year), `NO_SIGNAL` when uncited.
pub type EkjTable = BaselineTable<f64>;

/// Percentile c50 per (subject, publication year).
pub type C50Table = BaselineTable<usize>;

impl<V: Copy> BaselineTable<V> {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, subject: &str, year: i32, value: V) {
        self.cells
            .entry(subject.to_string())
            .or_default()
            .insert(year, value);
    }

    /// Look up a cell. An absent key means the table was built from a
    /// different corpus and is always an error.
    pub fn get(&self, subject: &str, year: i32) -> Result<V> {
        self.cells
            .get(subject)
            .and_then(|years| years.get(&year))
            .copied()
            .ok_or_else(|| IndicatorError::MissingBaseline {
                subject: subject.to_string(),
                year,
            })
    }

    pub fn contains(&self, subject: &str, year: i32) -> bool {
        self.cells
            .get(subject)
            .is_some_and(|years| years.contains_key(&year))
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All cells as `(subject, year, value)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32, V)> + '_ {
        self.cells.iter().flat_map(|(subject, years)| {
            years
                .iter()
                .map(move |(&year, &value)| (subject.as_str(), year, value))
        })
    }
}

impl<S: AsRef<str>, V: Copy> FromIterator<(S, i32, V)> for BaselineTable<V> {
    fn from_iter<I: IntoIterator<Item = (S, i32, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (subject, year, value) in iter {
            table.insert(subject.as_ref(), year, value);
        }
        table
    }
}
