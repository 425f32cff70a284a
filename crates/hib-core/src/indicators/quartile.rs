//! Costas, van Leeuwen & van Raan (2010): document durability.
//!
//! Each paper gets a c50, the year it collected half of its citations. Within
//! each (subject, publication year) group the c50 values are cut at two
//! percentiles; a paper slower than the upper cut in most of its subjects is
//! delayed.

use std::collections::BTreeMap;

use crate::baseline::C50Table;
use crate::constants::{DELAYED_SCORE, HALF_SHARE};
use crate::error::Result;
use crate::history::CitationHistory;
use crate::paper::{Paper, SubjectSet, check_len};
use crate::thresholds::rate as check_rate;

pub struct Quartile;

/// Per-subject durability class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Durability {
    Fast = 1,
    Typical = 2,
    Slow = 3,
}

impl Quartile {
    /// First year at which the cumulative share reaches one half; 0 when uncited.
    pub fn get_c50(c: &CitationHistory) -> usize {
        let total = c.total();
        if total == 0 {
            return 0;
        }
        let half = HALF_SHARE * total as f64;
        c.cumulative()
            .iter()
            .position(|&acc| acc as f64 >= half)
            .unwrap_or(0)
    }

    pub fn get_c50_list(papers: &[Paper]) -> Vec<usize> {
        papers.iter().map(|p| Self::get_c50(&p.citations)).collect()
    }

    /// The `rate` order statistic of c50 within each (subject, year) group.
    ///
    /// Values are sorted ascending and the element at `floor(count * rate)` is
    /// taken as is, without interpolation. `rate == 1.0` takes the maximum.
    pub fn get_c_dic(c50_list: &[usize], papers: &[Paper], rate: f64) -> Result<C50Table> {
        check_len("c50 values", papers.len(), c50_list.len())?;
        check_rate("rate", rate)?;

        let mut groups: BTreeMap<(&str, i32), Vec<usize>> = BTreeMap::new();
        for (paper, &c50) in papers.iter().zip(c50_list) {
            for subject in &paper.subjects {
                groups
                    .entry((subject.as_str(), paper.year))
                    .or_default()
                    .push(c50);
            }
        }

        let mut table = C50Table::new();
        for ((subject, year), mut values) in groups {
            values.sort_unstable();
            let idx = ((values.len() as f64 * rate).floor() as usize).min(values.len() - 1);
            table.insert(subject, year, values[idx]);
        }

        tracing::debug!("built c50 table at rate {rate}: {} cells", table.len());
        Ok(table)
    }

    pub fn durability(c50: usize, before: usize, after: usize) -> Durability {
        if c50 < before {
            Durability::Fast
        } else if c50 > after {
            Durability::Slow
        } else {
            Durability::Typical
        }
    }

    /// Mean durability over the paper's subjects is at least 2.5.
    pub fn extract(
        c50: usize,
        subjects: &SubjectSet,
        year: i32,
        c_dic_before: &C50Table,
        c_dic_after: &C50Table,
    ) -> Result<bool> {
        if subjects.is_empty() {
            return Ok(false);
        }
        let mut total = 0u32;
        for subject in subjects {
            let before = c_dic_before.get(subject, year)?;
            let after = c_dic_after.get(subject, year)?;
            total += Self::durability(c50, before, after) as u32;
        }
        Ok(f64::from(total) / subjects.len() as f64 >= DELAYED_SCORE)
    }

    pub fn extract_paper(
        paper: &Paper,
        c_dic_before: &C50Table,
        c_dic_after: &C50Table,
    ) -> Result<bool> {
        let c50 = Self::get_c50(&paper.citations);
        Self::extract(c50, &paper.subjects, paper.year, c_dic_before, c_dic_after)
    }
}
