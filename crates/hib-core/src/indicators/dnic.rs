//! Bornmann, Ye & Ye (2018): dynamically normalized citation impact.
//!
//! Two phases. [`Dnic::get_ekj`] aggregates the corpus into the expected
//! citation per (subject, calendar year); [`Dnic::extract`] divides a paper's
//! yearly citations by that expectation and looks for a late spike after a
//! below-expectation sleep.

use std::collections::{BTreeMap, BTreeSet};

use crate::baseline::EkjTable;
use crate::constants::{DNIC_PRE_PEAK_GAP, NO_SIGNAL};
use crate::error::{IndicatorError, Result};
use crate::history::CitationHistory;
use crate::paper::{Paper, SubjectSet};
use crate::thresholds::DnicThresholds;

pub struct Dnic;

impl Dnic {
    /// EKJ baseline over the corpus' publication years.
    pub fn get_ekj(papers: &[Paper]) -> Result<EkjTable> {
        let years: BTreeSet<i32> = papers.iter().map(|p| p.year).collect();
        Self::get_ekj_for_years(papers, years)
    }

    /// EKJ baseline over an explicit set of calendar years.
    ///
    /// A cell `(k, j)` exists when at least one paper tagged `k` was published
    /// on or before `j`. Its value is the total citations those papers got in
    /// `j` divided by how many of them were cited at all in `j`, or
    /// [`NO_SIGNAL`] when none were. Every contributing paper's history must
    /// reach year `j`.
    pub fn get_ekj_for_years(
        papers: &[Paper],
        years: impl IntoIterator<Item = i32>,
    ) -> Result<EkjTable> {
        let years: BTreeSet<i32> = years.into_iter().collect();

        // Pass 1: subject → papers.
        let mut by_subject: BTreeMap<&str, Vec<&Paper>> = BTreeMap::new();
        for paper in papers {
            if paper.subjects.is_empty() {
                continue;
            }
            if let Some(&latest) = years.range(paper.year..).next_back() {
                paper.citations_in(latest)?;
            }
            for subject in &paper.subjects {
                by_subject.entry(subject.as_str()).or_default().push(paper);
            }
        }

        // Pass 2: per subject, fold every history into calendar-year buckets.
        let mut table = EkjTable::new();
        let mut no_signal = 0usize;
        for (subject, group) in &by_subject {
            let mut buckets: BTreeMap<i32, (u64, usize)> = BTreeMap::new();
            for paper in group {
                for (offset, &ct) in paper.citations.as_slice().iter().enumerate() {
                    let year = paper.year + offset as i32;
                    if !years.contains(&year) {
                        continue;
                    }
                    let bucket = buckets.entry(year).or_default();
                    bucket.0 += u64::from(ct);
                    if ct >= 1 {
                        bucket.1 += 1;
                    }
                }
            }

            let Some(first) = group.iter().map(|p| p.year).min() else {
                continue;
            };
            for &year in years.range(first..) {
                let (total, cited) = buckets.get(&year).copied().unwrap_or_default();
                let value = if cited == 0 {
                    no_signal += 1;
                    NO_SIGNAL
                } else {
                    total as f64 / cited as f64
                };
                table.insert(subject, year, value);
            }
        }

        tracing::debug!(
            "built EKJ baseline: {} subjects, {} cells, {} without signal",
            by_subject.len(),
            table.len(),
            no_signal
        );
        Ok(table)
    }

    /// Classify one paper against a prebuilt EKJ table.
    ///
    /// The peak must fall in the second half of the history. For at least
    /// one subject, the peak's normalized citation must exceed `th.peak`
    /// while every normalized year up to two years before the peak stays
    /// below `th.before_peak`.
    pub fn extract(
        c: &CitationHistory,
        subjects: &SubjectSet,
        year: i32,
        ekj: &EkjTable,
        th: &DnicThresholds,
    ) -> Result<bool> {
        th.validate()?;
        let Some((t_peak, c_peak)) = c.peak() else {
            return Ok(false);
        };
        if t_peak <= c.len() / 2 {
            return Ok(false);
        }
        let peak_year = year + t_peak as i32;
        let pre_peak_end = t_peak.saturating_sub(DNIC_PRE_PEAK_GAP);

        for subject in subjects {
            if normalized(c_peak, ekj, subject, peak_year)? <= th.peak {
                continue;
            }
            // No years before the gap: nothing shows the paper slept.
            if pre_peak_end == 0 {
                continue;
            }
            let mut before_max = f64::NEG_INFINITY;
            for (offset, &ct) in c.as_slice()[..pre_peak_end].iter().enumerate() {
                let value = normalized(ct, ekj, subject, year + offset as i32)?;
                before_max = before_max.max(value);
            }
            if before_max < th.before_peak {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn extract_paper(paper: &Paper, ekj: &EkjTable, th: &DnicThresholds) -> Result<bool> {
        Self::extract(&paper.citations, &paper.subjects, paper.year, ekj, th)
    }
}

/// Citations divided by the (subject, year) expectation.
fn normalized(citations: u32, ekj: &EkjTable, subject: &str, year: i32) -> Result<f64> {
    let expected = ekj.get(subject, year)?;
    if expected == NO_SIGNAL {
        // Nobody in the group was cited, so neither was this paper.
        return if citations == 0 {
            Ok(0.0)
        } else {
            Err(IndicatorError::NoSignalBaseline {
                subject: subject.to_string(),
                year,
            })
        };
    }
    Ok(f64::from(citations) / expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn corpus() -> Vec<Paper> {
        vec![
            Paper::new("sleeper", 2000, ["x"], [0, 0, 0, 0, 8, 0]),
            Paper::new("steady", 2000, ["x"], [2, 2, 2, 2, 2, 2]),
            Paper::new("quiet", 2003, ["y"], [0, 0, 3]),
            Paper::new("quieter", 2003, ["y"], [0, 0, 1]),
        ]
    }

    fn observed(papers: &[Paper]) -> EkjTable {
        Dnic::get_ekj_for_years(papers, 2000..=2005).unwrap()
    }

    fn th(peak: f64, before_peak: f64) -> DnicThresholds {
        DnicThresholds { peak, before_peak }
    }

    #[test]
    fn test_ekj_over_publication_years() {
        let ekj = Dnic::get_ekj(&corpus()).unwrap();
        assert_eq!(ekj.len(), 3);
        assert_relative_eq!(ekj.get("x", 2000).unwrap(), 2.0);
        assert_relative_eq!(ekj.get("x", 2003).unwrap(), 2.0);
        assert_eq!(ekj.get("y", 2003).unwrap(), NO_SIGNAL);
        // No "y" paper existed yet in 2000.
        assert!(!ekj.contains("y", 2000));
    }

    #[test]
    fn test_ekj_averages_over_cited_papers_only() {
        let ekj = observed(&corpus());
        // 2004: sleeper 8 + steady 2 over two cited papers.
        assert_relative_eq!(ekj.get("x", 2004).unwrap(), 5.0);
        // 2001: only steady is cited.
        assert_relative_eq!(ekj.get("x", 2001).unwrap(), 2.0);
        assert_eq!(ekj.get("y", 2004).unwrap(), NO_SIGNAL);
        assert_relative_eq!(ekj.get("y", 2005).unwrap(), 2.0);
    }

    #[test]
    fn test_ekj_rebuild_is_identical() {
        let papers = corpus();
        assert_eq!(observed(&papers), observed(&papers));
    }

    #[test]
    fn test_ekj_requires_history_coverage() {
        let papers = corpus();
        assert!(matches!(
            Dnic::get_ekj_for_years(&papers, 2000..=2006),
            Err(IndicatorError::HistoryTooShort { .. })
        ));
    }

    #[test]
    fn test_extract_late_spike() {
        let papers = corpus();
        let ekj = observed(&papers);
        // 8 / 5 = 1.6 at the peak, zeros before.
        assert!(Dnic::extract_paper(&papers[0], &ekj, &th(1.5, 1.0)).unwrap());
        assert!(!Dnic::extract_paper(&papers[0], &ekj, &th(2.0, 1.0)).unwrap());
    }

    #[test]
    fn test_extract_early_peak_rejected() {
        let papers = corpus();
        let ekj = observed(&papers);
        assert!(!Dnic::extract_paper(&papers[1], &ekj, &th(0.0, 10.0)).unwrap());
    }

    #[test]
    fn test_extract_empty_pre_peak_window() {
        let papers = corpus();
        let ekj = observed(&papers);
        // Peak at t = 2 leaves no years before the two-year gap.
        assert!(!Dnic::extract_paper(&papers[2], &ekj, &th(0.0, 10.0)).unwrap());
    }

    #[test]
    fn test_extract_missing_peak_year_fails() {
        let papers = corpus();
        let ekj = Dnic::get_ekj(&papers).unwrap();
        assert!(matches!(
            Dnic::extract_paper(&papers[0], &ekj, &th(1.5, 1.0)),
            Err(IndicatorError::MissingBaseline { year: 2004, .. })
        ));
    }

    #[test]
    fn test_extract_no_signal_cells() {
        let ekj: EkjTable = [
            ("y", 2000, NO_SIGNAL),
            ("y", 2001, 2.0),
            ("y", 2002, 2.0),
            ("y", 2003, 2.0),
        ]
        .into_iter()
        .collect();
        let subjects = SubjectSet::from(["y".to_string()]);

        let uncited_sleep = CitationHistory::from([0, 0, 0, 9]);
        assert!(Dnic::extract(&uncited_sleep, &subjects, 2000, &ekj, &th(2.0, 1.0)).unwrap());

        let cited_sleep = CitationHistory::from([1, 0, 0, 9]);
        assert!(matches!(
            Dnic::extract(&cited_sleep, &subjects, 2000, &ekj, &th(2.0, 1.0)),
            Err(IndicatorError::NoSignalBaseline { year: 2000, .. })
        ));
    }

    #[test]
    fn test_extract_degenerate_inputs() {
        let ekj = EkjTable::new();
        let subjects = SubjectSet::from(["x".to_string()]);
        assert!(
            !Dnic::extract(&CitationHistory::default(), &subjects, 2000, &ekj, &th(1.0, 1.0))
                .unwrap()
        );
        let c = CitationHistory::from([0, 0, 0, 9]);
        assert!(!Dnic::extract(&c, &SubjectSet::new(), 2000, &ekj, &th(1.0, 1.0)).unwrap());
    }

    /// Per-cell full scan, used to check the grouped aggregation.
    fn scan_ekj(papers: &[Paper]) -> EkjTable {
        let years: BTreeSet<i32> = papers.iter().map(|p| p.year).collect();
        let subjects: BTreeSet<&str> = papers
            .iter()
            .flat_map(|p| p.subjects.iter().map(String::as_str))
            .collect();
        let mut table = EkjTable::new();
        for &year in &years {
            for &subject in &subjects {
                let targets: Vec<&Paper> = papers
                    .iter()
                    .filter(|p| p.year <= year && p.has_subject(subject))
                    .collect();
                if targets.is_empty() {
                    continue;
                }
                let cites: Vec<u32> = targets
                    .iter()
                    .map(|p| p.citations_in(year).unwrap().unwrap())
                    .collect();
                let cited = cites.iter().filter(|&&c| c >= 1).count();
                let total: u64 = cites.iter().map(|&c| u64::from(c)).sum();
                let value = if cited == 0 {
                    NO_SIGNAL
                } else {
                    total as f64 / cited as f64
                };
                table.insert(subject, year, value);
            }
        }
        table
    }

    fn arb_corpus() -> impl Strategy<Value = Vec<Paper>> {
        let subject = prop::sample::select(vec!["a", "b", "c"]);
        let paper = (
            2000i32..2010,
            prop::collection::btree_set(subject, 0..3),
            prop::collection::vec(prop_oneof![3 => Just(0u32), 1 => 1u32..20], 12),
        );
        prop::collection::vec(paper, 1..15).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (year, subjects, counts))| {
                    // Every history runs to the same census year, 2020.
                    let len = (2021 - year) as usize;
                    let citations: Vec<u32> = counts.into_iter().cycle().take(len).collect();
                    Paper::new(i.to_string(), year, subjects, citations)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn grouped_ekj_matches_full_scan(papers in arb_corpus()) {
            let grouped = Dnic::get_ekj(&papers).unwrap();
            prop_assert_eq!(&grouped, &scan_ekj(&papers));
            for (_, _, value) in grouped.iter() {
                prop_assert!(value == NO_SIGNAL || value >= 1.0);
            }
        }
    }
}
