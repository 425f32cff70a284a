//! Papers and corpora: the in-memory shape callers hand to the indicators.
//!
//! Wire format:
//! ```json
//! { "papers": [ { "id": "p1", "year": 2001, "subjects": ["physics"], "citations": [0, 1, 4] } ] }
//! ```
//! `id` and `subjects` are optional.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::history::CitationHistory;

pub type SubjectSet = BTreeSet<String>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub id: String,
    pub year: i32,
    #[serde(default)]
    pub subjects: SubjectSet,
    pub citations: CitationHistory,
}

impl Paper {
    pub fn new(
        id: impl Into<String>,
        year: i32,
        subjects: impl IntoIterator<Item = impl Into<String>>,
        citations: impl Into<CitationHistory>,
    ) -> Self {
        Self {
            id: id.into(),
            year,
            subjects: subjects.into_iter().map(Into::into).collect(),
            citations: citations.into(),
        }
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.subjects.contains(subject)
    }

    /// Last calendar year covered by the history, `None` when it is empty.
    pub fn last_year(&self) -> Option<i32> {
        let len = i32::try_from(self.citations.len()).ok()?;
        (len > 0).then(|| self.year + len - 1)
    }

    /// Citations received in calendar year `year`.
    ///
    /// Years before publication are not part of the history; years past its
    /// end are an error because the history cannot say what happened there.
    pub fn citations_in(&self, year: i32) -> Result<Option<u32>> {
        let Ok(offset) = usize::try_from(year - self.year) else {
            return Ok(None);
        };
        match self.citations.get(offset) {
            Some(c) => Ok(Some(c)),
            None => Err(IndicatorError::HistoryTooShort {
                needed: offset + 1,
                actual: self.citations.len(),
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub papers: Vec<Paper>,
}

impl Corpus {
    pub fn new(papers: Vec<Paper>) -> Self {
        let mut corpus = Self { papers };
        corpus.fill_missing_ids();
        corpus
    }

    /// Zip parallel sequences into papers, ids taken from the position.
    pub fn from_parallel(
        histories: Vec<CitationHistory>,
        subjects: Vec<SubjectSet>,
        years: Vec<i32>,
    ) -> Result<Self> {
        check_len("subjects", histories.len(), subjects.len())?;
        check_len("years", histories.len(), years.len())?;

        let papers = histories
            .into_iter()
            .zip(subjects)
            .zip(years)
            .enumerate()
            .map(|(i, ((citations, subjects), year))| Paper {
                id: i.to_string(),
                year,
                subjects,
                citations,
            })
            .collect();
        Ok(Self { papers })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let corpus: Corpus = serde_json::from_str(json)?;
        Ok(Self::new(corpus.papers))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Paper> {
        self.papers.iter()
    }

    /// Distinct publication years, ascending.
    pub fn publication_years(&self) -> BTreeSet<i32> {
        self.papers.iter().map(|p| p.year).collect()
    }

    /// Every calendar year from the earliest publication to the last year any
    /// history reaches.
    pub fn observed_years(&self) -> BTreeSet<i32> {
        let first = self.papers.iter().map(|p| p.year).min();
        let last = self.papers.iter().filter_map(Paper::last_year).max();
        match (first, last) {
            (Some(first), Some(last)) => (first..=last).collect(),
            _ => BTreeSet::new(),
        }
    }

    pub fn subjects(&self) -> BTreeSet<&str> {
        self.papers
            .iter()
            .flat_map(|p| p.subjects.iter().map(String::as_str))
            .collect()
    }

    fn fill_missing_ids(&mut self) {
        for (i, paper) in self.papers.iter_mut().enumerate() {
            if paper.id.is_empty() {
                paper.id = i.to_string();
            }
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Paper;
    type IntoIter = std::slice::Iter<'a, Paper>;

    fn into_iter(self) -> Self::IntoIter {
        self.papers.iter()
    }
}

pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(IndicatorError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}
