//! Run any selection of indicators over a corpus.
//!
//! Corpus baselines are built once, up front, and only for the indicators
//! that need them: the EKJ table over every observed calendar year for DNIC,
//! and the before/after c50 percentile tables for Quartile.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::baseline::{C50Table, EkjTable};
use crate::error::{IndicatorError, Result};
use crate::indicators::{
    AdjustedGiniCoefficient, Average, BeautyCoefficient, BeautyCoefficientCumulativePercentage,
    CitationAngle, CitationDelay, Dnic, ExponentialQuartile, KValue, Naive, Quartile,
};
use crate::paper::{Corpus, Paper};
use crate::thresholds::ThresholdSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    AdjustedGini,
    Average,
    BeautyCoefficient,
    BeautyCoefficientCp,
    CitationAngle,
    CitationDelay,
    Dnic,
    ExponentialQuartile,
    KValue,
    Naive,
    Quartile,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 11] = [
        IndicatorKind::AdjustedGini,
        IndicatorKind::Average,
        IndicatorKind::BeautyCoefficient,
        IndicatorKind::BeautyCoefficientCp,
        IndicatorKind::CitationAngle,
        IndicatorKind::CitationDelay,
        IndicatorKind::Dnic,
        IndicatorKind::ExponentialQuartile,
        IndicatorKind::KValue,
        IndicatorKind::Naive,
        IndicatorKind::Quartile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IndicatorKind::AdjustedGini => "adjusted_gini",
            IndicatorKind::Average => "average",
            IndicatorKind::BeautyCoefficient => "beauty_coefficient",
            IndicatorKind::BeautyCoefficientCp => "beauty_coefficient_cp",
            IndicatorKind::CitationAngle => "citation_angle",
            IndicatorKind::CitationDelay => "citation_delay",
            IndicatorKind::Dnic => "dnic",
            IndicatorKind::ExponentialQuartile => "exponential_quartile",
            IndicatorKind::KValue => "k_value",
            IndicatorKind::Naive => "naive",
            IndicatorKind::Quartile => "quartile",
        }
    }

    /// Whether the indicator reads a corpus baseline.
    pub fn needs_corpus(self) -> bool {
        matches!(self, IndicatorKind::Dnic | IndicatorKind::Quartile)
    }

    /// Classifiers yield a hibernator flag, the rest a continuous score.
    pub fn is_classifier(self) -> bool {
        matches!(
            self,
            IndicatorKind::Average
                | IndicatorKind::CitationAngle
                | IndicatorKind::Dnic
                | IndicatorKind::ExponentialQuartile
                | IndicatorKind::Naive
                | IndicatorKind::Quartile
        )
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self> {
        IndicatorKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| IndicatorError::UnknownIndicator(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Score(f64),
    Hibernator(bool),
}

impl IndicatorValue {
    pub fn as_score(self) -> Option<f64> {
        match self {
            IndicatorValue::Score(s) => Some(s),
            IndicatorValue::Hibernator(_) => None,
        }
    }

    pub fn is_hibernator(self) -> bool {
        matches!(self, IndicatorValue::Hibernator(true))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaperReport {
    pub id: String,
    pub year: i32,
    pub values: BTreeMap<IndicatorKind, IndicatorValue>,
}

/// Baselines shared by every paper in one scoring pass.
#[derive(Clone, Debug, Default)]
pub struct CorpusContext {
    pub ekj: EkjTable,
    pub c_dic_before: C50Table,
    pub c_dic_after: C50Table,
}

impl CorpusContext {
    pub fn build(corpus: &Corpus, th: &ThresholdSet, kinds: &[IndicatorKind]) -> Result<Self> {
        let mut ctx = Self::default();

        if kinds.contains(&IndicatorKind::Dnic) {
            ctx.ekj = Dnic::get_ekj_for_years(&corpus.papers, corpus.observed_years())?;
        }
        if kinds.contains(&IndicatorKind::Quartile) {
            let c50 = Quartile::get_c50_list(&corpus.papers);
            ctx.c_dic_before = Quartile::get_c_dic(&c50, &corpus.papers, th.quartile.before_rate)?;
            ctx.c_dic_after = Quartile::get_c_dic(&c50, &corpus.papers, th.quartile.after_rate)?;
        }
        Ok(ctx)
    }
}

pub struct Evaluator<'a> {
    thresholds: &'a ThresholdSet,
    kinds: Vec<IndicatorKind>,
    context: CorpusContext,
}

impl<'a> Evaluator<'a> {
    /// Validate thresholds and build baselines for `kinds` from `corpus`.
    pub fn new(
        corpus: &Corpus,
        thresholds: &'a ThresholdSet,
        kinds: &[IndicatorKind],
    ) -> Result<Self> {
        thresholds.validate()?;
        let mut kinds = kinds.to_vec();
        kinds.sort_unstable();
        kinds.dedup();
        let context = CorpusContext::build(corpus, thresholds, &kinds)?;
        Ok(Self {
            thresholds,
            kinds,
            context,
        })
    }

    pub fn kinds(&self) -> &[IndicatorKind] {
        &self.kinds
    }

    pub fn context(&self) -> &CorpusContext {
        &self.context
    }

    pub fn evaluate(&self, paper: &Paper, kind: IndicatorKind) -> Result<IndicatorValue> {
        let th = self.thresholds;
        let c = &paper.citations;
        let ctx = &self.context;

        let value = match kind {
            IndicatorKind::AdjustedGini => IndicatorValue::Score(AdjustedGiniCoefficient::score(c)),
            IndicatorKind::BeautyCoefficient => IndicatorValue::Score(BeautyCoefficient::score(c)),
            IndicatorKind::BeautyCoefficientCp => {
                IndicatorValue::Score(BeautyCoefficientCumulativePercentage::score(c))
            }
            IndicatorKind::CitationDelay => IndicatorValue::Score(CitationDelay::score(c)),
            IndicatorKind::KValue => IndicatorValue::Score(KValue::score(c)),
            IndicatorKind::Average => IndicatorValue::Hibernator(Average::extract(c, &th.average)?),
            IndicatorKind::Naive => IndicatorValue::Hibernator(Naive::extract(c, &th.naive)?),
            IndicatorKind::CitationAngle => {
                IndicatorValue::Hibernator(CitationAngle::extract(c, &th.citation_angle)?)
            }
            IndicatorKind::ExponentialQuartile => IndicatorValue::Hibernator(
                ExponentialQuartile::extract(c, &th.exponential_quartile)?,
            ),
            IndicatorKind::Dnic => {
                IndicatorValue::Hibernator(Dnic::extract_paper(paper, &ctx.ekj, &th.dnic)?)
            }
            IndicatorKind::Quartile => IndicatorValue::Hibernator(Quartile::extract_paper(
                paper,
                &ctx.c_dic_before,
                &ctx.c_dic_after,
            )?),
        };
        Ok(value)
    }

    pub fn evaluate_paper(&self, paper: &Paper) -> Result<PaperReport> {
        let mut values = BTreeMap::new();
        for &kind in &self.kinds {
            let value = self
                .evaluate(paper, kind)
                .map_err(|e| IndicatorError::InPaper {
                    paper: paper.id.clone(),
                    indicator: kind.name(),
                    source: Box::new(e),
                })?;
            values.insert(kind, value);
        }
        Ok(PaperReport {
            id: paper.id.clone(),
            year: paper.year,
            values,
        })
    }
}

/// Score every paper with every indicator in `kinds`; the first failure aborts.
pub fn evaluate_corpus(
    corpus: &Corpus,
    thresholds: &ThresholdSet,
    kinds: &[IndicatorKind],
) -> Result<Vec<PaperReport>> {
    let evaluator = Evaluator::new(corpus, thresholds, kinds)?;
    tracing::info!(
        "evaluating {} papers with {} indicators",
        corpus.len(),
        evaluator.kinds().len()
    );
    corpus.iter().map(|p| evaluator.evaluate_paper(p)).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IndicatorSummary {
    Score { mean: f64, max: f64 },
    Classifier { flagged: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub papers: usize,
    pub indicators: BTreeMap<IndicatorKind, IndicatorSummary>,
}

impl Summary {
    pub fn from_reports(reports: &[PaperReport]) -> Self {
        let mut scores: BTreeMap<IndicatorKind, Vec<f64>> = BTreeMap::new();
        let mut flagged: BTreeMap<IndicatorKind, usize> = BTreeMap::new();

        for report in reports {
            for (&kind, &value) in &report.values {
                match value {
                    IndicatorValue::Score(s) => scores.entry(kind).or_default().push(s),
                    IndicatorValue::Hibernator(h) => {
                        *flagged.entry(kind).or_default() += usize::from(h);
                    }
                }
            }
        }

        let mut indicators = BTreeMap::new();
        for (kind, values) in scores {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            indicators.insert(kind, IndicatorSummary::Score { mean, max });
        }
        for (kind, flagged) in flagged {
            indicators.insert(kind, IndicatorSummary::Classifier { flagged });
        }

        Self {
            papers: reports.len(),
            indicators,
        }
    }
}
