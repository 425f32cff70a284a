//! Delayed-recognition ("sleeping beauty", hibernator) indicators.
//!
//! Maps yearly citation histories to scores and hibernator classifications
//! using eleven published bibliometric indicators, plus the two corpus
//! baselines (DNIC's EKJ table and Quartile's c50 percentile table) that the
//! corpus-relative classifiers consume.
//!
//! Pure computation over in-memory data; loading and persistence belong to
//! the caller.

pub mod baseline;
pub mod constants;
pub mod error;
pub mod evaluate;
pub mod history;
pub mod indicators;
pub mod paper;
pub mod thresholds;

pub use baseline::{BaselineTable, C50Table, EkjTable};
pub use constants::NO_SIGNAL;
pub use error::{IndicatorError, Result};
pub use evaluate::{
    CorpusContext, Evaluator, IndicatorKind, IndicatorSummary, IndicatorValue, PaperReport,
    Summary, evaluate_corpus,
};
pub use history::CitationHistory;
pub use indicators::{
    AdjustedGiniCoefficient, Average, BeautyCoefficient, BeautyCoefficientCumulativePercentage,
    CitationAngle, CitationDelay, Dnic, ExponentialQuartile, KValue, Naive, Quartile,
};
pub use paper::{Corpus, Paper, SubjectSet};
pub use thresholds::{
    AngleThresholds, AverageThresholds, DnicThresholds, ExponentialThresholds, NaiveThresholds,
    QuartileThresholds, ThresholdSet,
};
