use std::fmt;

#[derive(Debug)]
pub enum IndicatorError {
    /// A window reaches past the end of the citation history.
    HistoryTooShort { needed: usize, actual: usize },
    /// A (subject, year) cell was looked up that the baseline table never saw.
    MissingBaseline { subject: String, year: i32 },
    /// The no-signal sentinel was needed as a denominator for a cited year.
    NoSignalBaseline { subject: String, year: i32 },
    InvalidThreshold { name: &'static str, reason: String },
    UnknownIndicator(String),
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    Json(serde_json::Error),
    InPaper {
        paper: String,
        indicator: &'static str,
        source: Box<IndicatorError>,
    },
}

impl IndicatorError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        IndicatorError::InvalidThreshold {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::HistoryTooShort { needed, actual } => write!(
                f,
                "citation history too short: need {needed} years, got {actual}"
            ),
            IndicatorError::MissingBaseline { subject, year } => {
                write!(f, "no baseline for subject '{subject}' in {year}")
            }
            IndicatorError::NoSignalBaseline { subject, year } => write!(
                f,
                "baseline for subject '{subject}' in {year} has no cited papers, \
                 but the paper was cited that year"
            ),
            IndicatorError::InvalidThreshold { name, reason } => {
                write!(f, "invalid threshold {name}: {reason}")
            }
            IndicatorError::UnknownIndicator(name) => write!(f, "unknown indicator '{name}'"),
            IndicatorError::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(f, "length mismatch for {what}: expected {expected}, got {actual}"),
            IndicatorError::Json(e) => write!(f, "JSON error: {e}"),
            IndicatorError::InPaper {
                paper,
                indicator,
                source,
            } => write!(f, "paper '{paper}', indicator {indicator}: {source}"),
        }
    }
}

impl std::error::Error for IndicatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndicatorError::Json(e) => Some(e),
            IndicatorError::InPaper { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for IndicatorError {
    fn from(e: serde_json::Error) -> Self {
        IndicatorError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
