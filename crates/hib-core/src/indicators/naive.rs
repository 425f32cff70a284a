use crate::error::Result;
use crate::history::{CitationHistory, sum};
use crate::thresholds::NaiveThresholds;

/// Glänzel, Schlemmer & Thijs (2003): few citations through year `s`, many
/// over the whole history.
pub struct Naive;

impl Naive {
    pub fn extract(c: &CitationHistory, th: &NaiveThresholds) -> Result<bool> {
        th.validate()?;
        let asleep = sum(c.head(th.sleep_years + 1)?) as f64;
        let lifetime = c.total() as f64;
        Ok(asleep <= th.sleep_ceiling && lifetime >= th.lifetime_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    fn th(s: usize, cs: f64, ca: f64) -> NaiveThresholds {
        NaiveThresholds {
            sleep_years: s,
            sleep_ceiling: cs,
            lifetime_floor: ca,
        }
    }

    #[test]
    fn test_late_bloomer() {
        let c = CitationHistory::from([0, 1, 1, 8]);
        assert!(Naive::extract(&c, &th(1, 2.0, 5.0)).unwrap());
    }

    #[test]
    fn test_early_citations_disqualify() {
        let c = CitationHistory::from([2, 1, 1, 8]);
        assert!(!Naive::extract(&c, &th(1, 2.0, 5.0)).unwrap());
    }

    #[test]
    fn test_lifetime_floor() {
        let c = CitationHistory::from([0, 0, 1, 3]);
        assert!(!Naive::extract(&c, &th(1, 2.0, 5.0)).unwrap());
        assert!(Naive::extract(&c, &th(1, 2.0, 4.0)).unwrap());
    }

    #[test]
    fn test_sleep_past_history_is_error() {
        let c = CitationHistory::from([0, 1]);
        assert!(matches!(
            Naive::extract(&c, &th(3, 2.0, 5.0)),
            Err(IndicatorError::HistoryTooShort { needed: 4, actual: 2 })
        ));
    }
}
