use crate::error::Result;
use crate::history::{CitationHistory, mean};
use crate::thresholds::AverageThresholds;

/// van Raan (2021), sleeping beauties in overdrive mode.
///
/// A hibernator sleeps through years `0..=s` with mean citation at most `cs`,
/// then averages at least `ca` over the `a` years that follow.
pub struct Average;

impl Average {
    pub fn extract(c: &CitationHistory, th: &AverageThresholds) -> Result<bool> {
        th.validate()?;
        let sleep_end = th.sleep_years + 1;
        let awake_end = sleep_end + th.awake_years;

        let sleep = c.head(sleep_end)?;
        let awake = c.window(sleep_end, awake_end)?;

        Ok(mean(sleep) <= th.sleep_ceiling && mean(awake) >= th.awake_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    fn th(s: usize, cs: f64, a: usize, ca: f64) -> AverageThresholds {
        AverageThresholds {
            sleep_years: s,
            sleep_ceiling: cs,
            awake_years: a,
            awake_floor: ca,
        }
    }

    #[test]
    fn test_flat_history_meets_equal_bounds() {
        let c = CitationHistory::from([1, 1, 1, 1, 1, 1]);
        assert!(Average::extract(&c, &th(1, 1.0, 3, 1.0)).unwrap());
    }

    #[test]
    fn test_restless_sleep_rejected() {
        let c = CitationHistory::from([3, 3, 9, 9, 9]);
        assert!(!Average::extract(&c, &th(1, 1.0, 3, 5.0)).unwrap());
    }

    #[test]
    fn test_weak_awakening_rejected() {
        let c = CitationHistory::from([0, 0, 1, 2, 1]);
        assert!(!Average::extract(&c, &th(1, 1.0, 3, 5.0)).unwrap());
    }

    #[test]
    fn test_awakening_only_counts_awake_window() {
        // Years after s+a are ignored.
        let c = CitationHistory::from([0, 0, 6, 6, 100]);
        assert!(Average::extract(&c, &th(1, 0.0, 2, 6.0)).unwrap());
    }

    #[test]
    fn test_short_history_is_error() {
        let c = CitationHistory::from([0, 0, 5]);
        assert!(matches!(
            Average::extract(&c, &th(1, 1.0, 3, 1.0)),
            Err(IndicatorError::HistoryTooShort { needed: 5, actual: 3 })
        ));
    }

    #[test]
    fn test_zero_awake_years_rejected() {
        let c = CitationHistory::from([0, 0, 5]);
        assert!(matches!(
            Average::extract(&c, &th(1, 1.0, 0, 1.0)),
            Err(IndicatorError::InvalidThreshold { .. })
        ));
    }
}
