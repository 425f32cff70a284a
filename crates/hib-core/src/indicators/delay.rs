use crate::history::CitationHistory;

/// Wang, Thijs & Glänzel (2015).
///
/// One minus the mean cumulative citation share over all but the last year.
/// Papers cited early score near 0, papers cited late score near 1.
pub struct CitationDelay;

impl CitationDelay {
    pub fn score(c: &CitationHistory) -> f64 {
        // Nothing to delay: no citations at all.
        let Some(share) = c.cumulative_share() else {
            return 0.0;
        };
        // A single year has no later year to delay into.
        if share.len() < 2 {
            return 0.0;
        }

        let head = &share[..share.len() - 1];
        1.0 - head.iter().sum::<f64>() / head.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uncited_is_zero() {
        assert_eq!(CitationDelay::score(&[0, 0, 0].into()), 0.0);
        assert_eq!(CitationDelay::score(&CitationHistory::default()), 0.0);
    }

    #[test]
    fn test_single_year_is_zero() {
        assert_eq!(CitationDelay::score(&[12].into()), 0.0);
    }

    #[test]
    fn test_extremes() {
        assert_relative_eq!(CitationDelay::score(&[0, 0, 4].into()), 1.0);
        assert_relative_eq!(CitationDelay::score(&[4, 0, 0].into()), 0.0);
        assert_relative_eq!(CitationDelay::score(&[1, 1].into()), 0.5);
    }

    #[test]
    fn test_later_is_more_delayed() {
        let early = CitationDelay::score(&[3, 2, 1, 0, 0].into());
        let late = CitationDelay::score(&[0, 0, 1, 2, 3].into());
        assert!(late > early);
    }
}
