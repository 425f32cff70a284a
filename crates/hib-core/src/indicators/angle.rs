use crate::constants::ANGLE_MIN_YEARS;
use crate::error::Result;
use crate::history::{CitationHistory, mean, peak};
use crate::thresholds::AngleThresholds;

/// Ye & Bornmann (2018), "smart girls" versus "sleeping beauties".
///
/// Splits the history at its midpoint. A hibernator has a quiet first half,
/// a high second-half peak reached at a steep angle from the origin, and a
/// long span between the two halves' peaks.
pub struct CitationAngle;

impl CitationAngle {
    pub fn extract(c: &CitationHistory, th: &AngleThresholds) -> Result<bool> {
        th.validate()?;
        if c.len() <= ANGLE_MIN_YEARS {
            return Ok(false);
        }

        let counts = c.as_slice();
        let half = counts.len() / 2;
        let (before, after) = counts.split_at(half);

        // Both halves are non-empty once the length check passed.
        let (Some((t1, _)), Some((offset, peak2))) = (peak(before), peak(after)) else {
            return Ok(false);
        };
        let t2 = half + offset;
        let before_average = mean(before);
        let peak2 = f64::from(peak2);
        let angle = (peak2 / t2 as f64).atan().to_degrees();

        Ok(peak2 > th.peak
            && angle > th.angle
            && before_average <= th.before_average
            && (t2 - t1) as f64 >= th.span)
    }

    /// Angle in degrees between the time axis and the line from the origin
    /// to the second-half peak; `None` for histories too short to split.
    pub fn awake_angle(c: &CitationHistory) -> Option<f64> {
        if c.len() <= ANGLE_MIN_YEARS {
            return None;
        }
        let half = c.len() / 2;
        let (offset, peak2) = peak(&c.as_slice()[half..])?;
        Some((f64::from(peak2) / (half + offset) as f64).atan().to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn typical() -> AngleThresholds {
        AngleThresholds::default()
    }

    fn sleeper() -> CitationHistory {
        // Quiet for eleven years, then a surge peaking at t = 16.
        let mut counts = vec![1u32; 12];
        counts.extend([5, 10, 18, 25, 40, 30]);
        counts.into()
    }

    #[test]
    fn test_short_history_never_qualifies() {
        let c = CitationHistory::from([0, 0, 0, 0, 0, 0, 0, 0, 0, 100]);
        assert!(!CitationAngle::extract(&c, &typical()).unwrap());
        assert!(CitationAngle::awake_angle(&c).is_none());
    }

    #[test]
    fn test_typical_sleeping_beauty() {
        assert!(CitationAngle::extract(&sleeper(), &typical()).unwrap());
    }

    #[test]
    fn test_angle_value() {
        // n = 18, half = 9, peak 40 at t = 16
        let angle = CitationAngle::awake_angle(&sleeper()).unwrap();
        assert_relative_eq!(angle, (40.0f64 / 16.0).atan().to_degrees());
    }

    #[test]
    fn test_busy_first_half_rejected() {
        let mut counts = vec![5u32; 12];
        counts.extend([5, 10, 18, 25, 40, 30]);
        assert!(!CitationAngle::extract(&counts.into(), &typical()).unwrap());
    }

    #[test]
    fn test_short_span_rejected() {
        // First-half peak at t = 8, second-half peak at t = 16: span 8 < 10.
        let mut counts = vec![0u32; 18];
        counts[8] = 2;
        counts[16] = 40;
        assert!(!CitationAngle::extract(&counts.into(), &typical()).unwrap());
    }

    #[test]
    fn test_low_peak_rejected() {
        let mut counts = vec![0u32; 18];
        counts[16] = 20;
        assert!(!CitationAngle::extract(&counts.into(), &typical()).unwrap());
    }
}
