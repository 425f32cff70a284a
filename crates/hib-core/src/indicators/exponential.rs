use crate::constants::{AWAKE_PEAK_RATIO, AWAKE_WINDOW_SHARE};
use crate::error::{IndicatorError, Result};
use crate::history::{CitationHistory, peak};
use crate::thresholds::ExponentialThresholds;

/// Li & Shi (2016), sleeping beauties in genius work.
///
/// The last fifth of the history is the awake window `w`, the rest is sleep
/// `s`. Requires `c_w > 4 c_s` and `c_w > sqrt(k n_s)` where `c_*` are the
/// window peaks and `n_s` the sleep length.
pub struct ExponentialQuartile;

impl ExponentialQuartile {
    pub fn extract(c: &CitationHistory, th: &ExponentialThresholds) -> Result<bool> {
        th.validate()?;
        let n = c.len();
        let awake_len = (n as f64 * AWAKE_WINDOW_SHARE) as usize;
        if awake_len == 0 {
            return Err(IndicatorError::HistoryTooShort {
                needed: min_years(),
                actual: n,
            });
        }
        let sleep_len = n - awake_len;

        let (sleep, awake) = c.as_slice().split_at(sleep_len);
        let (Some((_, cs)), Some((_, cw))) = (peak(sleep), peak(awake)) else {
            return Ok(false);
        };

        Ok(cw > AWAKE_PEAK_RATIO * cs && f64::from(cw) > (th.k * sleep_len as f64).sqrt())
    }
}

/// Shortest history whose awake window holds at least one year.
fn min_years() -> usize {
    (1.0 / AWAKE_WINDOW_SHARE).ceil() as usize
}
