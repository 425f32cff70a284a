use crate::constants::{K_VALUE_NORM, K_VALUE_WINDOW};
use crate::history::CitationHistory;

/// Teixeira, Vieira & Abreu (2017).
///
/// Citation-weighted RMS age over the first 21 years, normalized to [0, 1].
pub struct KValue;

impl KValue {
    pub fn score(c: &CitationHistory) -> f64 {
        let counts = c.as_slice();
        let window = &counts[..counts.len().min(K_VALUE_WINDOW)];

        let total: f64 = window.iter().map(|&ct| f64::from(ct)).sum();
        if total == 0.0 {
            return 0.0;
        }

        let moment: f64 = window
            .iter()
            .enumerate()
            .map(|(i, &ct)| (i * i) as f64 * f64::from(ct))
            .sum();

        (moment / total).sqrt() / K_VALUE_NORM
    }
}
