use crate::history::CitationHistory;

/// Li, Shi, Zhao & Ye (2014), "heartbeat spectra" for sleeping beauties.
///
/// A recency-weighted Gini coefficient: citations late in the history pull
/// the score up.
pub struct AdjustedGiniCoefficient;

impl AdjustedGiniCoefficient {
    pub fn score(c: &CitationHistory) -> f64 {
        let total = c.total();
        let n = c.len();

        if total == 0 {
            return 1.0;
        }
        if n < 2 {
            return 0.0;
        }

        let total = total as f64;
        let nf = n as f64;
        let weighted: f64 = c
            .as_slice()
            .iter()
            .enumerate()
            .map(|(t, &ct)| f64::from(ct) * (n - t) as f64)
            .sum();

        (nf / (nf - 1.0)) * (1.0 - (2.0 * weighted - total) / (nf * total))
    }
}
