//! Beauty coefficient family: area between the straight line from the
//! publication year to the peak and the actual citation curve.

use crate::history::CitationHistory;

/// Ke, Ferrara, Radicchi & Flammini (2015).
pub struct BeautyCoefficient;

impl BeautyCoefficient {
    pub fn score(c: &CitationHistory) -> f64 {
        if c.is_uncited() {
            return 0.0;
        }
        let Some((tm, ctm)) = c.peak() else {
            return 0.0;
        };
        if tm == 0 {
            return 0.0;
        }

        let counts = c.as_slice();
        let c0 = f64::from(counts[0]);
        let ctm = f64::from(ctm);
        let tmf = tm as f64;

        counts[..=tm]
            .iter()
            .enumerate()
            .map(|(t, &ct)| {
                let line = (ctm - c0) * t as f64 / tmf + c0;
                (line - f64::from(ct)) / f64::from(ct.max(1))
            })
            .sum()
    }
}

/// Du & Wu (2018): the beauty coefficient over the cumulative citation share,
/// which makes it parameter-free and comparable across citation volumes.
pub struct BeautyCoefficientCumulativePercentage;

impl BeautyCoefficientCumulativePercentage {
    pub fn score(c: &CitationHistory) -> f64 {
        let Some(share) = c.cumulative_share() else {
            return 0.0;
        };

        // The share first reaches 1.0 at the last cited year.
        let total = c.total();
        let Some(tm) = c.cumulative().iter().position(|&acc| acc == total) else {
            return 0.0;
        };
        if tm == 0 {
            return 0.0;
        }

        let r0 = share[0];
        let tmf = tm as f64;
        share[..=tm]
            .iter()
            .enumerate()
            .map(|(t, &rt)| (1.0 - r0) * t as f64 / tmf + r0 - rt)
            .sum()
    }
}
