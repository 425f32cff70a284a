//! Per-indicator threshold bundles.
//!
//! Every section and field is optional when deserializing; missing values
//! fall back to the defaults below. Construction does not validate, so call
//! [`ThresholdSet::validate`] (or the per-section `validate`) at the boundary.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdSet {
    pub average: AverageThresholds,
    pub naive: NaiveThresholds,
    pub citation_angle: AngleThresholds,
    pub dnic: DnicThresholds,
    pub exponential_quartile: ExponentialThresholds,
    pub quartile: QuartileThresholds,
}

impl ThresholdSet {
    pub fn validate(&self) -> Result<()> {
        self.average.validate()?;
        self.naive.validate()?;
        self.citation_angle.validate()?;
        self.dnic.validate()?;
        self.exponential_quartile.validate()?;
        self.quartile.validate()
    }
}

/// van Raan's average-based sleeping beauty criteria.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AverageThresholds {
    /// Sleep length `s`: the dormant window is years `0..=s`.
    pub sleep_years: usize,
    /// Depth of sleep `cs`: ceiling on the mean citation while dormant.
    pub sleep_ceiling: f64,
    /// Awake length `a`: the awake window is years `s+1..=s+a`.
    pub awake_years: usize,
    /// Awake intensity `ca`: floor on the mean citation while awake.
    pub awake_floor: f64,
}

impl Default for AverageThresholds {
    fn default() -> Self {
        Self {
            sleep_years: 5,
            sleep_ceiling: 1.0,
            awake_years: 4,
            awake_floor: 5.0,
        }
    }
}

impl AverageThresholds {
    pub fn validate(&self) -> Result<()> {
        non_negative("average.sleep_ceiling", self.sleep_ceiling)?;
        non_negative("average.awake_floor", self.awake_floor)?;
        if self.awake_years == 0 {
            return Err(IndicatorError::invalid(
                "average.awake_years",
                "awake window must cover at least one year",
            ));
        }
        Ok(())
    }
}

/// Glänzel et al.'s cumulative-count criteria.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveThresholds {
    pub sleep_years: usize,
    /// Ceiling on total citations through `sleep_years`.
    pub sleep_ceiling: f64,
    /// Floor on lifetime citations.
    pub lifetime_floor: f64,
}

impl Default for NaiveThresholds {
    fn default() -> Self {
        Self {
            sleep_years: 3,
            sleep_ceiling: 1.0,
            lifetime_floor: 20.0,
        }
    }
}

impl NaiveThresholds {
    pub fn validate(&self) -> Result<()> {
        non_negative("naive.sleep_ceiling", self.sleep_ceiling)?;
        non_negative("naive.lifetime_floor", self.lifetime_floor)
    }
}

/// Ye & Bornmann's citation angle. Defaults are the "typical SB" setting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleThresholds {
    /// Ceiling on the mean citation over the first half of the history.
    pub before_average: f64,
    /// Floor on the second-half peak.
    pub peak: f64,
    /// Floor on the citation angle of the second-half peak, in degrees.
    pub angle: f64,
    /// Minimum years between the first-half and second-half peaks.
    pub span: f64,
}

impl Default for AngleThresholds {
    fn default() -> Self {
        Self {
            before_average: 2.0,
            peak: 20.0,
            angle: 5.0,
            span: 10.0,
        }
    }
}

impl AngleThresholds {
    pub fn validate(&self) -> Result<()> {
        non_negative("citation_angle.before_average", self.before_average)?;
        non_negative("citation_angle.peak", self.peak)?;
        finite("citation_angle.angle", self.angle)?;
        non_negative("citation_angle.span", self.span)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnicThresholds {
    /// Floor on the baseline-normalized citation at the peak.
    pub peak: f64,
    /// Ceiling on the baseline-normalized citation before the peak.
    pub before_peak: f64,
}

impl Default for DnicThresholds {
    fn default() -> Self {
        Self {
            peak: 2.0,
            before_peak: 1.0,
        }
    }
}

impl DnicThresholds {
    pub fn validate(&self) -> Result<()> {
        non_negative("dnic.peak", self.peak)?;
        non_negative("dnic.before_peak", self.before_peak)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExponentialThresholds {
    /// Smaller `k` accepts shorter sleeps.
    pub k: f64,
}

impl Default for ExponentialThresholds {
    fn default() -> Self {
        Self { k: 4.0 }
    }
}

impl ExponentialThresholds {
    pub fn validate(&self) -> Result<()> {
        non_negative("exponential_quartile.k", self.k)
    }
}

/// Percentile rates for the "fast" and "slow" c50 cutoffs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuartileThresholds {
    pub before_rate: f64,
    pub after_rate: f64,
}

impl Default for QuartileThresholds {
    fn default() -> Self {
        Self {
            before_rate: 0.25,
            after_rate: 0.75,
        }
    }
}

impl QuartileThresholds {
    pub fn validate(&self) -> Result<()> {
        rate("quartile.before_rate", self.before_rate)?;
        rate("quartile.after_rate", self.after_rate)?;
        if self.before_rate > self.after_rate {
            return Err(IndicatorError::invalid(
                "quartile.before_rate",
                format!(
                    "{} exceeds after_rate {}",
                    self.before_rate, self.after_rate
                ),
            ));
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IndicatorError::invalid(name, format!("{value} is not finite")))
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(IndicatorError::invalid(name, format!("{value} is negative")));
    }
    Ok(())
}

pub(crate) fn rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(IndicatorError::invalid(
            name,
            format!("{value} is outside [0, 1]"),
        ))
    }
}
