/// Sentinel stored in an EKJ cell when no paper in the group was cited that year.
pub const NO_SIGNAL: f64 = -1.0;

/// Citation angle: histories of this length or shorter cannot hold a
/// five-year sleep followed by a five-year awakening.
pub const ANGLE_MIN_YEARS: usize = 10;

/// K-value: number of leading years considered (publication year + 20).
pub const K_VALUE_WINDOW: usize = 21;

/// K-value: normalizer for the RMS citation age.
pub const K_VALUE_NORM: f64 = 20.0;

/// Exponential quartile: share of the history forming the late ("awake") window.
pub const AWAKE_WINDOW_SHARE: f64 = 0.2;

/// Exponential quartile: late-window peak must exceed this multiple of the early peak.
pub const AWAKE_PEAK_RATIO: u32 = 4;

/// DNIC: the pre-peak window stops this many years before the peak.
pub const DNIC_PRE_PEAK_GAP: usize = 2;

/// Quartile: cumulative citation share defining c50.
pub const HALF_SHARE: f64 = 0.5;

/// Quartile: mean per-subject durability score at or above which a paper is delayed.
pub const DELAYED_SCORE: f64 = 2.5;
