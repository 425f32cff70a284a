//! Per-paper indicators. Each is a stateless unit struct: scorers expose
//! `score`, classifiers expose `extract`.

pub mod angle;
pub mod average;
pub mod beauty;
pub mod delay;
pub mod dnic;
pub mod exponential;
pub mod gini;
pub mod kvalue;
pub mod naive;
pub mod quartile;

pub use angle::CitationAngle;
pub use average::Average;
pub use beauty::{BeautyCoefficient, BeautyCoefficientCumulativePercentage};
pub use delay::CitationDelay;
pub use dnic::Dnic;
pub use exponential::ExponentialQuartile;
pub use gini::AdjustedGiniCoefficient;
pub use kvalue::KValue;
pub use naive::Naive;
pub use quartile::Quartile;
