//! Descriptive statistics of raw, ungrouped and grouped datasets.
//!
//! This crate is the formula engine of freqstat. It computes five statistics
//! for three input shapes:
//!
//! - **Mean**: weighted arithmetic mean
//! - **Median**: exact for raw and ungrouped data, interpolated for grouped data
//! - **Mode**: most frequent value, or an interpolated estimate for grouped data
//! - **MAD**: mean absolute deviation from the mean
//! - **Standard deviation**: population standard deviation (and variance)
//!
//! Grouped figures are estimates: every observation in a class is taken to
//! sit at the class midpoint.
//!
//! # Modules
//!
//! - [`dataset`]: Input payloads and the [`Dataset`](dataset::Dataset) dispatcher
//! - [`raw`], [`ungrouped`], [`grouped`]: Per-kind analysis traces
//! - [`weighted`]: Weighted moments shared by every kind
//! - [`exact`]: Median and mode tallies of exact data
//! - [`summary`]: The five-statistic [`Summary`]
//! - [`value`]: Numeric or descriptive statistic values
//!
//! An analysis trace keeps every intermediate quantity (sorted rows,
//! cumulative frequencies, deviations, the median and modal classes), so a
//! caller that needs to explain a result can read the same numbers the
//! summary was built from.
//!
//! # Examples
//!
//! ## Raw observations
//!
//! ```
//! let summary = freqstat_stats::summarize_raw(&[5.0, 3.0, 8.0, 3.0, 9.0]).unwrap();
//! assert_eq!(format!("{:.2}", summary.mean), "5.60");
//! assert_eq!(summary.mode.to_string(), "3");
//! ```
//!
//! ## Ungrouped frequency distribution
//!
//! ```
//! use freqstat_stats::{ValueFrequency, summarize_ungrouped};
//!
//! let pairs = [
//!     ValueFrequency::new(1.0, 4),
//!     ValueFrequency::new(2.0, 4),
//!     ValueFrequency::new(3.0, 4),
//! ];
//! let summary = summarize_ungrouped(&pairs).unwrap();
//! assert_eq!(summary.mode.to_string(), "No distinct mode");
//! ```
//!
//! ## Grouped frequency distribution
//!
//! ```
//! use freqstat_stats::{ClassInterval, summarize_grouped};
//!
//! let classes = [
//!     ClassInterval::new(10.0, 20.0, 5),
//!     ClassInterval::new(20.0, 30.0, 5),
//!     ClassInterval::new(30.0, 40.0, 1),
//! ];
//! let summary = summarize_grouped(&classes).unwrap();
//! assert_eq!(
//!     summary.mode.to_string(),
//!     "Multimodal (Modal Classes: 10-20, 20-30)"
//! );
//! ```
//!
//! ## Rejected requests
//!
//! ```
//! use freqstat_stats::{ClassInterval, StatsError, summarize_grouped};
//!
//! let err = summarize_grouped(&[ClassInterval::new(20.0, 10.0, 1)]).unwrap_err();
//! assert!(matches!(err, StatsError::InvalidInterval { row: 0, .. }));
//! ```

pub use self::{
    dataset::{
        Analysis, ClassInterval, Dataset, DatasetKind, GroupedDistribution, RawSample,
        UngroupedDistribution, ValueFrequency,
    },
    error::StatsError,
    grouped::{ClassOverlap, GroupedAnalysis},
    raw::RawAnalysis,
    summary::{Statistic, Summary},
    ungrouped::UngroupedAnalysis,
    value::{ClassBounds, Outcome, StatValue},
};

pub mod dataset;
mod error;
pub mod exact;
pub mod grouped;
pub mod raw;
pub mod summary;
pub mod ungrouped;
pub mod value;
pub mod weighted;

/// Computes the five statistics of raw observations.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if no finite value is given, or
/// [`StatsError::ValueOverflow`] if the mean or dispersion is not finite.
pub fn summarize_raw(values: &[f64]) -> Result<Summary, StatsError> {
    RawAnalysis::new(values).map(|analysis| analysis.summary())
}

/// Computes the five statistics of value/frequency pairs.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`], [`StatsError::ZeroTotalWeight`],
/// [`StatsError::FrequencyOverflow`] or [`StatsError::ValueOverflow`].
pub fn summarize_ungrouped(pairs: &[ValueFrequency]) -> Result<Summary, StatsError> {
    UngroupedAnalysis::new(pairs).map(|analysis| analysis.summary())
}

/// Estimates the five statistics of class intervals.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`], [`StatsError::InvalidInterval`],
/// [`StatsError::ZeroTotalWeight`], [`StatsError::FrequencyOverflow`] or
/// [`StatsError::ValueOverflow`].
pub fn summarize_grouped(classes: &[ClassInterval]) -> Result<Summary, StatsError> {
    GroupedAnalysis::new(classes).map(|analysis| analysis.summary())
}
