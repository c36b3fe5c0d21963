//! Input shapes accepted by the engines.
//!
//! A request is one of three mutually exclusive dataset kinds:
//!
//! - [`RawSample`]: individual observations
//! - [`UngroupedDistribution`]: value/frequency pairs
//! - [`GroupedDistribution`]: class-interval/frequency rows
//!
//! All three deserialize from the tagged JSON form used by the command line
//! front end:
//!
//! ```
//! use freqstat_stats::dataset::{Dataset, DatasetKind};
//!
//! let json = r#"{"kind": "ungrouped", "pairs": [{"value": 1.0, "frequency": 2}]}"#;
//! let dataset: Dataset = serde_json::from_str(json).unwrap();
//! assert_eq!(dataset.kind(), DatasetKind::Ungrouped);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    StatsError, Summary, grouped::GroupedAnalysis, raw::RawAnalysis,
    ungrouped::UngroupedAnalysis, value::ClassBounds,
};

/// Tag identifying which of the three input shapes a request carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    #[display("raw")]
    Raw,
    #[display("ungrouped")]
    Ungrouped,
    #[display("grouped")]
    Grouped,
}

impl DatasetKind {
    /// Returns whether statistics of this kind are estimates from class midpoints.
    #[must_use]
    pub fn is_estimated(self) -> bool {
        self == Self::Grouped
    }
}

/// A single distinct value and the number of times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueFrequency {
    pub value: f64,
    pub frequency: u64,
}

impl ValueFrequency {
    #[must_use]
    pub const fn new(value: f64, frequency: u64) -> Self {
        Self { value, frequency }
    }
}

/// A class interval `[lower, upper]` and the number of observations in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassInterval {
    pub lower: f64,
    pub upper: f64,
    pub frequency: u64,
}

impl ClassInterval {
    #[must_use]
    pub const fn new(lower: f64, upper: f64, frequency: u64) -> Self {
        Self {
            lower,
            upper,
            frequency,
        }
    }

    /// Class mark used in place of every observation in the class.
    ///
    /// ```
    /// # use freqstat_stats::dataset::ClassInterval;
    /// assert_eq!(ClassInterval::new(10.0, 20.0, 1).midpoint(), 15.0);
    /// assert!(ClassInterval::new(1e308, 1.7e308, 1).midpoint().is_finite());
    /// ```
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        let midpoint = (self.lower + self.upper) / 2.0;
        if midpoint.is_finite() {
            midpoint
        } else {
            self.lower / 2.0 + self.upper / 2.0
        }
    }

    /// Class width `h = upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns whether both bounds are finite and `lower < upper`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper
    }

    #[must_use]
    pub fn bounds(&self) -> ClassBounds {
        ClassBounds::new(self.lower, self.upper)
    }

    /// Class boundaries used for display.
    ///
    /// Each limit is widened by half a unit, where the unit is `1` for classes
    /// wider than `1` and `0.1` otherwise. This is a presentation convention
    /// only; no statistic is computed from it.
    ///
    /// ```
    /// # use freqstat_stats::dataset::ClassInterval;
    /// let boundaries = ClassInterval::new(10.0, 19.0, 4).boundaries();
    /// assert_eq!((boundaries.lower, boundaries.upper), (9.5, 19.5));
    ///
    /// let boundaries = ClassInterval::new(1.0, 1.5, 4).boundaries();
    /// assert_eq!((boundaries.lower, boundaries.upper), (0.95, 1.55));
    /// ```
    #[must_use]
    pub fn boundaries(&self) -> ClassBounds {
        let unit = if self.width() > 1.0 { 1.0 } else { 0.1 };
        ClassBounds::new(self.lower - 0.5 * unit, self.upper + 0.5 * unit)
    }
}

/// Individual observations, unsorted, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub values: Vec<f64>,
}

/// Value/frequency pairs. Repeated values are kept as independent rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UngroupedDistribution {
    pub pairs: Vec<ValueFrequency>,
}

/// Class intervals with frequencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedDistribution {
    pub classes: Vec<ClassInterval>,
}

/// A dataset of any kind, tagged by [`DatasetKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dataset {
    Raw(RawSample),
    Ungrouped(UngroupedDistribution),
    Grouped(GroupedDistribution),
}

impl Dataset {
    #[must_use]
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Raw(_) => DatasetKind::Raw,
            Self::Ungrouped(_) => DatasetKind::Ungrouped,
            Self::Grouped(_) => DatasetKind::Grouped,
        }
    }

    /// Runs the kind-specific analysis, keeping every intermediate quantity.
    pub fn analyze(&self) -> Result<Analysis, StatsError> {
        let analysis = match self {
            Self::Raw(sample) => Analysis::Raw(RawAnalysis::new(&sample.values)?),
            Self::Ungrouped(dist) => Analysis::Ungrouped(UngroupedAnalysis::new(&dist.pairs)?),
            Self::Grouped(dist) => Analysis::Grouped(GroupedAnalysis::new(&dist.classes)?),
        };
        Ok(analysis)
    }

    /// Computes the five statistics for this dataset.
    ///
    /// ```
    /// use freqstat_stats::dataset::{Dataset, RawSample};
    ///
    /// let dataset = Dataset::from(RawSample {
    ///     values: vec![5.0, 3.0, 8.0, 3.0, 9.0],
    /// });
    /// let summary = dataset.summarize().unwrap();
    /// assert_eq!(format!("{:.2}", summary.mean), "5.60");
    /// ```
    pub fn summarize(&self) -> Result<Summary, StatsError> {
        self.analyze().map(|analysis| analysis.summary())
    }
}

/// The analysis trace of a dataset of any kind.
#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::IsVariant)]
pub enum Analysis {
    Raw(RawAnalysis),
    Ungrouped(UngroupedAnalysis),
    Grouped(GroupedAnalysis),
}

impl Analysis {
    #[must_use]
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Raw(_) => DatasetKind::Raw,
            Self::Ungrouped(_) => DatasetKind::Ungrouped,
            Self::Grouped(_) => DatasetKind::Grouped,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        match self {
            Self::Raw(analysis) => analysis.summary(),
            Self::Ungrouped(analysis) => analysis.summary(),
            Self::Grouped(analysis) => analysis.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_and_width() {
        let class = ClassInterval::new(10.0, 20.0, 3);
        assert_eq!(class.midpoint(), 15.0);
        assert_eq!(class.width(), 10.0);
    }

    #[test]
    fn test_is_valid_rejects_reversed_and_non_finite_bounds() {
        assert!(ClassInterval::new(0.0, 1.0, 0).is_valid());
        assert!(!ClassInterval::new(1.0, 1.0, 3).is_valid());
        assert!(!ClassInterval::new(2.0, 1.0, 3).is_valid());
        assert!(!ClassInterval::new(f64::NAN, 1.0, 3).is_valid());
        assert!(!ClassInterval::new(0.0, f64::INFINITY, 3).is_valid());
    }

    #[test]
    fn test_boundaries_use_tenth_unit_for_narrow_classes() {
        let boundaries = ClassInterval::new(0.0, 1.0, 1).boundaries();
        assert_eq!(boundaries.lower, -0.05);
        assert_eq!(boundaries.upper, 1.05);
    }

    #[test]
    fn test_dataset_json_round_trip_keeps_kind_tag() {
        let dataset = Dataset::from(GroupedDistribution {
            classes: vec![ClassInterval::new(0.0, 10.0, 2)],
        });
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["kind"], "grouped");
        assert_eq!(json["classes"][0]["frequency"], 2);

        let parsed: Dataset = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, dataset);
    }

    #[test]
    fn test_raw_dataset_from_json() {
        let dataset: Dataset = serde_json::from_str(r#"{"kind":"raw","values":[1,2.5]}"#).unwrap();
        assert_eq!(
            dataset,
            Dataset::Raw(RawSample {
                values: vec![1.0, 2.5]
            })
        );
    }

    #[test]
    fn test_analysis_kind_matches_dataset_kind() {
        let dataset = Dataset::from(UngroupedDistribution {
            pairs: vec![ValueFrequency::new(1.0, 1)],
        });
        let analysis = dataset.analyze().unwrap();
        assert_eq!(analysis.kind(), dataset.kind());
        assert!(analysis.is_ungrouped());
    }
}
