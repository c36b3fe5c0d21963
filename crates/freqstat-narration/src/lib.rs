//! Step-by-step explanations of descriptive statistics.
//!
//! This crate is the narration engine of freqstat. For every dataset it
//! produces a [`Narration`]: a `general` section describing the data and one
//! [`Section`] per statistic that states the formula, substitutes the numbers
//! and ends with the result.
//!
//! Narrations are built from the analysis traces of [`freqstat_stats`], the
//! same values the formula engine summarizes, so the result of every section
//! is exactly the text of the corresponding [`Summary`] entry.
//!
//! # Examples
//!
//! ```
//! use freqstat_narration::narrate_raw;
//!
//! let narration = narrate_raw(&[5.0, 3.0, 8.0, 3.0, 9.0]);
//! assert_eq!(narration.mean.outcome(), Some("5.60"));
//! assert_eq!(narration.mad.outcome(), Some("2.32"));
//! ```
//!
//! Requests the formula engine rejects still narrate, with the problem stated
//! in the `general` section:
//!
//! ```
//! use freqstat_narration::narrate_ungrouped;
//!
//! let narration = narrate_ungrouped(&[]);
//! assert!(narration.is_unavailable());
//! assert_eq!(
//!     narration.general.lines(),
//!     vec!["No value-frequency pairs entered for ungrouped data."]
//! );
//! ```
//!
//! [`evaluate`] runs both engines on one [`Dataset`]:
//!
//! ```
//! use freqstat_narration::evaluate;
//! use freqstat_stats::{Dataset, Statistic, UngroupedDistribution, ValueFrequency};
//!
//! let dataset = Dataset::from(UngroupedDistribution {
//!     pairs: vec![ValueFrequency::new(1.0, 2), ValueFrequency::new(4.0, 1)],
//! });
//! let evaluation = evaluate(&dataset);
//! let summary = evaluation.summary.unwrap();
//! assert_eq!(
//!     evaluation.narration.median.outcome(),
//!     Some(summary.formatted(Statistic::Median).as_str())
//! );
//! ```

use freqstat_stats::{
    Analysis, ClassInterval, Dataset, DatasetKind, GroupedAnalysis, RawAnalysis, StatsError,
    Summary, UngroupedAnalysis, ValueFrequency,
};

pub use self::{
    section::{Narration, Section, Step},
    table::Table,
};

mod format;
mod grouped;
mod raw;
mod section;
mod table;
mod ungrouped;
mod weighted;

/// Narrates the statistics of raw observations.
#[must_use]
pub fn narrate_raw(values: &[f64]) -> Narration {
    RawAnalysis::new(values).map_or_else(|err| unavailable(&err), |a| raw::narrate(&a))
}

/// Narrates the statistics of value/frequency pairs.
#[must_use]
pub fn narrate_ungrouped(pairs: &[ValueFrequency]) -> Narration {
    UngroupedAnalysis::new(pairs).map_or_else(|err| unavailable(&err), |a| ungrouped::narrate(&a))
}

/// Narrates the estimated statistics of class intervals.
#[must_use]
pub fn narrate_grouped(classes: &[ClassInterval]) -> Narration {
    GroupedAnalysis::new(classes).map_or_else(|err| unavailable(&err), |a| grouped::narrate(&a))
}

/// Narrates a dataset of any kind.
#[must_use]
pub fn narrate(dataset: &Dataset) -> Narration {
    match dataset {
        Dataset::Raw(sample) => narrate_raw(&sample.values),
        Dataset::Ungrouped(dist) => narrate_ungrouped(&dist.pairs),
        Dataset::Grouped(dist) => narrate_grouped(&dist.classes),
    }
}

/// Narrates an existing analysis trace.
#[must_use]
pub fn narrate_analysis(analysis: &Analysis) -> Narration {
    match analysis {
        Analysis::Raw(a) => raw::narrate(a),
        Analysis::Ungrouped(a) => ungrouped::narrate(a),
        Analysis::Grouped(a) => grouped::narrate(a),
    }
}

/// The compact result and the explanation of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub kind: DatasetKind,
    pub summary: Result<Summary, StatsError>,
    pub narration: Narration,
}

impl Evaluation {
    /// Derives the summary and the narration from one analysis attempt.
    #[must_use]
    pub fn from_analysis(kind: DatasetKind, analysis: Result<&Analysis, StatsError>) -> Self {
        match analysis {
            Ok(analysis) => Self {
                kind,
                summary: Ok(analysis.summary()),
                narration: narrate_analysis(analysis),
            },
            Err(err) => Self {
                kind,
                narration: unavailable(&err),
                summary: Err(err),
            },
        }
    }
}

/// Runs both engines on `dataset` from a single analysis.
#[must_use]
pub fn evaluate(dataset: &Dataset) -> Evaluation {
    Evaluation::from_analysis(dataset.kind(), dataset.analyze().as_ref().map_err(Clone::clone))
}

/// The `general` message of a rejected request.
fn unavailable(err: &StatsError) -> Narration {
    let message = match err {
        StatsError::EmptyInput {
            kind: DatasetKind::Raw,
        } => "No valid numbers entered for raw data.".to_owned(),
        StatsError::EmptyInput {
            kind: DatasetKind::Ungrouped,
        } => "No value-frequency pairs entered for ungrouped data.".to_owned(),
        StatsError::EmptyInput {
            kind: DatasetKind::Grouped,
        } => "No class interval and frequency pairs entered for grouped data.".to_owned(),
        StatsError::ZeroTotalWeight { .. } => {
            "Total frequency is zero, cannot calculate stats.".to_owned()
        }
        StatsError::FrequencyOverflow { .. }
        | StatsError::ValueOverflow { .. }
        | StatsError::InvalidInterval { .. } => err.to_string(),
    };
    Narration::unavailable(message)
}

#[cfg(test)]
mod tests {
    use freqstat_stats::{GroupedDistribution, RawSample, Statistic};

    use super::*;

    fn assert_consistent(evaluation: &Evaluation) {
        let summary = evaluation.summary.as_ref().unwrap();
        for (statistic, section) in evaluation.narration.sections() {
            assert_eq!(
                section.outcome(),
                Some(summary.formatted(statistic).as_str()),
                "{statistic}"
            );
        }
    }

    #[test]
    fn test_reference_sample_is_consistent() {
        let evaluation = evaluate(&Dataset::from(RawSample {
            values: vec![5.0, 3.0, 8.0, 3.0, 9.0],
        }));
        assert_eq!(evaluation.kind, DatasetKind::Raw);
        assert_consistent(&evaluation);
    }

    #[test]
    fn test_grouped_multimodal_is_consistent() {
        let evaluation = evaluate(&Dataset::from(GroupedDistribution {
            classes: vec![
                ClassInterval::new(10.0, 20.0, 5),
                ClassInterval::new(20.0, 30.0, 5),
                ClassInterval::new(30.0, 40.0, 1),
            ],
        }));
        assert_consistent(&evaluation);
    }

    #[test]
    fn test_rejected_requests_narrate_the_problem() {
        let narration = narrate_raw(&[f64::NAN]);
        assert!(narration.is_unavailable());
        assert_eq!(
            narration.general.lines(),
            vec!["No valid numbers entered for raw data."]
        );

        let narration = narrate_ungrouped(&[ValueFrequency::new(1.0, 0)]);
        assert_eq!(
            narration.general.lines(),
            vec!["Total frequency is zero, cannot calculate stats."]
        );

        let narration = narrate_grouped(&[]);
        assert_eq!(
            narration.general.lines(),
            vec!["No class interval and frequency pairs entered for grouped data."]
        );
    }

    #[test]
    fn test_overflowing_requests_narrate_the_problem() {
        let narration = narrate_ungrouped(&[
            ValueFrequency::new(1.0, u64::MAX),
            ValueFrequency::new(2.0, 1),
        ]);
        assert!(narration.is_unavailable());
        assert_eq!(
            narration.general.lines(),
            vec!["Total frequency is too large to calculate stats."]
        );

        let evaluation = evaluate(&Dataset::from(RawSample {
            values: vec![1e308, 1e308],
        }));
        assert!(evaluation.summary.unwrap_err().is_value_overflow());
        assert_eq!(
            evaluation.narration.general.lines(),
            vec!["Values are too large to calculate stats."]
        );
    }

    #[test]
    fn test_invalid_interval_is_reported_in_both_engines() {
        let dataset = Dataset::from(GroupedDistribution {
            classes: vec![
                ClassInterval::new(0.0, 10.0, 1),
                ClassInterval::new(20.0, 10.0, 1),
            ],
        });
        let evaluation = evaluate(&dataset);
        let err = evaluation.summary.unwrap_err();
        assert!(err.is_invalid_interval());
        assert!(evaluation.narration.is_unavailable());
        assert_eq!(
            evaluation.narration.general.lines(),
            vec![err.to_string()]
        );
    }

    #[test]
    fn test_narrate_matches_evaluate() {
        let dataset = Dataset::from(RawSample {
            values: vec![1.0, 2.0, 2.0],
        });
        assert_eq!(narrate(&dataset), evaluate(&dataset).narration);
        assert_eq!(
            narrate(&dataset).section(Statistic::Mode).outcome(),
            Some("2")
        );
    }
}
