//! Statistics of raw observations.

use crate::{
    StatsError, Summary,
    dataset::DatasetKind,
    exact::{ExactMedian, ModeTally},
    value::{Outcome, StatValue},
    weighted::{Moments, MomentsError, WeightedPoint, cumulative_frequencies},
};

/// Analysis trace of a raw sample.
///
/// Holds every intermediate quantity of the computation: the filtered input,
/// its sorted copy, the frequency table used for the mode, and the moments.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAnalysis {
    /// Finite input values, in the caller's order.
    pub input: Vec<f64>,
    /// `input` sorted ascending.
    pub sorted: Vec<f64>,
    /// Distinct values ascending, with their occurrence counts.
    pub frequency_table: Vec<(f64, u64)>,
    pub moments: Moments,
    pub median: ExactMedian,
    pub mode_tally: ModeTally,
    pub mode: StatValue,
}

impl RawAnalysis {
    /// Analyzes raw observations.
    ///
    /// Non-finite entries are dropped. The caller's slice is not reordered.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] if no finite value remains, or
    /// [`StatsError::ValueOverflow`] if the mean or dispersion is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqstat_stats::raw::RawAnalysis;
    ///
    /// let analysis = RawAnalysis::new(&[5.0, 3.0, 8.0, 3.0, 9.0]).unwrap();
    /// assert_eq!(analysis.sorted, vec![3.0, 3.0, 5.0, 8.0, 9.0]);
    /// assert_eq!(analysis.median.value(), 5.0);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        let empty = StatsError::EmptyInput {
            kind: DatasetKind::Raw,
        };

        let input = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        let mut sorted = input.clone();
        sorted.sort_by(f64::total_cmp);

        let points = sorted
            .iter()
            .map(|&x| WeightedPoint::new(x, 1))
            .collect::<Vec<_>>();
        let moments = Moments::from_points(&points).map_err(|err| match err {
            MomentsError::ZeroWeight => empty.clone(),
            err => StatsError::from_moments(DatasetKind::Raw, err),
        })?;
        let cumulative = cumulative_frequencies(points.iter().map(|p| p.weight));
        let median = ExactMedian::from_cumulative(&sorted, &cumulative).ok_or(empty)?;

        let frequency_table = frequency_table(&sorted);
        let mode_tally = ModeTally::from_rows(frequency_table.iter().copied());
        let mode = raw_mode(&mode_tally);

        Ok(Self {
            input,
            sorted,
            frequency_table,
            moments,
            median,
            mode_tally,
            mode,
        })
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always `false`; an analysis is only built from a non-empty sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            kind: DatasetKind::Raw,
            mean: self.moments.mean,
            median: StatValue::Numeric(self.median.value()),
            mode: self.mode.clone(),
            mad: self.moments.mad,
            variance: self.moments.variance,
            std_dev: self.moments.std_dev,
        }
    }
}

/// Counts occurrences of each distinct value in sorted data.
fn frequency_table(sorted: &[f64]) -> Vec<(f64, u64)> {
    sorted
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len() as u64))
        .collect()
}

fn raw_mode(tally: &ModeTally) -> StatValue {
    match tally.values.as_slice() {
        _ if tally.max_frequency <= 1 => Outcome::NoDistinctMode.into(),
        [value] => Outcome::Modal { value: *value }.into(),
        values => Outcome::Multimodal {
            values: values.to_vec(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sample() {
        let summary = RawAnalysis::new(&[5.0, 3.0, 8.0, 3.0, 9.0])
            .unwrap()
            .summary();
        assert_eq!(format!("{:.2}", summary.mean), "5.60");
        assert_eq!(summary.median.to_string(), "5.00");
        assert_eq!(summary.mode.to_string(), "3");
        assert_eq!(format!("{:.2}", summary.mad), "2.32");
        assert_eq!(format!("{:.2}", summary.variance), "6.24");
        assert_eq!(format!("{:.2}", summary.std_dev), "2.50");
    }

    #[test]
    fn test_even_count_median() {
        let summary = RawAnalysis::new(&[4.0, 1.0, 3.0, 2.0]).unwrap().summary();
        assert_eq!(summary.median, StatValue::Numeric(2.5));
    }

    #[test]
    fn test_non_finite_entries_are_filtered() {
        let analysis = RawAnalysis::new(&[1.0, f64::NAN, 3.0, f64::INFINITY]).unwrap();
        assert_eq!(analysis.input, vec![1.0, 3.0]);
        assert_eq!(analysis.len(), 2);
    }

    #[test]
    fn test_empty_after_filtering_is_an_error() {
        let err = RawAnalysis::new(&[f64::NAN]).unwrap_err();
        assert_eq!(
            err,
            StatsError::EmptyInput {
                kind: DatasetKind::Raw
            }
        );
        assert!(RawAnalysis::new(&[]).is_err());
    }

    #[test]
    fn test_sum_past_f64_max_is_an_error() {
        let err = RawAnalysis::new(&[1e308, 1e308]).unwrap_err();
        assert_eq!(
            err,
            StatsError::ValueOverflow {
                kind: DatasetKind::Raw
            }
        );
        assert!(RawAnalysis::new(&[1e308, -1e308]).is_err());
    }

    #[test]
    fn test_all_unique_values_have_no_distinct_mode() {
        let analysis = RawAnalysis::new(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(analysis.mode, StatValue::from(Outcome::NoDistinctMode));
        assert_eq!(analysis.mode_tally.max_frequency, 1);
    }

    #[test]
    fn test_tied_repeats_are_multimodal() {
        let analysis = RawAnalysis::new(&[2.0, 1.0, 2.0, 1.0, 5.0]).unwrap();
        assert_eq!(
            analysis.mode,
            StatValue::from(Outcome::Multimodal {
                values: vec![1.0, 2.0]
            })
        );
        assert_eq!(analysis.mode.to_string(), "1, 2 (Multimodal)");
    }

    #[test]
    fn test_every_value_repeated_equally_is_still_multimodal() {
        let analysis = RawAnalysis::new(&[1.0, 1.0, 2.0, 2.0]).unwrap();
        assert_eq!(analysis.mode.to_string(), "1, 2 (Multimodal)");
    }

    #[test]
    fn test_frequency_table_counts_distinct_values() {
        let analysis = RawAnalysis::new(&[2.0, 1.0, 2.0, 0.5]).unwrap();
        assert_eq!(
            analysis.frequency_table,
            vec![(0.5, 1), (1.0, 1), (2.0, 2)]
        );
    }

    #[test]
    fn test_single_value() {
        let summary = RawAnalysis::new(&[7.0]).unwrap().summary();
        assert_eq!(summary.mean, 7.0);
        assert_eq!(summary.median, StatValue::Numeric(7.0));
        assert_eq!(summary.mode, StatValue::from(Outcome::NoDistinctMode));
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_caller_slice_is_not_reordered() {
        let values = vec![9.0, 1.0, 5.0];
        let _ = RawAnalysis::new(&values).unwrap();
        assert_eq!(values, vec![9.0, 1.0, 5.0]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let values = [4.0, 4.0, 1.0, 9.5];
        assert_eq!(RawAnalysis::new(&values), RawAnalysis::new(&values));
    }
}
