//! Statistics of ungrouped frequency distributions.

use crate::{
    StatsError, Summary,
    dataset::{DatasetKind, ValueFrequency},
    exact::{ExactMedian, ModeTally},
    value::{Outcome, StatValue},
    weighted::{Moments, WeightedPoint, cumulative_frequencies},
};

/// A sorted value/frequency pair and the running total up to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRow {
    pub pair: ValueFrequency,
    pub cumulative_frequency: u64,
}

/// Analysis trace of an ungrouped distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct UngroupedAnalysis {
    /// Pairs sorted by value (stable for repeated values).
    pub rows: Vec<PairRow>,
    /// Moments over the sorted rows; `moments.deviations[i]` belongs to `rows[i]`.
    pub moments: Moments,
    pub median: ExactMedian,
    pub mode_tally: ModeTally,
    pub mode: StatValue,
}

impl UngroupedAnalysis {
    /// Analyzes value/frequency pairs.
    ///
    /// Pairs with a non-finite value are dropped. Pairs sharing a value are
    /// kept as separate rows.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyInput`] if no pair remains
    /// - [`StatsError::ZeroTotalWeight`] if the frequencies sum to zero
    /// - [`StatsError::FrequencyOverflow`] if the frequencies do not fit in a `u64`
    /// - [`StatsError::ValueOverflow`] if the mean or dispersion is not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use freqstat_stats::{dataset::ValueFrequency, ungrouped::UngroupedAnalysis};
    ///
    /// let pairs = [ValueFrequency::new(2.0, 3), ValueFrequency::new(1.0, 1)];
    /// let analysis = UngroupedAnalysis::new(&pairs).unwrap();
    /// assert_eq!(analysis.moments.total_weight, 4);
    /// assert_eq!(analysis.rows[0].pair.value, 1.0);
    /// ```
    pub fn new(pairs: &[ValueFrequency]) -> Result<Self, StatsError> {
        let kind = DatasetKind::Ungrouped;

        let mut sorted = pairs
            .iter()
            .copied()
            .filter(|p| p.value.is_finite())
            .collect::<Vec<_>>();
        if sorted.is_empty() {
            return Err(StatsError::EmptyInput { kind });
        }
        sorted.sort_by(|a, b| a.value.total_cmp(&b.value));

        let points = sorted
            .iter()
            .map(|p| WeightedPoint::new(p.value, p.frequency))
            .collect::<Vec<_>>();
        let moments =
            Moments::from_points(&points).map_err(|err| StatsError::from_moments(kind, err))?;

        let cumulative = cumulative_frequencies(sorted.iter().map(|p| p.frequency));
        let values = sorted.iter().map(|p| p.value).collect::<Vec<_>>();
        let median = ExactMedian::from_cumulative(&values, &cumulative)
            .ok_or(StatsError::ZeroTotalWeight { kind })?;

        let mode_tally = ModeTally::from_rows(sorted.iter().map(|p| (p.value, p.frequency)));
        let mode = ungrouped_mode(&mode_tally, sorted.len());

        let rows = sorted
            .into_iter()
            .zip(cumulative)
            .map(|(pair, cumulative_frequency)| PairRow {
                pair,
                cumulative_frequency,
            })
            .collect();

        Ok(Self {
            rows,
            moments,
            median,
            mode_tally,
            mode,
        })
    }

    /// Total frequency `N`.
    #[must_use]
    pub fn total_frequency(&self) -> u64 {
        self.moments.total_weight
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            kind: DatasetKind::Ungrouped,
            mean: self.moments.mean,
            median: StatValue::Numeric(self.median.value()),
            mode: self.mode.clone(),
            mad: self.moments.mad,
            variance: self.moments.variance,
            std_dev: self.moments.std_dev,
        }
    }
}

/// Mode over the explicit frequency column.
///
/// A distribution where every row ties at the highest frequency (including a
/// single row) has no distinct mode.
fn ungrouped_mode(tally: &ModeTally, row_count: usize) -> StatValue {
    match tally.values.as_slice() {
        [] => Outcome::NoDistinctMode.into(),
        values if values.len() == row_count => Outcome::NoDistinctMode.into(),
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

    fn pairs(rows: &[(f64, u64)]) -> Vec<ValueFrequency> {
        rows.iter()
            .map(|&(value, frequency)| ValueFrequency::new(value, frequency))
            .collect()
    }

    #[test]
    fn test_weighted_mean_and_median() {
        // expanded: 1, 2, 2, 2, 3, 3
        let analysis = UngroupedAnalysis::new(&pairs(&[(3.0, 2), (1.0, 1), (2.0, 3)])).unwrap();
        let summary = analysis.summary();
        assert_eq!(analysis.total_frequency(), 6);
        assert!((summary.mean - 13.0 / 6.0).abs() < 1e-12);
        assert_eq!(summary.median, StatValue::Numeric(2.0));
        assert_eq!(summary.mode, StatValue::from(Outcome::Modal { value: 2.0 }));
    }

    #[test]
    fn test_even_total_averages_across_rows() {
        // expanded: 10, 10, 20, 20
        let analysis = UngroupedAnalysis::new(&pairs(&[(10.0, 2), (20.0, 2)])).unwrap();
        assert_eq!(analysis.median.value(), 15.0);
    }

    #[test]
    fn test_rows_carry_cumulative_frequency() {
        let analysis = UngroupedAnalysis::new(&pairs(&[(2.0, 4), (1.0, 1), (3.0, 0)])).unwrap();
        let cumulative = analysis
            .rows
            .iter()
            .map(|r| r.cumulative_frequency)
            .collect::<Vec<_>>();
        assert_eq!(cumulative, vec![1, 5, 5]);
    }

    #[test]
    fn test_flat_distribution_has_no_distinct_mode() {
        let analysis =
            UngroupedAnalysis::new(&pairs(&[(1.0, 4), (2.0, 4), (3.0, 4)])).unwrap();
        assert_eq!(analysis.mode.to_string(), "No distinct mode");
    }

    #[test]
    fn test_partial_tie_is_multimodal() {
        let analysis =
            UngroupedAnalysis::new(&pairs(&[(1.0, 4), (2.0, 1), (3.0, 4)])).unwrap();
        assert_eq!(analysis.mode.to_string(), "1, 3 (Multimodal)");
    }

    #[test]
    fn test_single_pair_has_no_distinct_mode() {
        let analysis = UngroupedAnalysis::new(&pairs(&[(5.0, 3)])).unwrap();
        assert_eq!(analysis.mode, StatValue::from(Outcome::NoDistinctMode));
    }

    #[test]
    fn test_repeated_values_stay_separate_rows() {
        let analysis = UngroupedAnalysis::new(&pairs(&[(2.0, 3), (1.0, 1), (2.0, 3)])).unwrap();
        assert_eq!(analysis.rows.len(), 3);
        assert_eq!(analysis.mode.to_string(), "2, 2 (Multimodal)");
    }

    #[test]
    fn test_empty_and_zero_weight_errors() {
        assert_eq!(
            UngroupedAnalysis::new(&[]).unwrap_err(),
            StatsError::EmptyInput {
                kind: DatasetKind::Ungrouped
            }
        );
        assert_eq!(
            UngroupedAnalysis::new(&pairs(&[(1.0, 0), (2.0, 0)])).unwrap_err(),
            StatsError::ZeroTotalWeight {
                kind: DatasetKind::Ungrouped
            }
        );
    }

    #[test]
    fn test_frequencies_past_u64_are_rejected() {
        assert_eq!(
            UngroupedAnalysis::new(&pairs(&[(1.0, u64::MAX), (2.0, 1)])).unwrap_err(),
            StatsError::FrequencyOverflow {
                kind: DatasetKind::Ungrouped
            }
        );
    }

    #[test]
    fn test_huge_single_frequency_is_analyzed() {
        let analysis = UngroupedAnalysis::new(&pairs(&[(4.0, u64::MAX - 1), (6.0, 0)])).unwrap();
        assert_eq!(analysis.moments.total_weight, u64::MAX - 1);
        assert_eq!(analysis.moments.mean, 4.0);
        assert_eq!(analysis.median.value(), 4.0);
    }

    #[test]
    fn test_caller_pairs_are_not_reordered() {
        let input = pairs(&[(3.0, 1), (1.0, 1)]);
        let _ = UngroupedAnalysis::new(&input).unwrap();
        assert_eq!(input[0].value, 3.0);
    }

    #[test]
    fn test_population_deviation() {
        // expanded: 2, 4, 4, 4, 5, 5, 7, 9 -> mean 5, variance 4
        let analysis = UngroupedAnalysis::new(&pairs(&[
            (2.0, 1),
            (4.0, 3),
            (5.0, 2),
            (7.0, 1),
            (9.0, 1),
        ]))
        .unwrap();
        let summary = analysis.summary();
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.variance, 4.0);
        assert_eq!(summary.std_dev, 2.0);
        assert_eq!(summary.mad, 1.5);
    }
}
