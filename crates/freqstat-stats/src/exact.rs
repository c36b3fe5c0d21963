//! Order statistics for exact (raw and ungrouped) data.

use serde::Serialize;

use crate::weighted::row_at_position;

/// The median of exact data and the positions it was read from.
///
/// Positions are 1-based ranks within the sorted data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ExactMedian {
    /// Odd count: the value at rank `(N + 1) / 2`.
    Middle { position: u64, value: f64 },
    /// Even count: the mean of the values at ranks `N / 2` and `N / 2 + 1`.
    Pair {
        positions: [u64; 2],
        values: [f64; 2],
        value: f64,
    },
}

impl ExactMedian {
    /// Resolves the median of sorted rows through their cumulative frequencies.
    ///
    /// `values[i]` occupies ranks `cumulative[i - 1] + 1 ..= cumulative[i]`.
    /// Returns `None` when the total frequency is zero.
    pub(crate) fn from_cumulative(values: &[f64], cumulative: &[u64]) -> Option<Self> {
        debug_assert_eq!(values.len(), cumulative.len());
        let total = cumulative.last().copied().filter(|&n| n > 0)?;
        let value_at = |position| row_at_position(cumulative, position).map(|i| values[i]);

        if total % 2 == 1 {
            let position = total.div_ceil(2);
            Some(Self::Middle {
                position,
                value: value_at(position)?,
            })
        } else {
            let positions = [total / 2, total / 2 + 1];
            let values = [value_at(positions[0])?, value_at(positions[1])?];
            Some(Self::Pair {
                positions,
                values,
                value: (values[0] + values[1]) / 2.0,
            })
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Middle { value, .. } | Self::Pair { value, .. } => *value,
        }
    }
}

/// Rows sharing the highest frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeTally {
    pub max_frequency: u64,
    /// Values of the rows at `max_frequency`, in row order.
    pub values: Vec<f64>,
}

impl ModeTally {
    /// Scans `(value, frequency)` rows for the highest frequency.
    pub(crate) fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (f64, u64)>,
    {
        let mut tally = Self {
            max_frequency: 0,
            values: vec![],
        };
        for (value, frequency) in rows {
            if frequency > tally.max_frequency {
                tally.max_frequency = frequency;
                tally.values.clear();
                tally.values.push(value);
            } else if frequency == tally.max_frequency && frequency > 0 {
                tally.values.push(value);
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weighted::cumulative_frequencies;

    fn median_of(values: &[f64], frequencies: &[u64]) -> Option<ExactMedian> {
        let cumulative = cumulative_frequencies(frequencies.iter().copied());
        ExactMedian::from_cumulative(values, &cumulative)
    }

    #[test]
    fn test_odd_count_takes_middle_rank() {
        let median = median_of(&[3.0, 3.0, 5.0, 8.0, 9.0], &[1; 5]).unwrap();
        assert_eq!(
            median,
            ExactMedian::Middle {
                position: 3,
                value: 5.0
            }
        );
    }

    #[test]
    fn test_even_count_averages_two_middle_ranks() {
        let median = median_of(&[1.0, 2.0, 4.0, 7.0], &[1; 4]).unwrap();
        assert_eq!(
            median,
            ExactMedian::Pair {
                positions: [2, 3],
                values: [2.0, 4.0],
                value: 3.0
            }
        );
    }

    #[test]
    fn test_middle_ranks_resolved_through_frequencies() {
        // ranks: 1 -> 10, 2..=4 -> 20, 5..=6 -> 30
        let median = median_of(&[10.0, 20.0, 30.0], &[1, 3, 2]).unwrap();
        assert_eq!(median.value(), 20.0);

        // ranks: 1..=2 -> 10, 3..=4 -> 20
        let median = median_of(&[10.0, 20.0], &[2, 2]).unwrap();
        assert_eq!(median.value(), 15.0);
    }

    #[test]
    fn test_zero_total_has_no_median() {
        assert!(median_of(&[1.0, 2.0], &[0, 0]).is_none());
        assert!(median_of(&[], &[]).is_none());
    }

    #[test]
    fn test_tally_collects_ties_in_row_order() {
        let tally = ModeTally::from_rows([(5.0, 2), (1.0, 4), (3.0, 4), (2.0, 1)]);
        assert_eq!(tally.max_frequency, 4);
        assert_eq!(tally.values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_tally_ignores_zero_frequency_rows() {
        let tally = ModeTally::from_rows([(1.0, 0), (2.0, 0)]);
        assert_eq!(tally.max_frequency, 0);
        assert!(tally.values.is_empty());
    }
}
