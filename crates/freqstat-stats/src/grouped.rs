//! Estimated statistics of grouped frequency distributions.
//!
//! Every observation in a class is taken to sit at the class midpoint, so the
//! mean and dispersion are midpoint-weighted moments. Median and mode are
//! interpolated inside the median and modal classes.

use serde::Serialize;

use crate::{
    StatsError, Summary,
    dataset::{ClassInterval, DatasetKind},
    value::{ClassBounds, Outcome, StatValue},
    weighted::{Moments, WeightedPoint, cumulative_frequencies},
};

/// A class interval in sorted order, with its derived columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassRow {
    pub interval: ClassInterval,
    pub midpoint: f64,
    pub width: f64,
    /// Display-only boundaries, see [`ClassInterval::boundaries`].
    pub boundaries: ClassBounds,
    pub cumulative_frequency: u64,
}

impl ClassRow {
    pub(crate) fn new(interval: ClassInterval, cumulative_frequency: u64) -> Self {
        Self {
            interval,
            midpoint: interval.midpoint(),
            width: interval.width(),
            boundaries: interval.boundaries(),
            cumulative_frequency,
        }
    }

    #[must_use]
    pub fn frequency(&self) -> u64 {
        self.interval.frequency
    }

    #[must_use]
    pub fn bounds(&self) -> ClassBounds {
        self.interval.bounds()
    }
}

/// A class that starts before the previous class (in sorted order) ends.
///
/// Overlaps are reported but never reject the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_more::Display)]
#[display("class {current} overlaps the preceding class {previous}")]
pub struct ClassOverlap {
    /// Sorted index of the later class.
    pub index: usize,
    pub previous: ClassBounds,
    pub current: ClassBounds,
}

/// How the grouped median was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum GroupedMedian {
    /// `L + ((N/2 - CF) / f) × h` inside the median class.
    Interpolated {
        class_index: usize,
        /// `N / 2`
        position: f64,
        /// `CF`, the cumulative frequency before the median class.
        cumulative_before: u64,
        frequency: u64,
        lower: f64,
        width: f64,
        value: f64,
    },
    /// The median class has zero frequency or zero width.
    Unavailable {
        class_index: Option<usize>,
        position: f64,
    },
}

impl GroupedMedian {
    #[must_use]
    pub fn value(&self) -> StatValue {
        match self {
            Self::Interpolated { value, .. } => StatValue::Numeric(*value),
            Self::Unavailable { .. } => Outcome::MedianUnavailable.into(),
        }
    }
}

/// How the grouped mode was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum GroupedMode {
    /// `L + (d1 / (d1 + d2)) × h` inside the unique modal class.
    ///
    /// When `d1 + d2 = 0` the value is the class midpoint instead.
    Interpolated {
        class_index: usize,
        frequency: u64,
        /// Frequency of the preceding class, `0` for the first class.
        frequency_before: u64,
        /// Frequency of the following class, `0` for the last class.
        frequency_after: u64,
        d1: u64,
        d2: u64,
        lower: f64,
        width: f64,
        value: f64,
    },
    /// Several classes share the highest frequency; nothing is interpolated.
    Multimodal {
        frequency: u64,
        class_indices: Vec<usize>,
        classes: Vec<ClassBounds>,
    },
    /// The modal class has zero frequency or zero width.
    Unavailable { class_index: Option<usize> },
}

impl GroupedMode {
    #[must_use]
    pub fn value(&self) -> StatValue {
        match self {
            Self::Interpolated { value, .. } => StatValue::Numeric(*value),
            Self::Multimodal { classes, .. } => Outcome::MultimodalClasses {
                classes: classes.clone(),
            }
            .into(),
            Self::Unavailable { .. } => Outcome::ModeUnavailable.into(),
        }
    }
}

/// Analysis trace of a grouped distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedAnalysis {
    /// Classes sorted by lower limit (stable for equal limits).
    pub classes: Vec<ClassRow>,
    pub overlaps: Vec<ClassOverlap>,
    /// Midpoint moments; `moments.deviations[i]` belongs to `classes[i]`.
    pub moments: Moments,
    pub median: GroupedMedian,
    pub mode: GroupedMode,
}

impl GroupedAnalysis {
    /// Analyzes class intervals.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyInput`] if there are no classes
    /// - [`StatsError::InvalidInterval`] for the first class (in input order)
    ///   with `lower >= upper` or a non-finite bound
    /// - [`StatsError::ValueOverflow`] if a class is too wide for `f64`
    /// - [`StatsError::ZeroTotalWeight`] if the frequencies sum to zero
    /// - [`StatsError::FrequencyOverflow`] if the frequencies do not fit in a `u64`
    ///
    /// # Examples
    ///
    /// ```
    /// use freqstat_stats::{dataset::ClassInterval, grouped::GroupedAnalysis};
    ///
    /// let classes = [
    ///     ClassInterval::new(20.0, 30.0, 8),
    ///     ClassInterval::new(10.0, 20.0, 5),
    ///     ClassInterval::new(30.0, 40.0, 3),
    /// ];
    /// let analysis = GroupedAnalysis::new(&classes).unwrap();
    /// assert_eq!(analysis.classes[0].interval.lower, 10.0);
    /// assert_eq!(analysis.moments.mean, 23.75);
    /// ```
    pub fn new(classes: &[ClassInterval]) -> Result<Self, StatsError> {
        let kind = DatasetKind::Grouped;

        if classes.is_empty() {
            return Err(StatsError::EmptyInput { kind });
        }
        if let Some((row, class)) = classes.iter().enumerate().find(|(_, c)| !c.is_valid()) {
            return Err(StatsError::InvalidInterval {
                row,
                lower: class.lower,
                upper: class.upper,
            });
        }

        if classes.iter().any(|c| !c.width().is_finite()) {
            return Err(StatsError::ValueOverflow { kind });
        }

        let mut sorted = classes.to_vec();
        sorted.sort_by(|a, b| a.lower.total_cmp(&b.lower));

        let points = sorted
            .iter()
            .map(|c| WeightedPoint::new(c.midpoint(), c.frequency))
            .collect::<Vec<_>>();
        let moments =
            Moments::from_points(&points).map_err(|err| StatsError::from_moments(kind, err))?;

        let cumulative = cumulative_frequencies(sorted.iter().map(|c| c.frequency));
        let classes = sorted
            .into_iter()
            .zip(cumulative)
            .map(|(interval, cf)| ClassRow::new(interval, cf))
            .collect::<Vec<_>>();

        let overlaps = find_overlaps(&classes);
        let median = grouped_median(&classes, moments.total_weight);
        let mode = grouped_mode(&classes);

        Ok(Self {
            classes,
            overlaps,
            moments,
            median,
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
            kind: DatasetKind::Grouped,
            mean: self.moments.mean,
            median: self.median.value(),
            mode: self.mode.value(),
            mad: self.moments.mad,
            variance: self.moments.variance,
            std_dev: self.moments.std_dev,
        }
    }
}

fn find_overlaps(rows: &[ClassRow]) -> Vec<ClassOverlap> {
    rows.windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].interval.lower < pair[0].interval.upper)
        .map(|(i, pair)| ClassOverlap {
            index: i + 1,
            previous: pair[0].bounds(),
            current: pair[1].bounds(),
        })
        .collect()
}

/// Interpolates the median inside the first class whose cumulative frequency
/// reaches `N / 2`.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn grouped_median(rows: &[ClassRow], total: u64) -> GroupedMedian {
    let position = total as f64 / 2.0;
    let Some(class_index) = rows
        .iter()
        .position(|r| r.cumulative_frequency >= total - total / 2)
    else {
        return GroupedMedian::Unavailable {
            class_index: None,
            position,
        };
    };

    let row = &rows[class_index];
    let frequency = row.frequency();
    if frequency == 0 || row.width <= 0.0 {
        return GroupedMedian::Unavailable {
            class_index: Some(class_index),
            position,
        };
    }

    let cumulative_before = row.cumulative_frequency - frequency;
    let lower = row.interval.lower;
    let value = lower + ((position - cumulative_before as f64) / frequency as f64) * row.width;
    GroupedMedian::Interpolated {
        class_index,
        position,
        cumulative_before,
        frequency,
        lower,
        width: row.width,
        value,
    }
}

/// Locates the modal class and interpolates the mode inside it.
pub(crate) fn grouped_mode(rows: &[ClassRow]) -> GroupedMode {
    let frequency = rows.iter().map(ClassRow::frequency).max().unwrap_or(0);
    if frequency == 0 {
        return GroupedMode::Unavailable { class_index: None };
    }

    let class_indices = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.frequency() == frequency)
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
    if class_indices.len() > 1 {
        let classes = class_indices.iter().map(|&i| rows[i].bounds()).collect();
        return GroupedMode::Multimodal {
            frequency,
            class_indices,
            classes,
        };
    }

    let class_index = class_indices[0];
    let row = &rows[class_index];
    if row.width <= 0.0 {
        return GroupedMode::Unavailable {
            class_index: Some(class_index),
        };
    }

    let frequency_before = class_index
        .checked_sub(1)
        .map_or(0, |i| rows[i].frequency());
    let frequency_after = rows.get(class_index + 1).map_or(0, ClassRow::frequency);
    let d1 = frequency.saturating_sub(frequency_before);
    let d2 = frequency.saturating_sub(frequency_after);
    let lower = row.interval.lower;

    GroupedMode::Interpolated {
        class_index,
        frequency,
        frequency_before,
        frequency_after,
        d1,
        d2,
        lower,
        width: row.width,
        value: mode_estimate(lower, row.width, d1, d2),
    }
}

/// `L + (d1 / (d1 + d2)) × h`, or the class midpoint when `d1 + d2 = 0`.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn mode_estimate(lower: f64, width: f64, d1: u64, d2: u64) -> f64 {
    if d1 == 0 && d2 == 0 {
        return lower + width / 2.0;
    }
    lower + (d1 as f64 / (d1 as f64 + d2 as f64)) * width
}
