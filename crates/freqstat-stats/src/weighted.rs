//! Weighted arithmetic shared by every dataset kind.
//!
//! Raw observations are points of weight 1, ungrouped pairs are points of
//! weight `frequency`, and grouped classes are their midpoints weighted by
//! `frequency`. Both engines read the same [`Moments`], so the numbers they
//! report cannot drift apart.

/// A value together with the number of times it was observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedPoint {
    pub x: f64,
    pub weight: u64,
}

impl WeightedPoint {
    #[must_use]
    pub const fn new(x: f64, weight: u64) -> Self {
        Self { x, weight }
    }
}

/// Deviation terms of one point from the mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    pub x: f64,
    pub weight: u64,
    /// `x × weight`
    pub weighted_x: f64,
    /// `|x - mean|`
    pub absolute: f64,
    /// `|x - mean| × weight`
    pub weighted_absolute: f64,
    /// `(x - mean)²`
    pub squared: f64,
    /// `(x - mean)² × weight`
    pub weighted_squared: f64,
}

impl Deviation {
    #[expect(clippy::cast_precision_loss)]
    fn new(point: WeightedPoint, mean: f64) -> Self {
        let weight = point.weight as f64;
        let absolute = (point.x - mean).abs();
        let squared = (point.x - mean).powi(2);
        Self {
            x: point.x,
            weight: point.weight,
            weighted_x: point.x * weight,
            absolute,
            weighted_absolute: absolute * weight,
            squared,
            weighted_squared: squared * weight,
        }
    }
}

/// Reasons [`Moments::from_points`] cannot describe a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MomentsError {
    #[display("total weight is zero")]
    ZeroWeight,
    #[display("total weight overflows u64")]
    WeightOverflow,
    #[display("a sum or spread is not finite")]
    NonFinite,
}

/// Mean and population dispersion of a weighted dataset.
///
/// # Examples
///
/// ```
/// use freqstat_stats::weighted::{Moments, WeightedPoint};
///
/// let points = [WeightedPoint::new(1.0, 2), WeightedPoint::new(4.0, 1)];
/// let moments = Moments::from_points(&points).unwrap();
/// assert_eq!(moments.total_weight, 3);
/// assert_eq!(moments.mean, 2.0);
/// assert_eq!(moments.variance, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Moments {
    /// `Σw`, the number of observations.
    pub total_weight: u64,
    /// `Σ(w·x)`
    pub weighted_sum: f64,
    pub mean: f64,
    /// Per-point deviation terms, in the order the points were given.
    pub deviations: Vec<Deviation>,
    /// `Σ(w·|x - mean|)`
    pub absolute_deviation_sum: f64,
    /// `Σ(w·(x - mean)²)`
    pub squared_deviation_sum: f64,
    /// Mean absolute deviation.
    pub mad: f64,
    /// Population variance (divides by `Σw`, never `Σw - 1`).
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl Moments {
    /// Computes the moments of `points`.
    ///
    /// # Errors
    ///
    /// - [`MomentsError::ZeroWeight`] if the total weight is zero
    /// - [`MomentsError::WeightOverflow`] if the weights do not fit in a `u64`
    /// - [`MomentsError::NonFinite`] if the mean or a dispersion sum is infinite
    #[expect(clippy::cast_precision_loss)]
    pub fn from_points(points: &[WeightedPoint]) -> Result<Self, MomentsError> {
        let total_weight = points
            .iter()
            .try_fold(0_u64, |acc, p| acc.checked_add(p.weight))
            .ok_or(MomentsError::WeightOverflow)?;
        if total_weight == 0 {
            return Err(MomentsError::ZeroWeight);
        }
        let n = total_weight as f64;
        let weighted_sum = points.iter().map(|p| p.x * p.weight as f64).sum::<f64>();
        let mean = weighted_sum / n;
        if !mean.is_finite() {
            return Err(MomentsError::NonFinite);
        }

        let deviations = points
            .iter()
            .map(|&p| Deviation::new(p, mean))
            .collect::<Vec<_>>();
        let absolute_deviation_sum = deviations.iter().map(|d| d.weighted_absolute).sum::<f64>();
        let squared_deviation_sum = deviations.iter().map(|d| d.weighted_squared).sum::<f64>();
        let variance = squared_deviation_sum / n;
        let sums = [
            weighted_sum,
            absolute_deviation_sum,
            squared_deviation_sum,
            variance,
        ];
        if sums.iter().any(|v| !v.is_finite()) {
            return Err(MomentsError::NonFinite);
        }

        Ok(Self {
            total_weight,
            weighted_sum,
            mean,
            deviations,
            absolute_deviation_sum,
            squared_deviation_sum,
            mad: absolute_deviation_sum / n,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// Running sum of `weights`, saturating at `u64::MAX`.
///
/// ```
/// # use freqstat_stats::weighted::cumulative_frequencies;
/// assert_eq!(cumulative_frequencies([2, 0, 3]), vec![2, 2, 5]);
/// ```
pub fn cumulative_frequencies<I>(weights: I) -> Vec<u64>
where
    I: IntoIterator<Item = u64>,
{
    weights
        .into_iter()
        .scan(0_u64, |acc, w| {
            *acc = acc.saturating_add(w);
            Some(*acc)
        })
        .collect()
}

/// Index of the first row whose cumulative frequency reaches `position`.
///
/// Positions are 1-based, as in "the 3rd observation".
#[must_use]
pub fn row_at_position(cumulative: &[u64], position: u64) -> Option<usize> {
    cumulative.iter().position(|&cf| cf >= position)
}
