use crate::{dataset::DatasetKind, weighted::MomentsError};

/// Reasons a whole request is rejected before any statistic is computed.
///
/// Per-statistic problems (an ambiguous mode, a degenerate median class) are
/// not errors; they are reported through [`StatValue`](crate::StatValue).
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum StatsError {
    /// No usable observations remained after filtering.
    #[display("{}", empty_input_message(*kind))]
    EmptyInput { kind: DatasetKind },
    /// Rows are present but their frequencies sum to zero.
    #[display("Total frequency must be greater than 0.")]
    ZeroTotalWeight { kind: DatasetKind },
    /// The frequencies do not fit in a `u64` when summed.
    #[display("Total frequency is too large to calculate stats.")]
    FrequencyOverflow { kind: DatasetKind },
    /// A sum or spread of the values leaves the range of `f64`.
    #[display("Values are too large to calculate stats.")]
    ValueOverflow { kind: DatasetKind },
    /// A class interval with `lower >= upper` or a non-finite bound.
    ///
    /// `row` is the zero-based position in the caller's input, before sorting.
    #[display(
        "Invalid input: Ensure lower bound < upper bound and frequency is non-negative. (row {}: {lower} - {upper})",
        row + 1
    )]
    InvalidInterval { row: usize, lower: f64, upper: f64 },
}

impl StatsError {
    /// Maps a failure of [`Moments::from_points`](crate::weighted::Moments::from_points)
    /// onto a request error.
    #[must_use]
    pub fn from_moments(kind: DatasetKind, err: MomentsError) -> Self {
        match err {
            MomentsError::ZeroWeight => Self::ZeroTotalWeight { kind },
            MomentsError::WeightOverflow => Self::FrequencyOverflow { kind },
            MomentsError::NonFinite => Self::ValueOverflow { kind },
        }
    }

    /// Returns the dataset kind the rejected request was made for.
    #[must_use]
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::EmptyInput { kind }
            | Self::ZeroTotalWeight { kind }
            | Self::FrequencyOverflow { kind }
            | Self::ValueOverflow { kind } => *kind,
            Self::InvalidInterval { .. } => DatasetKind::Grouped,
        }
    }
}

fn empty_input_message(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::Raw => "Please enter valid numbers for raw data.",
        DatasetKind::Ungrouped => "Please add at least one value-frequency pair for ungrouped data.",
        DatasetKind::Grouped => {
            "Please add at least one class interval and frequency pair for grouped data."
        }
    }
}
