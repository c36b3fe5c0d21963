use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{dataset::DatasetKind, value::StatValue};

/// The statistics reported for every dataset.
///
/// Variance is reported together with the standard deviation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Mean,
    Median,
    Mode,
    Mad,
    #[serde(rename = "stddev")]
    StdDev,
}

impl Statistic {
    pub const ALL: [Self; 5] = [
        Self::Mean,
        Self::Median,
        Self::Mode,
        Self::Mad,
        Self::StdDev,
    ];

    /// Stable identifier, as used for narration section names.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::Mad => "mad",
            Self::StdDev => "stddev",
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "Mean",
            Self::Median => "Median",
            Self::Mode => "Mode",
            Self::Mad => "MAD",
            Self::StdDev => "Standard deviation & Variance",
        }
    }

    /// Label used in the summary block.
    #[must_use]
    pub fn label(self, estimated: bool) -> &'static str {
        match (self, estimated) {
            (Self::Mean, false) => "Mean",
            (Self::Mean, true) => "Mean (Estimated)",
            (Self::Median, false) => "Median",
            (Self::Median, true) => "Median (Estimated)",
            (Self::Mode, false) => "Mode",
            (Self::Mode, true) => "Mode (Estimated)",
            (Self::Mad, false) => "MAD",
            (Self::Mad, true) => "MAD (Estimated)",
            (Self::StdDev, false) => "Standard Deviation (Pop.)",
            (Self::StdDev, true) => "Standard Deviation (Estimated Pop.)",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The five statistics of one dataset.
///
/// The [`Display`](fmt::Display) form is the human-readable result block:
///
/// ```
/// use freqstat_stats::summarize_raw;
///
/// let summary = summarize_raw(&[5.0, 3.0, 8.0, 3.0, 9.0]).unwrap();
/// assert_eq!(
///     summary.to_string(),
///     "Mean: 5.60\n\
///      Median: 5.00\n\
///      Mode: 3\n\
///      MAD: 2.32\n\
///      Variance (Pop.): 6.24\n\
///      Standard Deviation (Pop.): 2.50\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kind: DatasetKind,
    pub mean: f64,
    pub median: StatValue,
    pub mode: StatValue,
    pub mad: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Returns whether the figures are estimates from class midpoints.
    #[must_use]
    pub fn is_estimated(&self) -> bool {
        self.kind.is_estimated()
    }

    /// The displayed text of one statistic.
    ///
    /// Narrations end each section with exactly this text.
    #[must_use]
    pub fn formatted(&self, statistic: Statistic) -> String {
        match statistic {
            Statistic::Mean => format!("{:.2}", self.mean),
            Statistic::Median => self.median.to_string(),
            Statistic::Mode => self.mode.to_string(),
            Statistic::Mad => format!("{:.2}", self.mad),
            Statistic::StdDev => format!("{:.2}", self.std_dev),
        }
    }

    /// Variance label matching the standard deviation label.
    #[must_use]
    pub fn variance_label(&self) -> &'static str {
        if self.is_estimated() {
            "Variance (Estimated Pop.)"
        } else {
            "Variance (Pop.)"
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimated = self.is_estimated();
        for statistic in Statistic::ALL {
            if statistic == Statistic::StdDev {
                writeln!(f, "{}: {:.2}", self.variance_label(), self.variance)?;
            }
            writeln!(
                f,
                "{}: {}",
                statistic.label(estimated),
                self.formatted(statistic)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Outcome;

    fn grouped_summary() -> Summary {
        Summary {
            kind: DatasetKind::Grouped,
            mean: 24.5,
            median: StatValue::Numeric(24.0),
            mode: StatValue::Descriptive(Outcome::ModeUnavailable),
            mad: 1.0,
            variance: 4.0,
            std_dev: 2.0,
        }
    }

    #[test]
    fn test_statistic_parses_from_key() {
        for statistic in Statistic::ALL {
            assert_eq!(statistic.key().parse::<Statistic>().ok(), Some(statistic));
        }
    }

    #[test]
    fn test_estimated_labels() {
        let text = grouped_summary().to_string();
        assert!(text.starts_with("Mean (Estimated): 24.50\n"));
        assert!(text.contains("Variance (Estimated Pop.): 4.00\n"));
        assert!(text.ends_with("Standard Deviation (Estimated Pop.): 2.00\n"));
    }

    #[test]
    fn test_descriptive_statistic_is_inserted_as_text() {
        let summary = grouped_summary();
        assert_eq!(
            summary.formatted(Statistic::Mode),
            "Could not calculate mode (Zero frequency, class width, or invalid interval)"
        );
        assert_eq!(summary.formatted(Statistic::Median), "24.00");
    }

    #[test]
    fn test_serialized_statistic_keys() {
        let json = serde_json::to_value(Statistic::StdDev).unwrap();
        assert_eq!(json, "stddev");
        let json = serde_json::to_value(Statistic::Mad).unwrap();
        assert_eq!(json, "mad");
    }
}
