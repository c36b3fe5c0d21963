//! Statistic values that may be a number or a descriptive outcome.

use std::fmt;

use serde::Serialize;

/// An observed value displayed as given, in exponent form when its
/// magnitude is at least `1e21` or below `1e-6`.
///
/// ```
/// # use freqstat_stats::value::Compact;
/// assert_eq!(Compact(2.5).to_string(), "2.5");
/// assert_eq!(Compact(1e308).to_string(), "1e308");
/// assert_eq!(Compact(-2.5e-7).to_string(), "-2.5e-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compact(pub f64);

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Closed range `lower-upper` of a class interval or its boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassBounds {
    pub lower: f64,
    pub upper: f64,
}

impl ClassBounds {
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for ClassBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Compact(self.lower), Compact(self.upper))
    }
}

/// Result of a single statistic.
///
/// Mean, MAD and the deviation measures are always numeric. Median and mode
/// can legitimately end in a sentence instead of a number, so they are carried
/// as this tagged union and callers match on the tag.
///
/// ```
/// use freqstat_stats::{Outcome, StatValue};
///
/// assert_eq!(StatValue::Numeric(5.0).to_string(), "5.00");
/// assert_eq!(
///     StatValue::Descriptive(Outcome::NoDistinctMode).to_string(),
///     "No distinct mode"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StatValue {
    /// A computed number, displayed with two decimals.
    Numeric(f64),
    /// A value or sentence reported verbatim.
    Descriptive(Outcome),
}

impl StatValue {
    /// Returns the numeric value, if the statistic resolved to a number.
    ///
    /// A single exact mode counts as numeric here even though it is displayed
    /// verbatim.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) | Self::Descriptive(Outcome::Modal { value }) => Some(*value),
            Self::Descriptive(_) => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value:.2}"),
            Self::Descriptive(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

impl From<Outcome> for StatValue {
    fn from(outcome: Outcome) -> Self {
        Self::Descriptive(outcome)
    }
}

/// Non-numeric outcomes of the median and mode computations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The single most frequent observed value.
    Modal { value: f64 },
    /// Several observed values share the highest frequency.
    Multimodal { values: Vec<f64> },
    /// Several classes share the highest frequency.
    MultimodalClasses { classes: Vec<ClassBounds> },
    /// No value occurs more often than the others.
    NoDistinctMode,
    /// The median class has zero frequency or zero width.
    MedianUnavailable,
    /// The modal class has zero frequency or zero width.
    ModeUnavailable,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modal { value } => write!(f, "{}", Compact(*value)),
            Self::Multimodal { values } => {
                let values = values.iter().copied().map(Compact).collect::<Vec<_>>();
                write!(f, "{} (Multimodal)", join(&values))
            }
            Self::MultimodalClasses { classes } => {
                write!(f, "Multimodal (Modal Classes: {})", join(classes))
            }
            Self::NoDistinctMode => f.write_str("No distinct mode"),
            Self::MedianUnavailable => {
                f.write_str("Could not calculate median (Zero frequency or width in median class)")
            }
            Self::ModeUnavailable => f.write_str(
                "Could not calculate mode (Zero frequency, class width, or invalid interval)",
            ),
        }
    }
}

/// Joins displayable items with `", "`.
///
/// ```
/// # use freqstat_stats::value::join;
/// assert_eq!(join(&[1.0, 2.5, 3.0]), "1, 2.5, 3");
/// ```
pub fn join<T>(items: &[T]) -> String
where
    T: fmt::Display,
{
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_rounds_to_two_decimals() {
        assert_eq!(StatValue::Numeric(2.498).to_string(), "2.50");
        assert_eq!(StatValue::Numeric(-1.0).to_string(), "-1.00");
    }

    #[test]
    fn test_modal_value_is_printed_verbatim() {
        let value = StatValue::from(Outcome::Modal { value: 3.0 });
        assert_eq!(value.to_string(), "3");
        assert_eq!(value.as_f64(), Some(3.0));
    }

    #[test]
    fn test_extreme_modal_values_use_exponent_form() {
        let value = StatValue::from(Outcome::Modal { value: 1e308 });
        assert_eq!(value.to_string(), "1e308");
        assert_eq!(value.as_f64(), Some(1e308));

        let outcome = Outcome::Multimodal {
            values: vec![1e-9, 0.0, 1e300],
        };
        assert_eq!(outcome.to_string(), "1e-9, 0, 1e300 (Multimodal)");
        assert_eq!(ClassBounds::new(0.0, 1e30).to_string(), "0-1e30");
    }

    #[test]
    fn test_multimodal_lists_values() {
        let value = StatValue::from(Outcome::Multimodal {
            values: vec![1.0, 2.5],
        });
        assert_eq!(value.to_string(), "1, 2.5 (Multimodal)");
        assert_eq!(value.as_f64(), None);
    }

    #[test]
    fn test_multimodal_classes_lists_bounds() {
        let outcome = Outcome::MultimodalClasses {
            classes: vec![ClassBounds::new(10.0, 20.0), ClassBounds::new(20.0, 30.0)],
        };
        assert_eq!(
            outcome.to_string(),
            "Multimodal (Modal Classes: 10-20, 20-30)"
        );
    }

    #[test]
    fn test_serialized_form_is_tagged() {
        let json = serde_json::to_value(StatValue::Numeric(1.5)).unwrap();
        assert_eq!(json["type"], "numeric");
        assert_eq!(json["value"], 1.5);

        let json = serde_json::to_value(StatValue::from(Outcome::NoDistinctMode)).unwrap();
        assert_eq!(json["type"], "descriptive");
        assert_eq!(json["value"]["outcome"], "no_distinct_mode");
    }
}
