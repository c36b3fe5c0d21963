use freqstat_stats::weighted::{Deviation, Moments};

/// Two-decimal rendering used for every computed quantity.
pub(crate) fn fixed(x: f64) -> String {
    format!("{x:.2}")
}

/// `part / total` as a ratio and a percentage, e.g. `0.2000 (20.00%)`.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn relative(part: u64, total: u64) -> String {
    let ratio = part as f64 / total as f64;
    format!("{ratio:.4} ({:.2}%)", ratio * 100.0)
}

/// Joins already formatted terms with `sep`.
pub(crate) fn join<I>(terms: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    terms
        .into_iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

pub(crate) const DEVIATION_HEADERS: [&str; 5] = [
    "x × f",
    "|x - x̄|",
    "|x - x̄| × f",
    "(x - x̄)²",
    "(x - x̄)² × f",
];

pub(crate) fn deviation_cells(d: &Deviation) -> [String; 5] {
    [
        fixed(d.weighted_x),
        fixed(d.absolute),
        fixed(d.weighted_absolute),
        fixed(d.squared),
        fixed(d.weighted_squared),
    ]
}

pub(crate) fn deviation_totals(m: &Moments) -> [String; 5] {
    [
        fixed(m.weighted_sum),
        "-".to_owned(),
        fixed(m.absolute_deviation_sum),
        "-".to_owned(),
        fixed(m.squared_deviation_sum),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_frequency() {
        assert_eq!(relative(1, 5), "0.2000 (20.00%)");
        assert_eq!(relative(5, 5), "1.0000 (100.00%)");
        assert_eq!(relative(1, 3), "0.3333 (33.33%)");
    }

    #[test]
    fn test_join_terms() {
        assert_eq!(join([3.0, 5.5], " + "), "3 + 5.5");
        assert_eq!(join(Vec::<f64>::new(), ", "), "");
    }
}
