//! Sections shared by the ungrouped and grouped narrations.
//!
//! Both kinds are frequency-weighted sums over rows; they differ only in
//! whether `x` is an observed value or a class midpoint.

use freqstat_stats::{Statistic, Summary, weighted::Moments};

use crate::{
    format::{fixed, join},
    section::Section,
};

/// What `x` stands for in a weighted narration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject {
    /// "value" or "midpoint".
    pub noun: &'static str,
    /// Symbol used in sums, `x` or `m`.
    pub symbol: &'static str,
}

pub(crate) const VALUE: Subject = Subject {
    noun: "value",
    symbol: "x",
};

pub(crate) const MIDPOINT: Subject = Subject {
    noun: "midpoint",
    symbol: "m",
};

/// Appends the division of `Σ(f × x)` by `Σf` and the mean result.
pub(crate) fn finish_mean(
    section: &mut Section,
    subject: Subject,
    moments: &Moments,
    summary: &Summary,
) {
    let symbol = subject.symbol;
    section
        .instruction(format!(
            "Divide the sum by the total frequency (Σf = {}).",
            moments.total_weight
        ))
        .formula(format!("x̄ = Σ(f × {symbol}) / Σf"))
        .calculation(format!(
            "x̄ = {} / {} = {}",
            fixed(moments.weighted_sum),
            moments.total_weight,
            fixed(moments.mean)
        ))
        .result(
            Statistic::Mean.label(summary.is_estimated()),
            summary.formatted(Statistic::Mean),
        );
}

pub(crate) fn mad(subject: Subject, moments: &Moments, summary: &Summary) -> Section {
    let n = moments.total_weight;
    let terms = join(
        moments
            .deviations
            .iter()
            .map(|d| format!("{} × {}", fixed(d.absolute), d.weight)),
        " + ",
    );

    let mut section = Section::new("Mean Absolute Deviation (MAD)");
    section
        .instruction(format!(
            "Calculate the absolute deviation of each {} from the mean (x̄ = {}).",
            subject.noun,
            fixed(moments.mean)
        ))
        .instruction("Multiply each absolute deviation by its frequency and sum them.")
        .calculation(format!(
            "Σ(|x - x̄| × f) = {terms} = {}",
            fixed(moments.absolute_deviation_sum)
        ))
        .instruction(format!("Divide the sum by the total frequency (N = {n})."))
        .formula("MAD = Σ(|x - x̄| × f) / N")
        .calculation(format!(
            "MAD = {} / {n} = {}",
            fixed(moments.absolute_deviation_sum),
            fixed(moments.mad)
        ))
        .result(
            Statistic::Mad.label(summary.is_estimated()),
            summary.formatted(Statistic::Mad),
        );
    section
}

pub(crate) fn stddev(subject: Subject, moments: &Moments, summary: &Summary) -> Section {
    let n = moments.total_weight;
    let terms = join(
        moments
            .deviations
            .iter()
            .map(|d| format!("{} × {}", fixed(d.squared), d.weight)),
        " + ",
    );
    let title = if summary.is_estimated() {
        "Standard Deviation and Variance (Estimated Population)"
    } else {
        "Standard Deviation and Variance (Population)"
    };

    let mut section = Section::new(title);
    section
        .instruction(format!(
            "Calculate the squared deviation of each {} from the mean (x̄ = {}).",
            subject.noun,
            fixed(moments.mean)
        ))
        .instruction("Multiply each squared deviation by its frequency and sum them.")
        .calculation(format!(
            "Σ((x - x̄)² × f) = {terms} = {}",
            fixed(moments.squared_deviation_sum)
        ))
        .instruction(format!(
            "Divide the sum by the total frequency (N = {n}) to find the variance (σ²)."
        ))
        .named_formula("Variance", "σ² = Σ((x - x̄)² × f) / N")
        .calculation(format!(
            "σ² = {} / {n} = {}",
            fixed(moments.squared_deviation_sum),
            fixed(moments.variance)
        ));
    finish_stddev(&mut section, moments, summary);
    section
}

/// Appends the variance result and the square root step.
pub(crate) fn finish_stddev(section: &mut Section, moments: &Moments, summary: &Summary) {
    section
        .result(summary.variance_label(), fixed(moments.variance))
        .instruction("Take the square root of the variance to find the standard deviation (σ).")
        .named_formula("Standard Deviation", "σ = √σ²")
        .calculation(format!(
            "σ = √({}) = {}",
            fixed(moments.variance),
            fixed(moments.std_dev)
        ))
        .result(
            Statistic::StdDev.label(summary.is_estimated()),
            summary.formatted(Statistic::StdDev),
        );
}
