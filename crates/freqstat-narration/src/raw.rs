use freqstat_stats::{Outcome, RawAnalysis, StatValue, Statistic, Summary, exact::ExactMedian};

use crate::{
    format::{fixed, join},
    section::{Narration, Section},
    weighted::finish_stddev,
};

pub(crate) fn narrate(analysis: &RawAnalysis) -> Narration {
    let summary = analysis.summary();
    Narration {
        general: general(analysis),
        mean: mean(analysis, &summary),
        median: median(analysis, &summary),
        mode: mode(analysis, &summary),
        mad: mad(analysis, &summary),
        stddev: stddev(analysis, &summary),
    }
}

fn general(analysis: &RawAnalysis) -> Section {
    let mut section = Section::new("Input Data");
    section
        .note(format!("Input Data: {}", join(&analysis.input, ", ")))
        .note(format!("Sorted Data: {}", join(&analysis.sorted, ", ")))
        .note(format!(
            "Total number of data points (n) = {}",
            analysis.len()
        ));
    section
}

fn mean(analysis: &RawAnalysis, summary: &Summary) -> Section {
    let moments = &analysis.moments;
    let mut section = Section::new("Mean (x̄)");
    section
        .instruction("Sum all the numbers (Σx).")
        .calculation(format!(
            "Σx = {} = {}",
            join(&analysis.sorted, " + "),
            moments.weighted_sum
        ))
        .instruction("Divide the sum by the total count of numbers (n).")
        .formula("x̄ = Σx / n")
        .calculation(format!(
            "x̄ = {} / {} = {}",
            moments.weighted_sum,
            moments.total_weight,
            fixed(moments.mean)
        ))
        .result(Statistic::Mean.name(), summary.formatted(Statistic::Mean));
    section
}

fn median(analysis: &RawAnalysis, summary: &Summary) -> Section {
    let n = analysis.len();
    let mut section = Section::new("Median");
    section.instruction(format!(
        "Sort the data in ascending order: {}",
        join(&analysis.sorted, ", ")
    ));

    match analysis.median {
        ExactMedian::Middle { position, value } => {
            section
                .instruction(format!(
                    "The total count ({n}) is odd. The median is the middle number."
                ))
                .named_formula("Position", "Position of the middle value is (N + 1) / 2.")
                .calculation(format!(
                    "Position: ({n} + 1) / 2 = {position} (in a 1-based index, corresponding to array index {}).",
                    position - 1
                ))
                .instruction(format!(
                    "The number at this position in the sorted data is {value}."
                ));
        }
        ExactMedian::Pair {
            positions: [first, second],
            values: [low, high],
            value,
        } => {
            section
                .instruction(format!(
                    "The total count ({n}) is even. The median is the average of the two middle numbers."
                ))
                .named_formula(
                    "Position",
                    "Position of middle values are N/2 and (N/2) + 1.",
                )
                .calculation(format!(
                    "Positions: {n}/2 = {first} and {n}/2 + 1 = {second} (in a 1-based index, corresponding to array indices {} and {}).",
                    first - 1,
                    second - 1
                ))
                .instruction(format!(
                    "The numbers at these positions in the sorted data are {low} and {high}."
                ))
                .named_formula(
                    "Median",
                    "Median = (Value at N/2 + Value at (N/2)+1) / 2",
                )
                .calculation(format!("Median = ({low} + {high}) / 2 = {}", fixed(value)));
        }
    }

    section.result(Statistic::Median.name(), summary.formatted(Statistic::Median));
    section
}

fn mode(analysis: &RawAnalysis, summary: &Summary) -> Section {
    let tally = &analysis.mode_tally;
    let mut section = Section::new("Mode");
    section
        .instruction("Count the frequency of each number in the data.")
        .list(
            None,
            analysis
                .frequency_table
                .iter()
                .map(|(value, count)| format!("Number {value}: {count} time(s)")),
        )
        .instruction(format!(
            "Identify the highest frequency: {}.",
            tally.max_frequency
        ))
        .instruction("The mode is the number(s) that appear(s) with this highest frequency.");

    match &analysis.mode {
        StatValue::Descriptive(Outcome::Modal { value }) => {
            section.note(format!("The number with the highest frequency is {value}."));
        }
        StatValue::Descriptive(Outcome::Multimodal { values }) => {
            section.note(format!(
                "Multiple numbers have this highest frequency ({}). These numbers are: {}.",
                tally.max_frequency,
                join(values, ", ")
            ));
        }
        _ => {
            section.note("Since the highest frequency is 1, there is no distinct mode.");
        }
    }

    section.result(Statistic::Mode.name(), summary.formatted(Statistic::Mode));
    section
}

fn mad(analysis: &RawAnalysis, summary: &Summary) -> Section {
    let moments = &analysis.moments;
    let mean = fixed(moments.mean);
    let mut section = Section::new("Mean Absolute Deviation (MAD)");
    section
        .instruction(format!("Calculate the mean (x̄) of the data: {mean}."))
        .instruction("Calculate the absolute deviation (|x - x̄|) of each number from the mean.")
        .list(
            Some("Absolute Deviations"),
            moments
                .deviations
                .iter()
                .map(|d| format!("|{} - {mean}| = {}", d.x, fixed(d.absolute))),
        )
        .instruction(format!(
            "Sum these absolute deviations: Σ|x - x̄| = {}",
            fixed(moments.absolute_deviation_sum)
        ))
        .instruction("Divide the sum by the total count of numbers (n).")
        .formula("MAD = Σ|x - x̄| / n")
        .calculation(format!(
            "MAD = {} / {} = {}",
            fixed(moments.absolute_deviation_sum),
            moments.total_weight,
            fixed(moments.mad)
        ))
        .result(Statistic::Mad.name(), summary.formatted(Statistic::Mad));
    section
}

fn stddev(analysis: &RawAnalysis, summary: &Summary) -> Section {
    let moments = &analysis.moments;
    let mean = fixed(moments.mean);
    let mut section = Section::new("Standard Deviation and Variance (Population)");
    section
        .instruction(format!("Calculate the mean (x̄) of the data: {mean}."))
        .instruction("Calculate the squared deviation ((x - x̄)²) of each number from the mean.")
        .list(
            Some("Squared Deviations"),
            moments
                .deviations
                .iter()
                .map(|d| format!("({} - {mean})² = {}", d.x, fixed(d.squared))),
        )
        .instruction(format!(
            "Sum these squared deviations: Σ(x - x̄)² = {}",
            fixed(moments.squared_deviation_sum)
        ))
        .instruction(
            "Divide the sum by the total count of numbers (n) to find the variance (σ²).",
        )
        .named_formula("Variance", "σ² = Σ(x - x̄)² / n")
        .calculation(format!(
            "σ² = {} / {} = {}",
            fixed(moments.squared_deviation_sum),
            moments.total_weight,
            fixed(moments.variance)
        ));
    finish_stddev(&mut section, moments, summary);
    section
}
