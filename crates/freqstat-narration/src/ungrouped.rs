use freqstat_stats::{
    Outcome, StatValue, Statistic, Summary, UngroupedAnalysis, exact::ExactMedian,
};

use crate::{
    format::{DEVIATION_HEADERS, deviation_cells, deviation_totals, fixed, join, relative},
    section::{Narration, Section},
    table::Table,
    weighted::{self, VALUE},
};

pub(crate) fn narrate(analysis: &UngroupedAnalysis) -> Narration {
    let summary = analysis.summary();
    Narration {
        general: general(analysis),
        mean: mean(analysis, &summary),
        median: median(analysis, &summary),
        mode: mode(analysis, &summary),
        mad: weighted::mad(VALUE, &analysis.moments, &summary),
        stddev: weighted::stddev(VALUE, &analysis.moments, &summary),
    }
}

fn general(analysis: &UngroupedAnalysis) -> Section {
    let n = analysis.total_frequency();
    let mut table = Table::new(
        ["Value (x)", "Frequency (f)"]
            .into_iter()
            .chain(DEVIATION_HEADERS)
            .chain([
                "Cumulative Frequency",
                "Relative Frequency",
                "Cumulative Relative Frequency",
            ]),
    );
    for (row, deviation) in analysis.rows.iter().zip(&analysis.moments.deviations) {
        let mut cells = vec![row.pair.value.to_string(), row.pair.frequency.to_string()];
        cells.extend(deviation_cells(deviation));
        cells.extend([
            row.cumulative_frequency.to_string(),
            relative(row.pair.frequency, n),
            relative(row.cumulative_frequency, n),
        ]);
        table.push_row(cells);
    }
    let mut totals = vec!["Total".to_owned(), n.to_string()];
    totals.extend(deviation_totals(&analysis.moments));
    totals.extend(["-".to_owned(), relative(n, n), "-".to_owned()]);
    table.set_totals(totals);

    let mut section = Section::new("Frequency Distribution Table");
    section
        .table(table)
        .note(format!("Total Frequency (N): {n}"));
    section
}

fn mean(analysis: &UngroupedAnalysis, summary: &Summary) -> Section {
    let terms = join(
        analysis
            .rows
            .iter()
            .map(|r| format!("{} × {}", r.pair.value, r.pair.frequency)),
        " + ",
    );

    let mut section = Section::new("Mean");
    section
        .instruction("Calculate the sum of (Value × Frequency) for each pair.")
        .calculation(format!(
            "Σ(f × x) = {terms} = {}",
            fixed(analysis.moments.weighted_sum)
        ));
    weighted::finish_mean(&mut section, VALUE, &analysis.moments, summary);
    section
}

fn median(analysis: &UngroupedAnalysis, summary: &Summary) -> Section {
    let n = analysis.total_frequency();
    let cumulative = analysis.rows.iter().map(|r| {
        format!(
            "Value {}: Cumulative Freq = {}",
            r.pair.value, r.cumulative_frequency
        )
    });

    let mut section = Section::new("Median");
    section
        .instruction("Sort the data by value.")
        .instruction(format!(
            "Calculate the position of the median using the total frequency (N = {n})."
        ));

    match analysis.median {
        ExactMedian::Middle { position, value } => {
            section
                .named_formula("Position", "(N + 1) / 2")
                .calculation(format!("Position = ({n} + 1) / 2 = {position}"))
                .instruction(format!(
                    "Find the value where the cumulative frequency first reaches or exceeds {position}."
                ))
                .list(Some("Cumulative Frequencies"), cumulative)
                .note(format!("The value at this position is {value}."));
        }
        ExactMedian::Pair {
            positions: [first, second],
            values: [low, high],
            value,
        } => {
            section
                .named_formula("Position", "N / 2 and (N / 2) + 1")
                .calculation(format!(
                    "Positions = {n} / 2 and ({n} / 2) + 1 = {first} and {second}"
                ))
                .instruction("Find the values at these positions using cumulative frequency.")
                .list(Some("Cumulative Frequencies"), cumulative)
                .note(format!(
                    "The values at positions {first} and {second} are {low} and {high}."
                ))
                .instruction("The median is the average of these two values.")
                .calculation(format!("({low} + {high}) / 2 = {}", fixed(value)));
        }
    }

    section.result(Statistic::Median.name(), summary.formatted(Statistic::Median));
    section
}

fn mode(analysis: &UngroupedAnalysis, summary: &Summary) -> Section {
    let tally = &analysis.mode_tally;
    let mut section = Section::new("Mode");
    section
        .instruction("Identify the value(s) with the highest frequency.")
        .list(
            None,
            analysis
                .rows
                .iter()
                .map(|r| format!("Value {}: Frequency = {}", r.pair.value, r.pair.frequency)),
        )
        .note(format!("Highest Frequency observed: {}", tally.max_frequency))
        .instruction(format!(
            "The value(s) with frequency {} are: {}.",
            tally.max_frequency,
            join(&tally.values, ", ")
        ));

    match &analysis.mode {
        StatValue::Descriptive(Outcome::NoDistinctMode) => {
            section.note("All values appear with the same maximum frequency.");
        }
        StatValue::Descriptive(Outcome::Multimodal { .. }) => {
            section.note("Several values share the highest frequency.");
        }
        _ => {}
    }

    section.result(Statistic::Mode.name(), summary.formatted(Statistic::Mode));
    section
}
