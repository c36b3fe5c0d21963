use freqstat_stats::{
    GroupedAnalysis, Statistic, Summary,
    grouped::{GroupedMedian, GroupedMode},
};

use crate::{
    format::{DEVIATION_HEADERS, deviation_cells, deviation_totals, fixed, join, relative},
    section::{Narration, Section},
    table::Table,
    weighted::{self, MIDPOINT},
};

pub(crate) fn narrate(analysis: &GroupedAnalysis) -> Narration {
    let summary = analysis.summary();
    Narration {
        general: general(analysis),
        mean: mean(analysis, &summary),
        median: median(analysis, &summary),
        mode: mode(analysis, &summary),
        mad: weighted::mad(MIDPOINT, &analysis.moments, &summary),
        stddev: weighted::stddev(MIDPOINT, &analysis.moments, &summary),
    }
}

fn general(analysis: &GroupedAnalysis) -> Section {
    let n = analysis.total_frequency();
    let mut table = Table::new(
        ["Class Interval", "Class Boundaries", "Midpoint (x)", "Frequency (f)"]
            .into_iter()
            .chain(DEVIATION_HEADERS)
            .chain(["Cumulative Frequency", "Relative Frequency", "Class Size"]),
    );
    for (row, deviation) in analysis.classes.iter().zip(&analysis.moments.deviations) {
        let mut cells = vec![
            format!("{} - {}", row.interval.lower, row.interval.upper),
            format!(
                "{} - {}",
                fixed(row.boundaries.lower),
                fixed(row.boundaries.upper)
            ),
            fixed(row.midpoint),
            row.frequency().to_string(),
        ];
        cells.extend(deviation_cells(deviation));
        cells.extend([
            row.cumulative_frequency.to_string(),
            relative(row.frequency(), n),
            fixed(row.boundaries.width()),
        ]);
        table.push_row(cells);
    }
    let mut totals = vec![
        "Total".to_owned(),
        String::new(),
        String::new(),
        n.to_string(),
    ];
    totals.extend(deviation_totals(&analysis.moments));
    totals.extend(["-".to_owned(), relative(n, n), "-".to_owned()]);
    table.set_totals(totals);

    let mut section = Section::new("Frequency Distribution Table");
    section
        .note("Input Data (Class Interval, Frequency):")
        .table(table)
        .note(format!("Total Frequency (N): {n}"));
    for overlap in &analysis.overlaps {
        section.note(format!("Note: {overlap}; statistics treat the classes as given."));
    }
    section
}

fn mean(analysis: &GroupedAnalysis, summary: &Summary) -> Section {
    let products = analysis.classes.iter().map(|r| {
        format!(
            "({}+{})/2 × {f} = {} × {f} = {}",
            r.interval.lower,
            r.interval.upper,
            fixed(r.midpoint),
            fixed(r.midpoint * f64_from(r.frequency())),
            f = r.frequency(),
        )
    });
    let terms = join(
        analysis
            .moments
            .deviations
            .iter()
            .map(|d| fixed(d.weighted_x)),
        " + ",
    );

    let mut section = Section::new("Mean (Estimated)");
    section
        .instruction("Calculate the midpoint for each class interval ((lower + upper) / 2).")
        .list(None, products)
        .instruction("Calculate the sum of (Midpoint × Frequency) for each class interval.")
        .calculation(format!(
            "Σ(f × m) = {terms} = {}",
            fixed(analysis.moments.weighted_sum)
        ));
    weighted::finish_mean(&mut section, MIDPOINT, &analysis.moments, summary);
    section
}

fn median(analysis: &GroupedAnalysis, summary: &Summary) -> Section {
    let n = analysis.total_frequency();
    let mut section = Section::new("Median (Estimated)");
    section
        .instruction(
            "Sort the data by lower bound of class interval and calculate cumulative frequencies.",
        )
        .list(
            Some("Cumulative Frequencies"),
            analysis.classes.iter().map(|r| {
                format!(
                    "Class {}: Cumulative Freq = {}",
                    r.bounds(),
                    r.cumulative_frequency
                )
            }),
        );

    match analysis.median {
        GroupedMedian::Interpolated {
            class_index,
            position,
            cumulative_before,
            frequency,
            lower,
            width,
            value,
        } => {
            let class = analysis.classes[class_index].interval;
            section
                .instruction(format!(
                    "Locate the median class: the first class whose cumulative frequency reaches N/2 = {n}/2 = {position}."
                ))
                .note(format!(
                    "The median class is from {} to {}.",
                    class.lower, class.upper
                ))
                .instruction("Calculate the median using the formula:")
                .formula("Median = L + ((N/2 - Cf) / f) * h")
                .note(format!(
                    "Where L = {lower}, Cf = {cumulative_before}, f = {frequency}, and h = {width}"
                ))
                .calculation(format!(
                    "Median = {lower} + (({position} - {cumulative_before}) / {frequency}) * {width} = {}",
                    fixed(value)
                ));
        }
        GroupedMedian::Unavailable {
            class_index,
            position,
        } => {
            section.instruction(format!(
                "Locate the median class: the first class whose cumulative frequency reaches N/2 = {n}/2 = {position}."
            ));
            match class_index.map(|i| analysis.classes[i].interval) {
                Some(class) => section.note(format!(
                    "The median class {} - {} has zero frequency or zero width, so the median cannot be interpolated.",
                    class.lower, class.upper
                )),
                None => section.note("No class reaches the median position."),
            };
        }
    }

    section.result(
        Statistic::Median.label(true),
        summary.formatted(Statistic::Median),
    );
    section
}

fn mode(analysis: &GroupedAnalysis, summary: &Summary) -> Section {
    let mut section = Section::new("Mode (Estimated)");
    section.instruction("Identify the class interval with the highest frequency.");

    match &analysis.mode {
        GroupedMode::Interpolated {
            class_index,
            frequency,
            frequency_before,
            frequency_after,
            d1,
            d2,
            lower,
            width,
            value,
        } => {
            let class = analysis.classes[*class_index].interval;
            section
                .note(format!("The highest frequency is {frequency}."))
                .note(format!(
                    "The class interval with this frequency is from {} to {}.",
                    class.lower, class.upper
                ))
                .instruction("Compare the modal class with its neighbours.")
                .calculation(format!(
                    "d1 = f - f(before) = {frequency} - {frequency_before} = {d1}"
                ))
                .calculation(format!(
                    "d2 = f - f(after) = {frequency} - {frequency_after} = {d2}"
                ))
                .instruction("Calculate the mode using the formula:")
                .formula("Mode = L + (d1 / (d1 + d2)) * h")
                .note(format!(
                    "Where L = {lower}, d1 = {d1}, d2 = {d2}, and h = {width}"
                ));
            if *d1 == 0 && *d2 == 0 {
                section
                    .note("d1 + d2 = 0, so the mode is taken as the class midpoint.")
                    .calculation(format!(
                        "Mode = ({} + {}) / 2 = {}",
                        class.lower,
                        class.upper,
                        fixed(*value)
                    ));
            } else {
                section.calculation(format!(
                    "Mode = {lower} + ({d1} / ({d1} + {d2})) * {width} = {}",
                    fixed(*value)
                ));
            }
        }
        GroupedMode::Multimodal {
            frequency, classes, ..
        } => {
            section
                .note(format!("The highest frequency is {frequency}."))
                .list(
                    Some("Classes with this frequency"),
                    classes.iter().map(ToString::to_string),
                )
                .note("No single modal class exists, so the mode is not interpolated.");
        }
        GroupedMode::Unavailable { class_index } => {
            match class_index.map(|i| analysis.classes[i].interval) {
                Some(class) => section.note(format!(
                    "The modal class {} - {} has zero width, so the mode cannot be interpolated.",
                    class.lower, class.upper
                )),
                None => section.note("No class has a frequency greater than zero."),
            };
        }
    }

    section.result(
        Statistic::Mode.label(true),
        summary.formatted(Statistic::Mode),
    );
    section
}

#[expect(clippy::cast_precision_loss)]
fn f64_from(frequency: u64) -> f64 {
    frequency as f64
}

#[cfg(test)]
mod tests {
    use freqstat_stats::ClassInterval;

    use super::*;

    fn narration(rows: &[(f64, f64, u64)]) -> Narration {
        let classes = rows
            .iter()
            .map(|&(lower, upper, frequency)| ClassInterval::new(lower, upper, frequency))
            .collect::<Vec<_>>();
        narrate(&GroupedAnalysis::new(&classes).unwrap())
    }

    fn sample() -> Narration {
        narration(&[(10.0, 20.0, 5), (20.0, 30.0, 8), (30.0, 40.0, 3)])
    }

    #[test]
    fn test_general_table_shows_boundaries_and_class_size() {
        let lines = sample().general.lines();
        assert_eq!(lines[0], "Input Data (Class Interval, Frequency):");
        assert!(lines[1].contains("Class Boundaries"));
        assert!(lines[3].starts_with("  10 - 20"));
        assert!(lines[3].contains("9.50 - 20.50"));
        assert!(lines[3].ends_with("11.00"));
        assert_eq!(lines.last().unwrap(), "Total Frequency (N): 16");
    }

    #[test]
    fn test_mean_lists_midpoint_products() {
        let narration = sample();
        let lines = narration.mean.lines();
        assert_eq!(lines[1], "  - (10+20)/2 × 5 = 15.00 × 5 = 75.00");
        assert!(lines.contains(&"   Σ(f × m) = 75.00 + 200.00 + 105.00 = 380.00".to_owned()));
        assert!(lines.contains(&"   x̄ = 380.00 / 16 = 23.75".to_owned()));
        assert_eq!(lines.last().unwrap(), "Mean (Estimated): 23.75");
    }

    #[test]
    fn test_median_substitutes_formula() {
        let narration = sample();
        let lines = narration.median.lines();
        assert!(lines.contains(&"The median class is from 20 to 30.".to_owned()));
        assert!(lines.contains(&"Where L = 20, Cf = 5, f = 8, and h = 10".to_owned()));
        assert!(lines.contains(&"   Median = 20 + ((8 - 5) / 8) * 10 = 23.75".to_owned()));
        assert_eq!(lines.last().unwrap(), "Median (Estimated): 23.75");
    }

    #[test]
    fn test_mode_substitutes_formula() {
        let narration = sample();
        let lines = narration.mode.lines();
        assert!(lines.contains(&"   d1 = f - f(before) = 8 - 5 = 3".to_owned()));
        assert!(lines.contains(&"   d2 = f - f(after) = 8 - 3 = 5".to_owned()));
        assert!(lines.contains(&"   Mode = 20 + (3 / (3 + 5)) * 10 = 23.75".to_owned()));
        assert_eq!(narration.mode.outcome(), Some("23.75"));
    }

    #[test]
    fn test_tied_classes_are_not_interpolated() {
        let narration = narration(&[(10.0, 20.0, 5), (20.0, 30.0, 5), (30.0, 40.0, 1)]);
        let lines = narration.mode.lines();
        assert!(lines.contains(&"  - 10-20".to_owned()));
        assert!(lines.contains(&"  - 20-30".to_owned()));
        assert_eq!(
            narration.mode.outcome(),
            Some("Multimodal (Modal Classes: 10-20, 20-30)")
        );
    }

    #[test]
    fn test_overlaps_are_noted_in_general_section() {
        let narration = narration(&[(0.0, 10.0, 1), (5.0, 15.0, 2)]);
        let lines = narration.general.lines();
        assert_eq!(
            lines.last().unwrap(),
            "Note: class 5-15 overlaps the preceding class 0-10; statistics treat the classes as given."
        );
    }

    #[test]
    fn test_dispersion_sections_are_estimated() {
        let narration = sample();
        assert_eq!(
            narration.stddev.title,
            "Standard Deviation and Variance (Estimated Population)"
        );
        let lines = narration.stddev.lines();
        assert!(lines.iter().any(|l| l.starts_with("Variance (Estimated Pop.): ")));
        assert!(
            lines
                .last()
                .unwrap()
                .starts_with("Standard Deviation (Estimated Pop.): ")
        );
        assert!(
            narration
                .mad
                .lines()
                .last()
                .unwrap()
                .starts_with("MAD (Estimated): ")
        );
    }
}
