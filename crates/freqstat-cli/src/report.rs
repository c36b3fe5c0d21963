//! Shared output options and the rendering of one evaluated dataset.

use std::path::PathBuf;

use freqstat_narration::{Evaluation, Narration};
use freqstat_stats::{Analysis, Dataset, DatasetKind, Statistic, Summary};
use serde::Serialize;

use crate::{util::Output, view};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct OutputArg {
    /// Print the step-by-step derivation after the summary
    #[arg(long)]
    steps: bool,
    /// Only derive the given statistic: mean, median, mode, mad or stddev
    /// (repeatable, implies --steps)
    #[arg(long = "section", value_name = "STATISTIC")]
    sections: Vec<Statistic>,
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: Format,
    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Browse the derivation in an interactive viewer
    #[arg(long)]
    view: bool,
}

impl OutputArg {
    /// Statistics whose derivation is printed, in display order.
    ///
    /// `None` when only the summary is wanted.
    fn selected_steps(&self) -> Option<Vec<Statistic>> {
        if !self.steps && self.sections.is_empty() {
            return None;
        }
        let selected = Statistic::ALL
            .into_iter()
            .filter(|s| self.sections.is_empty() || self.sections.contains(s))
            .collect();
        Some(selected)
    }
}

/// The JSON form of an evaluation.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    pub kind: DatasetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub narration: &'a Narration,
}

impl<'a> Report<'a> {
    pub(crate) fn new(evaluation: &'a Evaluation) -> Self {
        Self {
            kind: evaluation.kind,
            summary: evaluation.summary.as_ref().ok(),
            error: evaluation.summary.as_ref().err().map(ToString::to_string),
            narration: &evaluation.narration,
        }
    }
}

/// Evaluates `dataset` and writes the result as `arg` asks.
///
/// A rejected dataset is an error once the report (if JSON) has been written.
pub(crate) fn run(dataset: &Dataset, arg: &OutputArg) -> anyhow::Result<()> {
    let analysis = dataset.analyze();
    if let Ok(Analysis::Grouped(grouped)) = &analysis {
        for overlap in &grouped.overlaps {
            eprintln!("Warning: {overlap}");
        }
    }
    let evaluation =
        Evaluation::from_analysis(dataset.kind(), analysis.as_ref().map_err(Clone::clone));

    if arg.view {
        let summary = evaluation.summary.as_ref().map_err(Clone::clone)?;
        return view::run_tui(summary, &evaluation.narration);
    }

    match arg.format {
        Format::Text => {
            if let Ok(summary) = &evaluation.summary {
                let text = render_text(
                    summary,
                    &evaluation.narration,
                    arg.selected_steps().as_deref(),
                );
                Output::save_text(&text, arg.output.clone())?;
            }
        }
        Format::Json => Output::save_json(&Report::new(&evaluation), arg.output.clone())?,
    }

    evaluation.summary?;
    Ok(())
}

/// The summary block, followed by the requested derivations.
pub(crate) fn render_text(
    summary: &Summary,
    narration: &Narration,
    steps: Option<&[Statistic]>,
) -> String {
    let mut text = summary.to_string();
    if let Some(steps) = steps {
        text.push('\n');
        text.push_str(&narration.general.to_string());
        for &statistic in steps {
            text.push('\n');
            text.push_str(&narration.section(statistic).to_string());
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use freqstat_narration::evaluate;
    use freqstat_stats::{ClassInterval, GroupedDistribution, RawSample};

    use super::*;

    fn reference() -> Evaluation {
        evaluate(&Dataset::from(RawSample {
            values: vec![5.0, 3.0, 8.0, 3.0, 9.0],
        }))
    }

    #[test]
    fn test_summary_only_by_default() {
        let evaluation = reference();
        let summary = evaluation.summary.as_ref().unwrap();
        let text = render_text(summary, &evaluation.narration, None);
        assert_eq!(text, summary.to_string());
        assert!(text.starts_with("Mean: 5.60\n"));
    }

    #[test]
    fn test_steps_follow_summary() {
        let evaluation = reference();
        let summary = evaluation.summary.as_ref().unwrap();
        let text = render_text(
            summary,
            &evaluation.narration,
            Some(&[Statistic::Median, Statistic::Mad]),
        );
        assert!(text.contains("\nInput Data\n==========\n"));
        assert!(text.contains("\nMedian\n======\n"));
        assert!(text.contains("\nMean Absolute Deviation (MAD)\n"));
        assert!(!text.contains("Mean (x̄)"));
        assert!(text.ends_with("MAD: 2.32\n"));
    }

    #[test]
    fn test_selected_steps() {
        let arg = OutputArg::default();
        assert_eq!(arg.selected_steps(), None);

        let arg = OutputArg {
            steps: true,
            ..OutputArg::default()
        };
        assert_eq!(arg.selected_steps(), Some(Statistic::ALL.to_vec()));

        let arg = OutputArg {
            sections: vec![Statistic::StdDev, Statistic::Mean, Statistic::StdDev],
            ..OutputArg::default()
        };
        assert_eq!(
            arg.selected_steps(),
            Some(vec![Statistic::Mean, Statistic::StdDev])
        );
    }

    #[test]
    fn test_json_report_of_accepted_dataset() {
        let evaluation = reference();
        let json = serde_json::to_value(Report::new(&evaluation)).unwrap();
        assert_eq!(json["kind"], "raw");
        assert_eq!(json["summary"]["mean"], 5.6);
        assert!(json.get("error").is_none());
        assert_eq!(json["narration"]["general"]["title"], "Input Data");
    }

    #[test]
    fn test_json_report_of_rejected_dataset() {
        let evaluation = evaluate(&Dataset::from(GroupedDistribution {
            classes: vec![ClassInterval::new(10.0, 10.0, 3)],
        }));
        let json = serde_json::to_value(Report::new(&evaluation)).unwrap();
        assert_eq!(json["kind"], "grouped");
        assert!(json.get("summary").is_none());
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid input: Ensure lower bound < upper bound")
        );
        assert_eq!(json["narration"]["mean"]["steps"], serde_json::json!([]));
    }
}
