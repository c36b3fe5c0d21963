use std::fmt;

use freqstat_stats::Statistic;
use serde::Serialize;

use crate::table::Table;

/// One step of a derivation.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// A numbered instruction ("Sum all the numbers").
    Instruction { text: String },
    /// A formula, optionally named ("Formula (Variance): σ² = ...").
    Formula { name: Option<String>, expression: String },
    /// A line of arithmetic with the numbers substituted.
    Calculation { text: String },
    /// An unnumbered remark.
    Note { text: String },
    List { title: Option<String>, items: Vec<String> },
    Table { table: Table },
    /// A labelled value. The last result of a section is its outcome.
    Result { label: String, value: String },
}

/// The derivation of one statistic (or the general data overview).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub steps: Vec<Step>,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: vec![],
        }
    }

    /// Returns whether the section has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The value of the last [`Step::Result`], if any.
    #[must_use]
    pub fn outcome(&self) -> Option<&str> {
        self.steps.iter().rev().find_map(|step| match step {
            Step::Result { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn instruction(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Step::Instruction { text: text.into() })
    }

    pub fn formula(&mut self, expression: impl Into<String>) -> &mut Self {
        self.push(Step::Formula {
            name: None,
            expression: expression.into(),
        })
    }

    pub fn named_formula(
        &mut self,
        name: impl Into<String>,
        expression: impl Into<String>,
    ) -> &mut Self {
        self.push(Step::Formula {
            name: Some(name.into()),
            expression: expression.into(),
        })
    }

    pub fn calculation(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Step::Calculation { text: text.into() })
    }

    pub fn note(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Step::Note { text: text.into() })
    }

    pub fn list<I>(&mut self, title: Option<&str>, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push(Step::List {
            title: title.map(str::to_owned),
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    pub fn table(&mut self, table: Table) -> &mut Self {
        self.push(Step::Table { table })
    }

    pub fn result(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(Step::Result {
            label: label.into(),
            value: value.into(),
        })
    }

    fn push(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// Renders the steps as plain-text lines, without the title.
    ///
    /// Instructions are numbered from 1; formulas and calculations are
    /// indented under the instruction they belong to.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![];
        let mut number = 0;
        for step in &self.steps {
            match step {
                Step::Instruction { text } => {
                    number += 1;
                    lines.push(format!("{number}. {text}"));
                }
                Step::Formula {
                    name: Some(name),
                    expression,
                } => lines.push(format!("   Formula ({name}): {expression}")),
                Step::Formula {
                    name: None,
                    expression,
                } => lines.push(format!("   Formula: {expression}")),
                Step::Calculation { text } => lines.push(format!("   {text}")),
                Step::Note { text } => lines.push(text.clone()),
                Step::List { title, items } => {
                    if let Some(title) = title {
                        lines.push(format!("{title}:"));
                    }
                    lines.extend(items.iter().map(|item| format!("  - {item}")));
                }
                Step::Table { table } => lines.extend(table.lines()),
                Step::Result { label, value } => lines.push(format!("{label}: {value}")),
            }
        }
        lines
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Step-by-step explanation of every statistic of one dataset.
///
/// `general` describes the data itself; the other five sections each end
/// with a [`Step::Result`] whose value is exactly the text the formula engine
/// reports for that statistic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Narration {
    pub general: Section,
    pub mean: Section,
    pub median: Section,
    pub mode: Section,
    pub mad: Section,
    pub stddev: Section,
}

impl Narration {
    /// A narration for a request that could not be analyzed.
    ///
    /// `general` carries `message`; the five statistic sections are empty.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        let mut general = Section::new("Input Data");
        general.note(message);
        Self {
            general,
            ..Self::default()
        }
    }

    /// Returns whether every statistic section is empty.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        Statistic::ALL.iter().all(|&s| self.section(s).is_empty())
    }

    #[must_use]
    pub fn section(&self, statistic: Statistic) -> &Section {
        match statistic {
            Statistic::Mean => &self.mean,
            Statistic::Median => &self.median,
            Statistic::Mode => &self.mode,
            Statistic::Mad => &self.mad,
            Statistic::StdDev => &self.stddev,
        }
    }

    /// The five statistic sections, in display order.
    pub fn sections(&self) -> impl Iterator<Item = (Statistic, &Section)> {
        Statistic::ALL.into_iter().map(|s| (s, self.section(s)))
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.general)?;
        for (_, section) in self.sections().filter(|(_, s)| !s.is_empty()) {
            writeln!(f)?;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
