//! Dataset rows given on the command line.
//!
//! Raw values may be separated by whitespace (one per argument) or commas
//! within an argument. Distribution rows use `:` between fields:
//! `VALUE:FREQ` for ungrouped pairs and `LOWER:UPPER:FREQ` for classes.

use freqstat_stats::{ClassInterval, ValueFrequency};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum RowParseError {
    #[display("expected {expected} fields separated by ':', found {found}")]
    FieldCount { expected: usize, found: usize },
    #[display("not a number: {text:?}")]
    InvalidNumber { text: String },
    #[display("frequency must not be negative: {text}")]
    NegativeFrequency { text: String },
    #[display("frequency must be a whole number: {text:?}")]
    InvalidFrequency { text: String },
}

/// Rows that parsed, and the arguments that were discarded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Parsed<T> {
    pub rows: Vec<T>,
    pub rejected: Vec<(String, RowParseError)>,
}

impl<T> Parsed<T> {
    /// Reports discarded arguments on stderr.
    pub(crate) fn report_rejected(&self, row_kind: &str) {
        if self.rejected.is_empty() {
            return;
        }
        eprintln!(
            "Discarded {} {row_kind} row(s) that could not be used:",
            self.rejected.len()
        );
        for (text, err) in &self.rejected {
            eprintln!("  {text:?}: {err}");
        }
    }
}

/// Collects the numbers of every argument, ignoring entries that do not parse.
pub(crate) fn parse_raw<S>(args: &[S]) -> Vec<f64>
where
    S: AsRef<str>,
{
    args.iter()
        .flat_map(|arg| arg.as_ref().split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f64>().ok())
        .collect()
}

pub(crate) fn parse_rows<S, T, F>(args: &[S], parse: F) -> Parsed<T>
where
    S: AsRef<str>,
    F: Fn(&str) -> Result<T, RowParseError>,
{
    let mut rows = vec![];
    let mut rejected = vec![];
    for arg in args {
        let arg = arg.as_ref();
        match parse(arg) {
            Ok(row) => rows.push(row),
            Err(err) => rejected.push((arg.to_owned(), err)),
        }
    }
    Parsed { rows, rejected }
}

/// Parses a `VALUE:FREQ` pair.
pub(crate) fn parse_pair(text: &str) -> Result<ValueFrequency, RowParseError> {
    let [value, frequency] = fields(text)?;
    Ok(ValueFrequency::new(number(value)?, frequency_of(frequency)?))
}

/// Parses a `LOWER:UPPER:FREQ` class.
///
/// Bounds are not checked against each other here; the statistics engine
/// rejects a class whose lower bound is not below its upper bound.
pub(crate) fn parse_class(text: &str) -> Result<ClassInterval, RowParseError> {
    let [lower, upper, frequency] = fields(text)?;
    Ok(ClassInterval::new(
        number(lower)?,
        number(upper)?,
        frequency_of(frequency)?,
    ))
}

fn fields<const N: usize>(text: &str) -> Result<[&str; N], RowParseError> {
    let fields = text.split(':').map(str::trim).collect::<Vec<_>>();
    let found = fields.len();
    fields.try_into().map_err(|_| RowParseError::FieldCount {
        expected: N,
        found,
    })
}

fn number(text: &str) -> Result<f64, RowParseError> {
    text.parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| RowParseError::InvalidNumber {
            text: text.to_owned(),
        })
}

fn frequency_of(text: &str) -> Result<u64, RowParseError> {
    match text.parse::<i64>() {
        Ok(n) if n < 0 => Err(RowParseError::NegativeFrequency {
            text: text.to_owned(),
        }),
        Ok(n) => Ok(n.unsigned_abs()),
        Err(_) => Err(RowParseError::InvalidFrequency {
            text: text.to_owned(),
        }),
    }
}
