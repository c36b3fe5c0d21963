use clap::{Parser, Subcommand};

use self::{file::FileArg, grouped::GroupedArg, raw::RawArg, ungrouped::UngroupedArg};

mod file;
mod grouped;
mod raw;
mod ungrouped;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Kind of dataset to describe
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Describe individual observations
    Raw(#[clap(flatten)] RawArg),
    /// Describe a frequency distribution of VALUE:FREQ pairs
    Ungrouped(#[clap(flatten)] UngroupedArg),
    /// Estimate statistics of LOWER:UPPER:FREQ class intervals
    Grouped(#[clap(flatten)] GroupedArg),
    /// Describe a dataset stored in a JSON file
    File(#[clap(flatten)] FileArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Raw(arg) => raw::run(&arg)?,
        Mode::Ungrouped(arg) => ungrouped::run(&arg)?,
        Mode::Grouped(arg) => grouped::run(&arg)?,
        Mode::File(arg) => file::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Mode {
        CommandArgs::try_parse_from(args).unwrap().mode
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(CommandArgs::try_parse_from(["freqstat"]).is_err());
    }

    #[test]
    fn test_raw_values() {
        let Mode::Raw(arg) = parse(&["freqstat", "raw", "5, 3, 8", "3", "9"]) else {
            panic!("expected raw mode");
        };
        assert_eq!(arg.values, ["5, 3, 8", "3", "9"]);
    }

    #[test]
    fn test_negative_values_are_not_options() {
        let Mode::Ungrouped(arg) = parse(&["freqstat", "ungrouped", "--steps", "-2:1", "3:4"])
        else {
            panic!("expected ungrouped mode");
        };
        assert_eq!(arg.pairs, ["-2:1", "3:4"]);
    }

    #[test]
    fn test_output_options() {
        let Mode::Grouped(arg) = parse(&[
            "freqstat",
            "grouped",
            "--format",
            "json",
            "--section",
            "median",
            "--section",
            "stddev",
            "--output",
            "report.json",
            "10:20:5",
        ]) else {
            panic!("expected grouped mode");
        };
        assert_eq!(arg.classes, ["10:20:5"]);
        assert!(format!("{arg:?}").contains("Json"));
        assert!(format!("{arg:?}").contains("[Median, StdDev]"));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(
            CommandArgs::try_parse_from(["freqstat", "raw", "--section", "range", "1"]).is_err()
        );
    }

    #[test]
    fn test_file_mode_takes_a_path() {
        let Mode::File(arg) = parse(&["freqstat", "file", "--view", "data.json"]) else {
            panic!("expected file mode");
        };
        assert_eq!(arg.dataset_file.to_str(), Some("data.json"));
    }
}
