use std::path::PathBuf;

use freqstat_stats::Dataset;

use crate::{
    report::{self, OutputArg},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct FileArg {
    /// Dataset JSON file path
    pub(super) dataset_file: PathBuf,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &FileArg) -> anyhow::Result<()> {
    let FileArg {
        dataset_file,
        output,
    } = arg;

    eprintln!("Loading dataset from {}...", dataset_file.display());
    let dataset: Dataset = util::read_json_file("dataset", dataset_file)?;
    eprintln!("Loaded {} dataset", dataset.kind());

    report::run(&dataset, output)
}
