use freqstat_stats::{Dataset, RawSample};

use crate::{
    input,
    report::{self, OutputArg},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RawArg {
    /// Observations, separated by spaces or commas (e.g. "5, 3, 8")
    #[arg(value_name = "VALUES", allow_hyphen_values = true)]
    pub(super) values: Vec<String>,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &RawArg) -> anyhow::Result<()> {
    let RawArg { values, output } = arg;
    let values = input::parse_raw(values);
    report::run(&Dataset::from(RawSample { values }), output)
}
