use freqstat_stats::{Dataset, UngroupedDistribution};

use crate::{
    input,
    report::{self, OutputArg},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct UngroupedArg {
    /// Value/frequency pairs (e.g. 10:3)
    #[arg(value_name = "VALUE:FREQ", allow_hyphen_values = true)]
    pub(super) pairs: Vec<String>,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &UngroupedArg) -> anyhow::Result<()> {
    let UngroupedArg { pairs, output } = arg;
    let parsed = input::parse_rows(pairs, input::parse_pair);
    parsed.report_rejected("value-frequency");
    report::run(
        &Dataset::from(UngroupedDistribution { pairs: parsed.rows }),
        output,
    )
}
