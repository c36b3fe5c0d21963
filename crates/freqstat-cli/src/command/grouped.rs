use freqstat_stats::{Dataset, GroupedDistribution};

use crate::{
    input,
    report::{self, OutputArg},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GroupedArg {
    /// Class intervals with their frequencies (e.g. 10:20:5)
    #[arg(value_name = "LOWER:UPPER:FREQ", allow_hyphen_values = true)]
    pub(super) classes: Vec<String>,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &GroupedArg) -> anyhow::Result<()> {
    let GroupedArg { classes, output } = arg;
    let parsed = input::parse_rows(classes, input::parse_class);
    parsed.report_rejected("class interval");
    report::run(
        &Dataset::from(GroupedDistribution {
            classes: parsed.rows,
        }),
        output,
    )
}
