use freqstat_narration::Narration;
use freqstat_stats::Summary;

use self::app::App;

mod app;
mod screens;

pub(crate) fn run_tui(summary: &Summary, narration: &Narration) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let app_result = App::new(summary.clone(), narration.clone()).run(&mut terminal);
    ratatui::restore();
    app_result
}
