use crossterm::event::{KeyCode, KeyEvent};
use freqstat_narration::{Narration, Section};
use freqstat_stats::{Statistic, Summary};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Spacing},
    style::{Color, Modifier, Style},
    symbols::merge::MergeStrategy,
    text::{Line, Text},
    widgets::{Block, Paragraph, Tabs},
};

use crate::view::app::Screen;

const PANEL_COUNT: usize = Statistic::ALL.len();
const PAGE_LINES: u16 = 10;
const SUMMARY_WIDTH: u16 = 48;

/// Summary and general data on top, one statistic derivation below.
#[derive(Debug)]
pub struct StepsScreen {
    summary: Summary,
    narration: Narration,
    selected_panel: usize,
    scroll: u16,
}

impl StepsScreen {
    #[must_use]
    pub fn new(summary: Summary, narration: Narration) -> Self {
        Self {
            summary,
            narration,
            selected_panel: 0,
            scroll: 0,
        }
    }

    pub(crate) fn selected_statistic(&self) -> Statistic {
        Statistic::ALL[self.selected_panel]
    }

    fn selected_section(&self) -> &Section {
        self.narration.section(self.selected_statistic())
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.selected_section().lines().len();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn draw(&self, frame: &mut Frame) {
        // Layout: main area + help line at bottom
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let general_lines = self.narration.general.lines();
        let top_height = u16::try_from(general_lines.len())
            .unwrap_or(u16::MAX)
            .max(6)
            .saturating_add(2)
            .min(main_area.height / 3);

        let [top_area, tabs_area, section_area] = Layout::vertical([
            Constraint::Length(top_height),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .spacing(Spacing::Overlap(1))
        .areas(main_area);

        let [summary_pane, general_pane] =
            Layout::horizontal([Constraint::Length(SUMMARY_WIDTH), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(top_area);

        let summary = Paragraph::new(self.summary.to_string()).block(
            Block::bordered()
                .title("Summary")
                .merge_borders(MergeStrategy::Exact),
        );

        let general = Paragraph::new(general_lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .block(
                Block::bordered()
                    .title(self.narration.general.title.as_str())
                    .merge_borders(MergeStrategy::Exact),
            );

        let tabs = Tabs::new(
            Statistic::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| format!("{}: {}", i + 1, s.name())),
        )
        .select(self.selected_panel)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::bordered()
                .title("Statistics")
                .merge_borders(MergeStrategy::Exact),
        );

        let section = self.selected_section();
        let steps = Paragraph::new(section.lines().into_iter().map(Line::from).collect::<Vec<_>>())
            .scroll((self.scroll, 0))
            .block(
                Block::bordered()
                    .title(section.title.as_str())
                    .merge_borders(MergeStrategy::Exact),
            );

        frame.render_widget(summary, summary_pane);
        frame.render_widget(general, general_pane);
        frame.render_widget(tabs, tabs_area);
        frame.render_widget(steps, section_area);

        let help_text = Text::from(
            "←/→/Tab or 1-5: Statistic | ↑/↓ PgUp/PgDn: Scroll | q/Esc: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();
        frame.render_widget(help_text, help_area);
    }

    pub fn handle_input(&mut self, key_event: KeyEvent, screen: &mut Screen) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => *screen = Screen::Exiting,
            KeyCode::Right | KeyCode::Tab => {
                self.select_panel((self.selected_panel + 1) % PANEL_COUNT);
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.select_panel((self.selected_panel + PANEL_COUNT - 1) % PANEL_COUNT);
            }
            KeyCode::Char(c) => {
                if let Some(panel) = panel_of_digit(c) {
                    self.select_panel(panel);
                }
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_LINES),
            KeyCode::PageDown => self.scroll_down(PAGE_LINES),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            _ => {}
        }
    }

    fn select_panel(&mut self, panel: usize) {
        if panel != self.selected_panel {
            self.selected_panel = panel;
            self.scroll = 0;
        }
    }

    fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }
}

/// Maps the keys `1`..`5` to panel indices.
fn panel_of_digit(c: char) -> Option<usize> {
    let digit = usize::try_from(c.to_digit(10)?).ok()?;
    (1..=PANEL_COUNT).contains(&digit).then(|| digit - 1)
}
