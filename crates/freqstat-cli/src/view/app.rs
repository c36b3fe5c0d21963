use crossterm::event::{self, Event, KeyEventKind};
use freqstat_narration::Narration;
use freqstat_stats::Summary;
use ratatui::{DefaultTerminal, Frame};

use super::screens::steps::StepsScreen;

#[derive(Debug)]
pub struct App {
    screen: Screen,
    steps_screen: StepsScreen,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Steps,
    Exiting,
}

impl App {
    pub fn new(summary: Summary, narration: Narration) -> Self {
        Self {
            screen: Screen::default(),
            steps_screen: StepsScreen::new(summary, narration),
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while self.screen != Screen::Exiting {
            terminal.draw(|f| self.draw(f))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Steps => self.steps_screen.draw(frame),
            Screen::Exiting => { /* Nothing to draw */ }
        }
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: event::KeyEvent) {
        match self.screen {
            Screen::Steps => {
                self.steps_screen.handle_input(key_event, &mut self.screen);
            }
            Screen::Exiting => { /* No input handling when exiting */ }
        }
    }
}
