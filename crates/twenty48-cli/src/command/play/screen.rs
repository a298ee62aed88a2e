use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};
use twenty48_engine::{GameSession, SessionState};

use crate::{
    input::{Command, SwipeTracker},
    store::BestScoreStore,
    tui::App,
    ui::widgets::SessionDisplay,
};

#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    swipe: SwipeTracker,
    store: BestScoreStore,
    persisted_best: u32,
    is_exiting: bool,
}

impl GameScreen {
    pub fn new(session: GameSession, store: BestScoreStore) -> Self {
        let persisted_best = session.best();
        Self {
            session,
            swipe: SwipeTracker::new(),
            store,
            persisted_best,
            is_exiting: false,
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Shift(direction) => {
                if self.session.apply_move(direction) {
                    self.persist_best();
                }
            }
            Command::Restart => self.session.restart(),
            Command::Undo => _ = self.session.undo(),
            Command::Quit => self.is_exiting = true,
        }
    }

    /// Fire-and-forget: a failed write must not interrupt play.
    fn persist_best(&mut self) {
        if self.session.best() > self.persisted_best {
            self.persisted_best = self.session.best();
            _ = self.store.save(self.persisted_best);
        }
    }
}

impl App for GameScreen {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_event()
            && key.is_press()
            && let Some(command) = Command::from_key(key.code)
        {
            self.apply(command);
        }
        if let Event::Mouse(mouse) = event
            && let Some(direction) = self.swipe.track(*mouse)
        {
            self.apply(Command::Shift(direction));
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session);
        let help_text = match self.session.session_state() {
            SessionState::Playing if self.session.can_undo() => {
                "← ↑ ↓ → / WASD (Move) | Swipe (Move) | Z (Undo) | R (Restart) | Q (Quit)"
            }
            SessionState::Playing => {
                "← ↑ ↓ → / WASD (Move) | Swipe (Move) | R (Restart) | Q (Quit)"
            }
            SessionState::Won | SessionState::GameOver => "Z (Undo) | R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
