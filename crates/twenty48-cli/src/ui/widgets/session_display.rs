use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Widget},
};
use twenty48_engine::{GameSession, SessionState};

use crate::ui::widgets::{BoardDisplay, StatDisplay, color, style};

/// Renders one whole game: title, score panels, board, and the terminal
/// state popup. The border color tracks the session state.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = match self.session.session_state() {
            SessionState::Playing => color::WHITE,
            SessionState::Won => color::LIME,
            SessionState::GameOver => color::RED,
        };

        let game_board = BoardDisplay::new(self.session.board()).block(
            Block::bordered()
                .border_style(border_color)
                .style(style::DEFAULT),
        );
        let score_panel = StatDisplay::new("SCORE", self.session.score()).block(
            Block::bordered()
                .border_style(border_color)
                .style(style::DEFAULT),
        );
        let best_panel = StatDisplay::new("BEST", self.session.best()).block(
            Block::bordered()
                .border_style(border_color)
                .style(style::DEFAULT),
        );

        let [header_area, board_area] = Layout::vertical([
            Constraint::Length(score_panel.height()),
            Constraint::Length(game_board.height()),
        ])
        .flex(Flex::Center)
        .areas(area);

        // Header and board share one centered column.
        let column =
            Layout::horizontal([Constraint::Length(game_board.width())]).flex(Flex::Center);
        let [header_column] = header_area.layout::<1>(&column);
        let [board_column] = board_area.layout::<1>(&column);

        let [title_area, score_area, best_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(score_panel.width()),
            Constraint::Length(best_panel.width()),
        ])
        .spacing(1)
        .areas(header_column);

        Line::styled("2048", style::TITLE)
            .left_aligned()
            .render(title_area.centered_vertically(Constraint::Length(1)), buf);
        let game_board_width = game_board.width();
        score_panel.render(score_area, buf);
        best_panel.render(best_area, buf);
        game_board.render(board_column, buf);

        let popup = match self.session.session_state() {
            SessionState::Playing => None,
            SessionState::Won => Some(("YOU WIN!!", Style::new().fg(color::INK).bg(color::LIME))),
            SessionState::GameOver => {
                Some(("GAME OVER!!", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = board_column.centered(
                Constraint::Length(game_board_width),
                Constraint::Length(3),
            );
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
