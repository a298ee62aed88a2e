use crossterm::event::Event;
use ratatui::Frame;

/// Trait for TUI applications.
///
/// Applications executed by `Tui::run()` must implement this trait. The
/// game advances only on player input, so there is no tick callback: every
/// state change happens inside `handle_event`.
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen (called after anything that may change state).
    fn draw(&self, frame: &mut Frame);
}
