use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// There is no tick clock: the loop blocks on terminal events and emits a
/// render after anything that may have changed application state.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop`. The first event is always a render.
    pub(super) fn new() -> Self {
        Self { dirty: true }
    }

    /// Returns the next event.
    ///
    /// Emits `Render` while the screen is dirty, otherwise blocks until a
    /// crossterm event arrives and marks the screen dirty again.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}
