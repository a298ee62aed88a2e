use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the
/// [`App`] trait. Mouse capture stays enabled for the whole run so swipe
/// gestures reach the application.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    /// Creates a new Tui.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the application.
    ///
    /// Runs the event loop until `app.should_exit()` returns true:
    /// - `Event::Render`: calls `app.draw()`
    /// - `Event::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            execute!(io::stdout(), EnableMouseCapture)?;
            let result: anyhow::Result<()> = (|| {
                while !app.should_exit() {
                    match self.events.next()? {
                        TuiEvent::Render => {
                            terminal.draw(|f| app.draw(f))?;
                        }
                        TuiEvent::Crossterm(event) => {
                            app.handle_event(&event);
                        }
                    }
                }
                Ok(())
            })();
            execute!(io::stdout(), DisableMouseCapture)?;
            result
        })
    }
}
