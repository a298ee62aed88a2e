use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use twenty48_engine::Direction;

/// Minimum weighted drag distance, in terminal columns, for a swipe.
const MIN_SWIPE_DISTANCE: i32 = 3;

/// A terminal row is roughly twice as tall as a column is wide.
const ROW_WEIGHT: i32 = 2;

/// A normalized player command, whatever input source produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shift(Direction),
    Restart,
    Undo,
    Quit,
}

impl Command {
    /// Maps a pressed key to a command; unbound keys map to `None`.
    #[must_use]
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let command = match code {
            KeyCode::Up | KeyCode::Char('w') => Self::Shift(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => Self::Shift(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') => Self::Shift(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => Self::Shift(Direction::Right),
            KeyCode::Char('r') => Self::Restart,
            KeyCode::Char('z' | 'u') => Self::Undo,
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Turns left-button press/release pairs into swipe directions.
///
/// Vertical displacement is weighted by [`ROW_WEIGHT`] so both axes are
/// compared in roughly equal visual units. The larger weighted axis picks
/// the direction pair, the sign picks the direction; equal magnitudes
/// resolve vertical. A drag below [`MIN_SWIPE_DISTANCE`] is no gesture.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    press: Option<(i32, i32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one mouse event; returns a direction when a swipe completes.
    pub fn track(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some((i32::from(event.column), i32::from(event.row)));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x, y) = self.press.take()?;
                let dx = i32::from(event.column) - x;
                let dy = (i32::from(event.row) - y) * ROW_WEIGHT;
                if dx.abs().max(dy.abs()) < MIN_SWIPE_DISTANCE {
                    return None;
                }
                let direction = if dx.abs() > dy.abs() {
                    if dx > 0 {
                        Direction::Right
                    } else {
                        Direction::Left
                    }
                } else if dy > 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
                Some(direction)
            }
            _ => None,
        }
    }
}
