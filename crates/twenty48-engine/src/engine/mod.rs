//! Session orchestration on top of the core board transforms.
//!
//! - [`GameSession`] - One interactive game: move handling, scoring,
//!   win/loss detection, one-step undo, best-score tracking
//! - [`SessionState`] - Player-visible phase (playing / won / game over)
//! - [`TileSpawner`] - Random tile placement with an injectable seed
//! - [`SpawnSeed`] - Seed for deterministic spawning
//!
//! # Game Flow
//!
//! 1. Initialize a [`GameSession`] (two tiles spawn into an empty board)
//! 2. The player issues direction commands via [`GameSession::apply_move`]
//! 3. A move that changes nothing is silently ignored
//! 4. An accepted move spawns one new tile, updates the score, and
//!    re-evaluates the won / game-over flags
//! 5. `restart` begins a fresh board keeping the best score; `undo`
//!    rewinds exactly one accepted move
//!
//! # Example
//!
//! ```
//! use twenty48_engine::{Direction, GameSession};
//!
//! let mut session = GameSession::new();
//! if session.apply_move(Direction::Left) {
//!     println!("score: {}", session.score());
//! }
//! ```

pub use self::{game_session::*, spawn::*};

mod game_session;
mod spawn;
