use rand::Rng as _;

use crate::{
    core::{Board, Direction, MoveOutcome},
    engine::spawn::{SpawnSeed, TileSpawner},
};

/// Tile value that flips a session into the won state.
pub const WIN_TILE: u32 = 2048;

/// Player-visible phase of a session.
///
/// Both terminal phases are sticky: further move commands are ignored
/// until `restart` or `undo`. When a winning move also locks the board,
/// `GameOver` takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Won,
    GameOver,
}

/// The one retained pre-move state, overwritten on every accepted move.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    score: u32,
}

/// One interactive game: a board plus score bookkeeping and one-step undo.
///
/// The session owns the board exclusively and replaces it wholesale on
/// every accepted move; callers only ever observe it through `board()`.
/// `best` is a high-water mark over `score` that survives restarts (and,
/// through the presentation shell, process restarts).
///
/// # Example
///
/// ```
/// use twenty48_engine::{Direction, GameSession};
///
/// let mut session = GameSession::new();
/// session.apply_move(Direction::Left);
/// session.restart();
/// assert_eq!(session.score(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    score: u32,
    best: u32,
    won: bool,
    over: bool,
    undo_slot: Option<Snapshot>,
    spawner: TileSpawner,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with a random spawn seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but fully deterministic for the given seed.
    ///
    /// The starting board holds exactly two spawned tiles.
    #[must_use]
    pub fn with_seed(seed: SpawnSeed) -> Self {
        let mut spawner = TileSpawner::with_seed(seed);
        let board = Self::starting_board(&mut spawner);
        Self {
            board,
            score: 0,
            best: 0,
            won: false,
            over: false,
            undo_slot: None,
            spawner,
        }
    }

    /// Injects a previously persisted best score.
    #[must_use]
    pub fn with_best(mut self, best: u32) -> Self {
        self.best = best.max(self.score);
        self
    }

    fn starting_board(spawner: &mut TileSpawner) -> Board {
        let board = spawner.spawn(Board::EMPTY);
        spawner.spawn(board)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Sum of all merge gains since the last restart.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// High-water mark of `score`; never below the current score.
    #[must_use]
    pub fn best(&self) -> u32 {
        self.best
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        if self.over {
            SessionState::GameOver
        } else if self.won {
            SessionState::Won
        } else {
            SessionState::Playing
        }
    }

    /// Whether an accepted move is available to rewind.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_slot.is_some()
    }

    /// Applies one direction command; returns whether it was accepted.
    ///
    /// Ignored outside the playing state. A move that changes no cell is a
    /// complete no-op: no spawn, no score change, no snapshot update.
    /// An accepted move snapshots the pre-move state for undo, spawns one
    /// random tile, adds the merge gain to the score, raises `best`, and
    /// re-evaluates the won / game-over flags on the post-spawn board.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if !self.session_state().is_playing() {
            return false;
        }
        let MoveOutcome {
            board,
            moved,
            score_gain,
        } = self.board.shifted(direction);
        if !moved {
            return false;
        }
        self.undo_slot = Some(Snapshot {
            board: self.board,
            score: self.score,
        });
        self.board = self.spawner.spawn(board);
        self.score += score_gain;
        self.best = self.best.max(self.score);
        self.won = self.board.max_tile() >= WIN_TILE;
        self.over = !self.board.has_moves();
        true
    }

    /// Begins a fresh game, preserving only the best score.
    pub fn restart(&mut self) {
        self.board = Self::starting_board(&mut self.spawner);
        self.score = 0;
        self.won = false;
        self.over = false;
        self.undo_slot = None;
    }

    /// Rewinds exactly one accepted move; returns whether anything changed.
    ///
    /// Restores the snapshotted board and score, clears both terminal
    /// flags (the snapshot is by definition a pre-terminal state), and
    /// consumes the snapshot, so undo never rewinds twice in a row.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_slot.take() else {
            return false;
        };
        self.board = snapshot.board;
        self.score = snapshot.score;
        self.won = false;
        self.over = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: u128) -> SpawnSeed {
        format!("{value:032x}").parse().unwrap()
    }

    fn tile_count(board: &Board) -> usize {
        crate::core::CELL_COUNT - board.empty_cells().len()
    }

    /// A session over a handpicked board, bypassing the initial spawns.
    fn session_with_board(board: Board, seed_value: u128) -> GameSession {
        GameSession {
            board,
            score: 0,
            best: 0,
            won: false,
            over: false,
            undo_slot: None,
            spawner: TileSpawner::with_seed(seed(seed_value)),
        }
    }

    #[test]
    fn test_new_session_starts_with_two_tiles() {
        let session = GameSession::with_seed(seed(99));
        assert_eq!(tile_count(session.board()), 2);
        assert_eq!(session.score(), 0);
        assert!(session.session_state().is_playing());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_accepted_move_merges_scores_and_spawns() {
        let board = Board::from_rows([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = session_with_board(board, 5);
        assert!(session.apply_move(Direction::Left));
        assert_eq!(session.board().tile(0, 0), 4);
        assert_eq!(session.score(), 4);
        assert_eq!(session.best(), 4);
        // The merged tile plus exactly one spawned tile.
        assert_eq!(tile_count(session.board()), 2);
        assert!(session.can_undo());
    }

    #[test]
    fn test_rejected_move_has_no_side_effects() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [8, 0, 0, 0],
            [16, 0, 0, 0],
        ]);
        let mut session = session_with_board(board, 11);
        assert!(!session.apply_move(Direction::Left));
        assert_eq!(*session.board(), board);
        assert_eq!(session.score(), 0);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_move_ignored_once_won() {
        let board = Board::from_rows([
            [1024, 1024, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = session_with_board(board, 21);
        assert!(session.apply_move(Direction::Left));
        assert_eq!(session.board().tile(0, 0), 2048);
        assert_eq!(session.score(), 2048);
        assert!(session.session_state().is_won());

        let frozen = *session.board();
        assert!(!session.apply_move(Direction::Down));
        assert_eq!(*session.board(), frozen);
    }

    #[test]
    fn test_game_over_when_board_locks() {
        // One move from a locked board: the lone empty cell ends up
        // surrounded by 64s, so neither a spawned 2 nor 4 can pair.
        let board = Board::from_rows([
            [32, 64, 32, 64],
            [64, 32, 64, 32],
            [32, 64, 32, 64],
            [0, 64, 32, 64],
        ]);
        let mut session = session_with_board(board, 31);
        assert!(session.apply_move(Direction::Left));
        assert!(session.board().empty_cells().is_empty());
        assert!(!session.board().has_moves());
        assert!(session.session_state().is_game_over());

        let frozen = *session.board();
        assert!(!session.apply_move(Direction::Up));
        assert_eq!(*session.board(), frozen);
    }

    #[test]
    fn test_undo_restores_pre_move_state_exactly() {
        let board = Board::from_rows([
            [2, 2, 4, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = session_with_board(board, 41);
        assert!(session.apply_move(Direction::Left));
        let best_after_move = session.best();

        assert!(session.undo());
        assert_eq!(*session.board(), board);
        assert_eq!(session.score(), 0);
        assert!(session.session_state().is_playing());
        // Undo rewinds the board, not the high-water mark.
        assert_eq!(session.best(), best_after_move);
    }

    #[test]
    fn test_undo_is_single_level() {
        let board = Board::from_rows([
            [2, 2, 0, 0],
            [4, 4, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = session_with_board(board, 51);
        assert!(session.apply_move(Direction::Left));
        assert!(session.undo());
        assert!(!session.can_undo());
        assert!(!session.undo());
    }

    #[test]
    fn test_undo_without_history_is_a_no_op() {
        let mut session = GameSession::with_seed(seed(61));
        let board = *session.board();
        assert!(!session.undo());
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_undo_clears_terminal_flags() {
        let board = Board::from_rows([
            [32, 64, 32, 64],
            [64, 32, 64, 32],
            [32, 64, 32, 64],
            [0, 64, 32, 64],
        ]);
        let mut session = session_with_board(board, 71);
        assert!(session.apply_move(Direction::Left));
        assert!(session.session_state().is_game_over());

        assert!(session.undo());
        assert!(session.session_state().is_playing());
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_restart_preserves_best_and_resets_the_rest() {
        let board = Board::from_rows([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = session_with_board(board, 81);
        assert!(session.apply_move(Direction::Left));
        let best = session.best();
        assert!(best > 0);

        session.restart();
        assert_eq!(session.score(), 0);
        assert_eq!(session.best(), best);
        assert_eq!(tile_count(session.board()), 2);
        assert!(session.session_state().is_playing());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_with_best_never_drops_below_score() {
        let session = GameSession::with_seed(seed(91)).with_best(1234);
        assert_eq!(session.best(), 1234);
        assert!(session.best() >= session.score());
    }

    #[test]
    fn test_best_tracks_score_across_moves() {
        let mut session = GameSession::with_seed(seed(101));
        for _ in 0..200 {
            for direction in Direction::ALL {
                session.apply_move(direction);
                assert!(session.best() >= session.score());
            }
            if !session.session_state().is_playing() {
                break;
            }
        }
    }

    #[test]
    fn test_move_then_spawn_end_to_end() {
        let board = Board::from_rows([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = session_with_board(board, 111);
        assert!(session.apply_move(Direction::Left));

        // The merge landed at the leading edge...
        assert_eq!(session.board().tile(0, 0), 4);
        assert_eq!(session.score(), 4);
        // ...and one tile spawned somewhere in the 15 remaining cells.
        let spawned: Vec<_> = session
            .board()
            .rows()
            .enumerate()
            .flat_map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(|&(_, &value)| value != 0)
                    .map(move |(col, &value)| ((row, col), value))
            })
            .filter(|&(pos, _)| pos != (0, 0))
            .collect();
        assert_eq!(spawned.len(), 1);
        let (_, value) = spawned[0];
        assert!(value == 2 || value == 4);
    }
}
