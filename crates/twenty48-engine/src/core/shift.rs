use super::{BOARD_SIZE, Board, Direction};

/// Result of applying one directional move to a board.
///
/// Produced and consumed within a single session step; the session decides
/// whether to spawn and score based on `moved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after sliding and merging, before any spawn.
    pub board: Board,
    /// Whether any cell changed position or value.
    pub moved: bool,
    /// Sum of the merged tile values produced by this move.
    pub score_gain: u32,
}

/// Slides one row toward index 0 and merges equal neighbors once.
///
/// Zeros are dropped, surviving values keep their relative order, and each
/// pair of equal adjacent values collapses into one doubled tile whose
/// value is added to the score delta. A tile produced by a merge never
/// merges again in the same pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`
/// (gain 8) and `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]` (gain 4).
#[must_use]
pub fn compact_row(row: [u32; BOARD_SIZE]) -> ([u32; BOARD_SIZE], u32) {
    let mut compacted = [0; BOARD_SIZE];
    let mut score_gain = 0;
    let mut write = 0;
    let mut tiles = row.iter().copied().filter(|&value| value != 0).peekable();
    while let Some(value) = tiles.next() {
        let merged = if tiles.peek() == Some(&value) {
            tiles.next();
            score_gain += value * 2;
            value * 2
        } else {
            value
        };
        compacted[write] = merged;
        write += 1;
    }
    (compacted, score_gain)
}

impl Board {
    /// Applies one move: every row or column slides toward `direction`.
    ///
    /// All four directions reuse the same leftward compaction. The board is
    /// rotated or mirrored so the moving edge becomes the left edge, every
    /// row is compacted, and the exact inverse transform restores the
    /// original orientation. `moved` is a pure cell-value comparison
    /// between input and output, independent of the score delta, so a move
    /// into a wall reports `moved == false` even when nothing could merge.
    #[must_use]
    pub fn shifted(self, direction: Direction) -> MoveOutcome {
        let oriented = match direction {
            Direction::Left => self,
            Direction::Right => self.rows_reversed(),
            Direction::Up => self.rotated_left(),
            Direction::Down => self.rotated_right(),
        };
        let (compacted, score_gain) = oriented.compacted_left();
        let board = match direction {
            Direction::Left => compacted,
            Direction::Right => compacted.rows_reversed(),
            Direction::Up => compacted.rotated_right(),
            Direction::Down => compacted.rotated_left(),
        };
        MoveOutcome {
            board,
            moved: board != self,
            score_gain,
        }
    }

    fn compacted_left(self) -> (Self, u32) {
        let mut board = self;
        let mut score_gain = 0;
        for row in 0..BOARD_SIZE {
            let (compacted, gain) = compact_row(board.row(row));
            board.set_row(row, compacted);
            score_gain += gain;
        }
        (board, score_gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_top_row(row: [u32; BOARD_SIZE]) -> Board {
        let mut board = Board::EMPTY;
        board.set_row(0, row);
        board
    }

    mod row_compaction {
        use super::*;

        #[test]
        fn test_all_zeros_stay_zeros() {
            assert_eq!(compact_row([0, 0, 0, 0]), ([0, 0, 0, 0], 0));
        }

        #[test]
        fn test_slide_without_merge() {
            assert_eq!(compact_row([2, 0, 4, 0]), ([2, 4, 0, 0], 0));
            assert_eq!(compact_row([0, 0, 0, 8]), ([8, 0, 0, 0], 0));
        }

        #[test]
        fn test_single_merge_leaves_odd_tile() {
            assert_eq!(compact_row([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
        }

        #[test]
        fn test_two_independent_merges() {
            assert_eq!(compact_row([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
            assert_eq!(compact_row([4, 4, 8, 8]), ([8, 16, 0, 0], 24));
        }

        #[test]
        fn test_merge_is_not_cascading() {
            // The 4 produced by merging must not swallow the trailing 4.
            assert_eq!(compact_row([2, 2, 4, 0]), ([4, 4, 0, 0], 4));
        }

        #[test]
        fn test_merge_across_gap() {
            assert_eq!(compact_row([2, 0, 0, 2]), ([4, 0, 0, 0], 4));
        }

        #[test]
        fn test_unequal_neighbors_do_not_merge() {
            assert_eq!(compact_row([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
        }
    }

    mod directional_moves {
        use super::*;

        #[test]
        fn test_shift_left_compacts_rows() {
            let outcome = board_with_top_row([2, 2, 2, 0]).shifted(Direction::Left);
            assert!(outcome.moved);
            assert_eq!(outcome.board.row(0), [4, 2, 0, 0]);
            assert_eq!(outcome.score_gain, 4);
        }

        #[test]
        fn test_shift_right_mirrors_the_rule() {
            let outcome = board_with_top_row([0, 2, 2, 2]).shifted(Direction::Right);
            assert!(outcome.moved);
            assert_eq!(outcome.board.row(0), [0, 0, 2, 4]);
            assert_eq!(outcome.score_gain, 4);
        }

        #[test]
        fn test_shift_up_compacts_columns() {
            let board = Board::from_rows([
                [2, 0, 0, 0],
                [2, 0, 0, 0],
                [2, 0, 0, 0],
                [0, 0, 0, 0],
            ]);
            let outcome = board.shifted(Direction::Up);
            assert!(outcome.moved);
            assert_eq!(outcome.score_gain, 4);
            let expected = Board::from_rows([
                [4, 0, 0, 0],
                [2, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]);
            assert_eq!(outcome.board, expected);
        }

        #[test]
        fn test_shift_down_compacts_columns() {
            let board = Board::from_rows([
                [2, 0, 0, 0],
                [2, 0, 0, 0],
                [2, 0, 0, 0],
                [0, 0, 0, 0],
            ]);
            let outcome = board.shifted(Direction::Down);
            assert!(outcome.moved);
            assert_eq!(outcome.score_gain, 4);
            let expected = Board::from_rows([
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [2, 0, 0, 0],
                [4, 0, 0, 0],
            ]);
            assert_eq!(outcome.board, expected);
        }

        #[test]
        fn test_score_summed_across_all_rows() {
            let board = Board::from_rows([
                [2, 2, 0, 0],
                [4, 4, 0, 0],
                [8, 8, 0, 0],
                [0, 0, 0, 0],
            ]);
            let outcome = board.shifted(Direction::Left);
            assert_eq!(outcome.score_gain, 4 + 8 + 16);
        }

        #[test]
        fn test_move_into_wall_reports_not_moved() {
            let board = Board::from_rows([
                [2, 0, 0, 0],
                [4, 0, 0, 0],
                [8, 0, 0, 0],
                [16, 0, 0, 0],
            ]);
            let outcome = board.shifted(Direction::Left);
            assert!(!outcome.moved);
            assert_eq!(outcome.board, board);
            assert_eq!(outcome.score_gain, 0);
        }

        #[test]
        fn test_no_op_move_is_idempotent() {
            let board = Board::from_rows([
                [2, 4, 2, 4],
                [4, 2, 4, 2],
                [2, 4, 2, 4],
                [4, 2, 4, 2],
            ]);
            for direction in Direction::ALL {
                let first = board.shifted(direction);
                assert!(!first.moved, "{direction:?} should be a no-op");
                let second = first.board.shifted(direction);
                assert!(!second.moved, "{direction:?} must stay a no-op");
                assert_eq!(second.board, board);
            }
        }

        #[test]
        fn test_moved_is_position_sensitive_even_without_merges() {
            // A slide with zero score gain still counts as a move.
            let outcome = board_with_top_row([0, 2, 0, 4]).shifted(Direction::Left);
            assert!(outcome.moved);
            assert_eq!(outcome.score_gain, 0);
            assert_eq!(outcome.board.row(0), [2, 4, 0, 0]);
        }
    }
}
