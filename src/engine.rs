/*
  chesscore, a move-generation and search library for a chess engine.
  Licensed under the MIT license. See LICENSE for details.
*/

//! The engine surface: the single entry point a protocol front-end drives.

use crate::board::Board;
use crate::logging::LogSink;
use crate::moves::MoveList;
use crate::search::Search;

/// The result of one completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// The first move of the principal continuation.
    pub best: crate::moves::Move,
    /// The root position's evaluation, from the side-to-move's perspective.
    pub eval: i32,
    /// The full best line the search found.
    pub continuation: MoveList,
    /// How many positions the search visited.
    pub total: u64,
}

/// Owns a board and runs searches against it on request.
///
/// `start`/`stop` exist so a future asynchronous implementation can be swapped in without
/// changing this interface; in this single-threaded engine they do nothing.
pub struct Engine {
    board: Board,
    max_depth: u8,
}

impl Engine {
    #[must_use]
    /// A new engine at the starting position, searching `max_depth` plies ahead.
    pub fn new(max_depth: u8) -> Engine {
        Engine {
            board: Board::starting_position(),
            max_depth,
        }
    }

    /// Replace the engine's board.
    pub fn set_position(&mut self, board: Board) {
        self.board = board;
    }

    #[must_use]
    /// A snapshot of the current board.
    pub fn get_position(&self) -> Board {
        self.board.clone()
    }

    /// No-op in this single-threaded engine; present for interface symmetry with a future
    /// asynchronous search.
    pub fn start(&mut self) {}

    /// No-op in this single-threaded engine.
    pub fn stop(&mut self) {}

    /// Search the current position and write the result to `out`.
    ///
    /// Returns `false` iff the side to move has no legal moves (checkmate or stalemate).
    pub fn poll(&mut self, out: &mut Evaluation, sink: &dyn LogSink) -> bool {
        let mut search = Search::new(self.max_depth);
        match search.run(&self.board, sink) {
            Some((eval, continuation, total)) => {
                out.best = continuation.0[0];
                out.eval = eval;
                out.continuation = continuation;
                out.total = total;
                true
            }
            None => false,
        }
    }
}

impl Default for Engine {
    /// Six plies deep, matching the depth the search converges acceptably fast at.
    fn default() -> Engine {
        Engine::new(6)
    }
}

impl Default for Evaluation {
    fn default() -> Evaluation {
        Evaluation {
            best: crate::moves::Move::quiet(crate::square::Square::A1, crate::square::Square::A1),
            eval: 0,
            continuation: MoveList::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareState;
    use crate::color::Color;
    use crate::logging::NullSink;
    use crate::piece::PieceKind;
    use crate::square::Square;

    #[test]
    fn default_engine_starts_at_the_standard_position() {
        let engine = Engine::default();
        assert_eq!(engine.get_position().all_pieces().popcount(), 32);
    }

    #[test]
    fn poll_reports_no_legal_moves_on_stalemate() {
        let mut board = Board::empty();
        board.set_square(Square::B1, SquareState::Occupied(Color::White, PieceKind::King));
        board.set_square(Square::new(1, 1), SquareState::Occupied(Color::Black, PieceKind::Pawn));
        board.set_square(Square::new(1, 2), SquareState::Occupied(Color::Black, PieceKind::King));
        board.side_to_move = Color::White;

        let mut engine = Engine::new(3);
        engine.set_position(board);
        let mut out = Evaluation::default();
        assert!(!engine.poll(&mut out, &NullSink));
    }

    #[test]
    fn poll_finds_mate_in_one() {
        let mut board = Board::empty();
        board.set_square(Square::A1, SquareState::Occupied(Color::Black, PieceKind::King));
        board.set_square(Square::new(2, 2), SquareState::Occupied(Color::White, PieceKind::King));
        board.set_square(Square::new(7, 1), SquareState::Occupied(Color::White, PieceKind::Queen));
        board.side_to_move = Color::White;

        let mut engine = Engine::new(2);
        engine.set_position(board);
        let mut out = Evaluation::default();
        assert!(engine.poll(&mut out, &NullSink));
        assert_eq!(out.best, crate::moves::Move::quiet(Square::new(7, 1), Square::new(1, 1)));
    }
}
