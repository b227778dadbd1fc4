/*
  chesscore, a move-generation and search library for a chess engine.
  Licensed under the MIT license. See LICENSE for details.
*/

//! Minimax search with alpha-beta pruning.

use crate::board::{Board, SquareState};
use crate::color::Color;
use crate::eval;
use crate::logging::LogSink;
use crate::movegen;
use crate::moves::{Move, MoveList};
use crate::piece::PieceKind;
use crate::score;

/// A candidate's position in the move-ordering sort: captures are searched first, then
/// promotions, then everything else, to improve alpha-beta cutoff rates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum MoveOrder {
    Capture,
    Promote,
    Regular,
}

/// A recursive alpha-beta search over the game tree rooted at a given board.
///
/// This is a plain, single-threaded exploration: no transposition table, no iterative
/// deepening, no time management. `max_depth` bounds how many plies it looks ahead.
pub struct Search {
    /// How many plies to search before scoring a leaf statically.
    pub max_depth: u8,
    nodes_evaluated: u64,
}

impl Search {
    #[must_use]
    /// A search that looks `max_depth` plies ahead.
    pub fn new(max_depth: u8) -> Search {
        Search {
            max_depth,
            nodes_evaluated: 0,
        }
    }

    #[must_use]
    /// Run the search from `board`. Returns `None` iff the side to move has no legal moves
    /// (checkmate or stalemate at the root).
    ///
    /// On success, returns `(eval, continuation, positions_evaluated)`.
    pub fn run(&mut self, board: &Board, sink: &dyn LogSink) -> Option<(i32, MoveList, u64)> {
        self.nodes_evaluated = 0;
        let root_color = board.side_to_move;
        let (eval, continuation) = self.traverse(board, 0, i32::MIN, i32::MAX, root_color, sink);
        if continuation.0.is_empty() {
            None
        } else {
            Some((eval, continuation, self.nodes_evaluated))
        }
    }

    fn traverse(
        &mut self,
        board: &Board,
        depth: u8,
        alpha_in: i32,
        beta_in: i32,
        root_color: Color,
        sink: &dyn LogSink,
    ) -> (i32, MoveList) {
        self.nodes_evaluated += 1;

        if depth == self.max_depth {
            return (score::net_score(board, root_color), MoveList::new());
        }

        let mut candidates = generate_candidates(board);
        candidates.sort_by_key(|(_, order)| *order);

        let maximizing = board.side_to_move == root_color;
        let mut node_eval = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_line = MoveList::new();
        let mut alpha = alpha_in;
        let mut beta = beta_in;
        let mut legal_moves = 0u32;

        for (mv, _) in candidates {
            let mut child = board.clone();
            if !child.apply_move(mv, sink) {
                continue;
            }

            if eval::in_check(&child, board.side_to_move) {
                // Moving into (or staying in) check is illegal.
                continue;
            }

            legal_moves += 1;
            child.side_to_move = !child.side_to_move;

            let (child_eval, child_line) = self.traverse(&child, depth + 1, alpha, beta, root_color, sink);

            if maximizing {
                if child_eval > node_eval {
                    node_eval = child_eval;
                    best_line = prepend(mv, child_line);
                }
                if child_eval > alpha {
                    alpha = child_eval;
                }
            } else {
                if child_eval < node_eval {
                    node_eval = child_eval;
                    best_line = prepend(mv, child_line);
                }
                if child_eval < beta {
                    beta = child_eval;
                }
            }

            if alpha >= beta {
                break;
            }
        }

        if legal_moves == 0 {
            let eval = if !eval::in_check(board, board.side_to_move) {
                0
            } else if board.side_to_move == root_color {
                i32::MIN + depth as i32
            } else {
                i32::MAX - depth as i32
            };
            (eval, MoveList::new())
        } else {
            (node_eval, best_line)
        }
    }
}

fn prepend(mv: Move, mut rest: MoveList) -> MoveList {
    rest.0.insert(0, mv);
    rest
}

/// Every pseudo-legal move the side to move could play, each tagged with its ordering key.
fn generate_candidates(board: &Board) -> Vec<(Move, MoveOrder)> {
    let own_pieces = board.pieces(board.side_to_move);
    let opp_pieces = board.pieces(!board.side_to_move);
    let all_pieces = own_pieces | opp_pieces;
    let promotion_rank = match board.side_to_move {
        Color::White => 7u8,
        Color::Black => 0u8,
    };

    let mut candidates = Vec::new();
    for source in own_pieces.squares() {
        let SquareState::Occupied(color, kind) = board.square(source) else {
            continue;
        };
        let destinations = movegen::available_moves(
            color,
            kind,
            source,
            all_pieces,
            own_pieces,
            board.enpassant_targets,
        );
        for destination in destinations.squares() {
            if matches!(kind, PieceKind::Pawn) && destination.rank() == promotion_rank {
                for &promotion in &PieceKind::PROMOTION_KINDS {
                    candidates.push((Move::promoting(source, destination, promotion), MoveOrder::Promote));
                }
            } else {
                let order = if opp_pieces.contains(destination) {
                    MoveOrder::Capture
                } else {
                    MoveOrder::Regular
                };
                candidates.push((Move::quiet(source, destination), order));
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NullSink;
    use crate::square::Square;

    fn place(board: &mut Board, square: Square, color: Color, kind: PieceKind) {
        board.set_square(square, SquareState::Occupied(color, kind));
    }

    #[test]
    fn mate_in_one() {
        let mut board = Board::empty();
        place(&mut board, Square::A1, Color::Black, PieceKind::King);
        place(&mut board, Square::new(2, 2), Color::White, PieceKind::King); // C3
        place(&mut board, Square::new(7, 1), Color::White, PieceKind::Queen); // H2
        board.side_to_move = Color::White;

        let mut search = Search::new(2);
        let (eval, continuation, _) = search.run(&board, &NullSink).expect("root has legal moves");
        assert_eq!(continuation.0[0], Move::quiet(Square::new(7, 1), Square::new(1, 1)));
        assert!(eval > 1_000_000_000);
    }

    #[test]
    fn mate_in_three_plies_from_white() {
        let mut board = Board::empty();
        place(&mut board, Square::B1, Color::White, PieceKind::King);
        place(&mut board, Square::E1, Color::White, PieceKind::Rook);
        place(&mut board, Square::new(4, 1), Color::White, PieceKind::Rook); // E2
        place(&mut board, Square::H8, Color::Black, PieceKind::King);
        place(&mut board, Square::E8, Color::Black, PieceKind::Rook);
        place(&mut board, Square::A8, Color::Black, PieceKind::Rook);
        place(&mut board, Square::new(5, 6), Color::Black, PieceKind::Pawn); // F7
        place(&mut board, Square::new(6, 6), Color::Black, PieceKind::Pawn); // G7
        place(&mut board, Square::new(7, 6), Color::Black, PieceKind::Pawn); // H7
        board.side_to_move = Color::White;

        let mut search = Search::new(4);
        let (_, continuation, _) = search.run(&board, &NullSink).expect("root has legal moves");
        assert_eq!(
            continuation.0[0],
            Move::quiet(Square::new(4, 1), Square::E8) // E2-E8
        );
    }

    #[test]
    fn optimal_promotion_chooses_queen() {
        let mut board = Board::empty();
        place(&mut board, Square::new(7, 6), Color::White, PieceKind::Pawn); // H7
        place(&mut board, Square::A1, Color::White, PieceKind::King);
        place(&mut board, Square::new(0, 6), Color::Black, PieceKind::King); // A7
        board.side_to_move = Color::White;

        let mut search = Search::new(2);
        let (_, continuation, _) = search.run(&board, &NullSink).expect("root has legal moves");
        let best = continuation.0[0];
        assert_eq!(best.source, Square::new(7, 6));
        assert_eq!(best.destination, Square::H8);
        assert_eq!(best.promotion, PieceKind::Queen);
    }

    #[test]
    fn stalemate_returns_empty_continuation() {
        let mut board = Board::empty();
        place(&mut board, Square::B1, Color::White, PieceKind::King);
        place(&mut board, Square::new(1, 1), Color::Black, PieceKind::Pawn); // B2
        place(&mut board, Square::new(1, 2), Color::Black, PieceKind::King); // B3
        board.side_to_move = Color::White;

        let mut search = Search::new(3);
        assert!(search.run(&board, &NullSink).is_none());
    }
}
