/*
  chesscore, a move-generation and search library for a chess engine.
  Licensed under the MIT license. See LICENSE for details.
*/

//! Position evaluation: a cache of derived occupancy and attack bitmasks for one color.

use crate::bitboard::Bitmask;
use crate::board::{Board, SquareState};
use crate::color::Color;
use crate::movegen;
use crate::square::Square;

#[derive(Clone, Debug)]
/// Derived state for `board` from `color`'s point of view, computed in one pass so the search
/// and the static evaluator don't recompute it per query.
pub struct PositionEval {
    /// The squares `color` occupies.
    pub own_pieces: Bitmask,
    /// The squares the opponent occupies.
    pub opp_pieces: Bitmask,
    /// Every occupied square.
    pub all_pieces: Bitmask,
    /// The square `color`'s king is on.
    pub own_king: Square,
    /// Squares the opponent threatens.
    pub attacked_squares: Bitmask,
    /// Squares `color` threatens.
    pub attacking_squares: Bitmask,
    /// The union of every legal destination `color`'s pieces could move to.
    pub own_available_moves: Bitmask,
    /// Whether `color`'s king sits on an attacked square.
    pub in_check: bool,
}

impl PositionEval {
    #[must_use]
    /// Compute the derived cache for `color` on `board`.
    pub fn compute(board: &Board, color: Color) -> PositionEval {
        let own_pieces = board.pieces(color);
        let opp_pieces = board.pieces(!color);
        let all_pieces = own_pieces | opp_pieces;
        let own_king = board.king_square(color);

        let attacked_squares = attacks_from(board, opp_pieces, all_pieces);

        let mut attacking_squares = Bitmask::EMPTY;
        let mut own_available_moves = Bitmask::EMPTY;
        for square in own_pieces.squares() {
            let SquareState::Occupied(piece_color, kind) = board.square(square) else {
                continue;
            };
            attacking_squares |= movegen::available_captures(piece_color, kind, square, all_pieces);
            own_available_moves |= movegen::available_moves(
                piece_color,
                kind,
                square,
                all_pieces,
                own_pieces,
                board.enpassant_targets,
            );
        }

        let in_check = !(attacked_squares & Bitmask::from_square(own_king)).is_empty();

        PositionEval {
            own_pieces,
            opp_pieces,
            all_pieces,
            own_king,
            attacked_squares,
            attacking_squares,
            own_available_moves,
            in_check,
        }
    }
}

/// The union of `available_captures` over every square in `attacker_pieces`.
fn attacks_from(board: &Board, attacker_pieces: Bitmask, all_pieces: Bitmask) -> Bitmask {
    let mut attacked = Bitmask::EMPTY;
    for square in attacker_pieces.squares() {
        let SquareState::Occupied(color, kind) = board.square(square) else {
            continue;
        };
        attacked |= movegen::available_captures(color, kind, square, all_pieces);
    }
    attacked
}

#[must_use]
/// Whether `color`'s king is presently attacked by the opponent.
///
/// Cheaper than [`PositionEval::compute`] when only the check status is needed, as it skips
/// computing `color`'s own mobility.
pub fn in_check(board: &Board, color: Color) -> bool {
    let opp_pieces = board.pieces(!color);
    let all_pieces = board.pieces(color) | opp_pieces;
    let attacked = attacks_from(board, opp_pieces, all_pieces);
    !(attacked & Bitmask::from_square(board.king_square(color))).is_empty()
}
