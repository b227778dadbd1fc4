/*
  chesscore, a move-generation and search library for a chess engine.
  Licensed under the MIT license. See LICENSE for details.
*/

//! Piece kinds, which carry no information about color or location.

use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The kind of a piece, independent of its color or square.
///
/// `Pawn` doubles as the sentinel value for [`crate::Move::promotion`] when a move is not a
/// promotion; callers must not treat an arbitrary `Pawn` occupant as "no piece".
pub enum PieceKind {
    /// A pawn.
    Pawn,
    /// A rook, which slides orthogonally.
    Rook,
    /// A knight, which jumps in an L-shape.
    Knight,
    /// A bishop, which slides diagonally.
    Bishop,
    /// A queen, which slides orthogonally or diagonally.
    Queen,
    /// A king.
    King,
}

impl PieceKind {
    /// The four piece kinds a pawn may promote to.
    pub const PROMOTION_KINDS: [PieceKind; 4] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
    ];

    #[must_use]
    /// Get the FEN code of this piece kind as an uppercase character.
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}
