/*
  chesscore, a move-generation and search library for a chess engine.
  Licensed under the MIT license. See LICENSE for details.
*/

//! Moves and their long algebraic notation (LAN) encoding.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::piece::PieceKind;
use crate::square::{parse_file, parse_rank, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A single move: where a piece came from, where it went, and what it promoted to.
///
/// `promotion` is [`PieceKind::Pawn`] when the move is not a promotion; this is the sentinel
/// the rest of the crate relies on, not a real pawn-to-pawn promotion.
pub struct Move {
    /// The square the moving piece started on.
    pub source: Square,
    /// The square the moving piece ended on.
    pub destination: Square,
    /// The piece a pawn promotes to, or [`PieceKind::Pawn`] if this isn't a promotion.
    pub promotion: PieceKind,
}

impl Move {
    #[must_use]
    /// Build a non-promoting move.
    pub const fn quiet(source: Square, destination: Square) -> Move {
        Move {
            source,
            destination,
            promotion: PieceKind::Pawn,
        }
    }

    #[must_use]
    /// Build a promoting move.
    pub const fn promoting(source: Square, destination: Square, promotion: PieceKind) -> Move {
        Move {
            source,
            destination,
            promotion,
        }
    }

    #[must_use]
    /// Whether this move is a promotion.
    pub const fn is_promotion(self) -> bool {
        !matches!(self.promotion, PieceKind::Pawn)
    }

    #[must_use]
    /// Parse a move from its long algebraic notation, e.g. `"e2e4"` or `"h7h8q"`.
    ///
    /// Returns `None` on any malformed input; this is a recoverable parse failure, not a
    /// programming error, so it does not panic.
    pub fn parse_lan(s: &str) -> Option<Move> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return None;
        }
        let source = Square::new(parse_file(bytes[0])?, parse_rank(bytes[1])?);
        let destination = Square::new(parse_file(bytes[2])?, parse_rank(bytes[3])?);
        let promotion = if bytes.len() == 5 {
            match bytes[4].to_ascii_lowercase() {
                b'q' => PieceKind::Queen,
                b'n' => PieceKind::Knight,
                b'b' => PieceKind::Bishop,
                b'r' => PieceKind::Rook,
                _ => return None,
            }
        } else {
            PieceKind::Pawn
        };
        Some(Move {
            source,
            destination,
            promotion,
        })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.source, self.destination)?;
        if self.is_promotion() {
            write!(f, "{}", self.promotion.code().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// An ordered sequence of moves, such as a principal continuation.
pub struct MoveList(pub Vec<Move>);

impl MoveList {
    #[must_use]
    /// An empty move list.
    pub const fn new() -> MoveList {
        MoveList(Vec::new())
    }

    #[must_use]
    /// The moves as a single space-separated LAN string.
    pub fn to_lan(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_lan())
    }
}
