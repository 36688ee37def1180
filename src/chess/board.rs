//! The board model: what stands on every square
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::mem;
use super::*;

use Color::*;
use Piece::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A total mapping from every `Square` to its occupant, if any.
///
/// The board is created once at game start and mutated in place by
/// [`apply`](#method.apply) on every resolved move. It knows nothing about
/// whose turn it is; the caller owns the turn counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; File::COUNT]; Rank::COUNT],
}

/// Standard back-rank ordering, file a through file h.
const BACK_RANK: [Piece; File::COUNT] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

impl Board {
    /// Returns the standard starting position: White on ranks 1 and 2,
    /// Black on ranks 7 and 8.
    pub fn new() -> Board {
        let mut board = Board::empty();

        for (i, &piece) in BACK_RANK.iter().enumerate() {
            let file = File::from_index(i as i8).expect("INFALLIBLE");
            board.place(White, piece, Square::from_coord(file, Rank::R1));
            board.place(White, Pawn, Square::from_coord(file, Rank::R2));
            board.place(Black, Pawn, Square::from_coord(file, Rank::R7));
            board.place(Black, piece, Square::from_coord(file, Rank::R8));
        }

        board
    }

    /// Returns a board with no pieces on it
    pub fn empty() -> Board {
        Board {
            squares: [[None; File::COUNT]; Rank::COUNT],
        }
    }

    /// Returns the color and piece at `sq`, or `None` if the square is empty
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank().index() as usize][sq.file().index() as usize]
    }

    /// Puts a piece on `sq`, replacing any occupant
    pub fn place(&mut self, color: Color, piece: Piece, sq: Square) {
        *self.slot(sq) = Some((color, piece));
    }

    /// Applies a resolved move: lifts the piece at `origin` and sets it
    /// down on `target`, capturing any occupant.
    ///
    /// Returns `true` exactly when the captured occupant was a king, which
    /// ends the game in this simplified model. No legality is checked
    /// here; the origin comes out of the resolution pipeline already
    /// validated.
    pub fn apply(&mut self, origin: Square, target: Square) -> bool {
        let moved = self.slot(origin).take();
        let captured = mem::replace(self.slot(target), moved);

        match captured {
            Some((_, King)) => true,
            _ => false,
        }
    }

    fn slot(&mut self, sq: Square) -> &mut Option<(Color, Piece)> {
        &mut self.squares[sq.rank().index() as usize][sq.file().index() as usize]
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
