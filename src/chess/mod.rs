//! The `chess` module resolves shorthand move notation against a board.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use error::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on, based on the color of the pieces for that side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the side to move on the given turn. Turns count from 1 and
    /// odd turns belong to White.
    ///
    /// # Example
    /// ```
    /// use patzer::chess::Color;
    /// assert_eq!(Color::on_move(1), Color::White);
    /// assert_eq!(Color::on_move(2), Color::Black);
    /// ```
    pub fn on_move(turn: u32) -> Color {
        if turn % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    /// Returns the opposite color
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }.fmt(f)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The kind of a chess piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Returns the piece named by an uppercase letter in move notation.
    ///
    /// Pawns are written without a letter, so `'P'` is not accepted here.
    pub fn from_letter(c: char) -> Option<Piece> {
        match c {
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            _ => None,
        }
    }

    /// The letter used for this piece on a rendered board: uppercase for
    /// White, lowercase for Black.
    pub fn letter(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        };

        match color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letter(Color::White).fmt(f)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::Pawn
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Vertical column of the board, labeled from left to right from `White`'s perspective as
/// `A` through `H`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum File {
    A, B, C, D, E, F, G, H,
}

impl File {
    /// The number of files
    pub const COUNT: usize = 8;

    const ALL: [File; File::COUNT] = [
        File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H,
    ];

    /// Returns the file for a lowercase file letter. Move notation is
    /// lowercase only, so `'E'` is not accepted.
    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_index((c as u8 - b'a') as i8),
            _ => None,
        }
    }

    /// Returns the file at a zero-based index, or `None` if off the board.
    pub fn from_index(index: i8) -> Option<File> {
        if (0..File::COUNT as i8).contains(&index) {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// The file's zero-based index, `0` for file a.
    pub fn index(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ((b'a' + self.index() as u8) as char).fmt(f)
    }
}

impl Default for File {
    fn default() -> Self {
        File::A
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Horizontal row of the board, labeled from nearest to farthest from `White`'s perspective
/// as `R1` through `R8`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    R1, R2, R3, R4, R5, R6, R7, R8,
}

impl Rank {
    /// The number of ranks
    pub const COUNT: usize = 8;

    const ALL: [Rank; Rank::COUNT] = [
        Rank::R1, Rank::R2, Rank::R3, Rank::R4, Rank::R5, Rank::R6, Rank::R7, Rank::R8,
    ];

    /// Returns the rank for a rank digit.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::from_index((c as u8 - b'1') as i8),
            _ => None,
        }
    }

    /// Returns the rank at a zero-based index, or `None` if off the board.
    pub fn from_index(index: i8) -> Option<Rank> {
        if (0..Rank::COUNT as i8).contains(&index) {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// The rank's zero-based index, `0` for rank 1.
    pub fn index(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.index() + 1).fmt(f)
    }
}

impl Default for Rank {
    fn default() -> Self {
        Rank::R1
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A specific square on the board, a (file, rank) coordinate pair.
///
/// Two squares are equal exactly when both coordinates match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Returns a square from its file and rank
    pub fn from_coord(file: File, rank: Rank) -> Square {
        Square { file, rank }
    }

    /// Returns the square's file
    pub fn file(self) -> File {
        self.file
    }

    /// Returns the square's rank
    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Steps `dx` files and `dy` ranks from this square, or `None` if the
    /// step leaves the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let file = File::from_index(self.file.index() + dx)?;
        let rank = Rank::from_index(self.rank.index() + dy)?;
        Some(Square { file, rank })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.file.to_string() + &self.rank.to_string()).fmt(f)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Square> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => match (File::from_char(f), Rank::from_char(r)) {
                (Some(file), Some(rank)) => Ok(Square::from_coord(file, rank)),
                _ => Err(Error::ParseError),
            },
            _ => Err(Error::ParseError),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
mod board;
pub use board::Board;
pub mod notation;
pub use notation::{Hint, ParsedMove};
mod moves;
pub use moves::{candidate_origins, disambiguate, resolve_and_apply, MoveOutcome};

pub mod error;





#[cfg(test)]
mod square_tests {
    use super::{File, Rank, Square};

    #[test]
    fn coordinates_round_trip() {
        for &f in File::ALL.iter() {
            for &r in Rank::ALL.iter() {
                let sq = Square::from_coord(f, r);
                assert_eq!(sq.file(), f);
                assert_eq!(sq.rank(), r);
            }
        }
    }

    #[test]
    fn display_and_fromstr_traits_agree() {
        for &f in File::ALL.iter() {
            for &r in Rank::ALL.iter() {
                let sq = Square::from_coord(f, r);
                assert_eq!(format!("{}", sq), format!("{}{}", f, r));
                assert_eq!(format!("{}", sq).parse::<Square>().unwrap(), sq);
            }
        }
    }

    #[test]
    fn fromstr_trait_produces_errors_when_it_should() {
        assert!("a".parse::<Square>().is_err());
        assert!("1".parse::<Square>().is_err());
        assert!("ax".parse::<Square>().is_err());
        assert!("x1".parse::<Square>().is_err());
        assert!("a1x".parse::<Square>().is_err());
        assert!("E4".parse::<Square>().is_err());
    }

    #[test]
    fn offset_steps_within_the_board() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.offset(0, 1), Some("e5".parse().unwrap()));
        assert_eq!(e4.offset(-1, -1), Some("d3".parse().unwrap()));
        assert_eq!(e4.offset(2, 1), Some("g5".parse().unwrap()));
        assert_eq!(e4.offset(0, 0), Some(e4));
    }

    #[test]
    fn offset_off_the_board_is_none() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-2, 1), None);
    }
}
