//! Parsing of shorthand move notation
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use lazy_static::lazy_static;
use regex::Regex;
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A move token broken into its parts: the target square, the kind of
/// piece moving, and an optional origin hint.
///
/// Produced and consumed within a single move-resolution call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsedMove {
    /// The destination square of the move
    pub target: Square,
    /// The kind of piece being moved; `Pawn` when the token has no piece letter
    pub piece: Piece,
    /// Origin hint used to pick between multiple candidate origins
    pub hint: Option<Hint>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A file letter or rank digit written between the piece letter and the
/// target, naming part of the origin square (the `b` in `Nbd7`, the `1`
/// in `R1a3`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hint {
    /// The origin lies on this file
    File(File),
    /// The origin lies on this rank
    Rank(Rank),
}

impl Hint {
    /// Returns the hint for a lowercase file letter or rank digit
    pub fn from_char(c: char) -> Option<Hint> {
        File::from_char(c).map(Hint::File)
            .or_else(|| Rank::from_char(c).map(Hint::Rank))
    }

    /// Returns `true` if `sq` lies on the hinted file or rank
    pub fn matches(self, sq: Square) -> bool {
        match self {
            Hint::File(file) => sq.file() == file,
            Hint::Rank(rank) => sq.rank() == rank,
        }
    }
}

// Greedy prefix, so the target is always the final two characters.
lazy_static! {
    static ref TOKEN: Regex =
        Regex::new("^(?P<rest>.*)(?P<target>[a-h][1-8])$").expect("INFALLIBLE");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Parses a shorthand move token of the form `[piece][origin][x]target`.
///
/// Parsing is deliberately lenient, matching the behavior players expect
/// from casual notation:
///
/// - only the trailing file letter and rank digit are trusted as the
///   target, so `Nxe5`, `Nx??e5` and `N:e5` all move a knight to e5;
/// - anything between the piece letter and the origin hint is ignored;
/// - the capture marker `x` is optional and never checked against the
///   board.
///
/// Fails with `Error::ParseError` when no target square can be extracted
/// from the end of the token, or when the leftover fragment names neither
/// a piece nor an origin hint.
pub fn parse(token: &str) -> Result<ParsedMove> {
    let caps = TOKEN.captures(token).ok_or(Error::ParseError)?;
    let target: Square = caps["target"].parse()?;

    // everything after an `x` is annotation, not origin data
    let fragment = caps["rest"].splitn(2, 'x').next().unwrap_or("");

    if fragment.is_empty() {
        return Ok(ParsedMove { target, piece: Piece::Pawn, hint: None });
    }

    let mut piece = None;
    let mut hint = None;

    if let Some(c) = fragment.chars().last() {
        if let Some(h) = Hint::from_char(c) {
            piece = Some(Piece::Pawn);
            hint = Some(h);
        }
    }
    if let Some(c) = fragment.chars().next() {
        if let Some(p) = Piece::from_letter(c) {
            piece = Some(p);
        }
    }

    match piece {
        Some(piece) => Ok(ParsedMove { target, piece, hint }),
        None => Err(Error::ParseError),
    }
}
