//! Defines the error types needed by the chess module
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used by methods in the `chess` module
///
/// Every variant is recoverable: the caller reports the condition and
/// leaves the board and turn unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cannot parse move notation
    ParseError,
    /// No piece of the stated kind can reach the target square
    NoCandidate,
    /// More than one piece could make the move; carries the candidate count
    AmbiguousMove(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError => "cannot parse move notation".fmt(f),
            Error::NoCandidate => "no piece can make that move".fmt(f),
            Error::AmbiguousMove(count) => write!(f, "{} pieces can make that move", count),
        }
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by methods in the `chess` module
pub type Result<T> = std::result::Result<T, Error>;
