//! Move resolution: from a raw token to a board mutation
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

use Color::*;
use Piece::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The outcome of resolving a move token against a board.
///
/// On any outcome other than `Applied` the board was left untouched and
/// the caller keeps the turn unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was resolved and the board mutated in place
    Applied {
        /// `true` when the captured piece was a king, ending the game
        is_terminal: bool,
    },
    /// The token could not be parsed
    ParseFailed,
    /// No piece of the stated kind can reach the target square
    NoSuchOrigin,
    /// More than one piece could make the move and the hint, if any,
    /// did not settle it
    Ambiguous {
        /// How many pieces could make the move
        count: usize,
    },
}

impl From<Error> for MoveOutcome {
    fn from(err: Error) -> MoveOutcome {
        match err {
            Error::ParseError => MoveOutcome::ParseFailed,
            Error::NoCandidate => MoveOutcome::NoSuchOrigin,
            Error::AmbiguousMove(count) => MoveOutcome::Ambiguous { count },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, 1), (-2, -1), (-1, 2), (-1, -2), (1, 2), (1, -2), (2, 1), (2, -1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, 0), (-1, 1), (-1, -1), (0, 1), (0, -1), (1, 0), (1, 1), (1, -1),
];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Resolves `token` against `board` for the side to move on `turn` and,
/// on success, applies the move in place.
///
/// The full pipeline: parse the token, search for candidate origins,
/// narrow them to one with the origin hint, then mutate the board. Any
/// failure along the way leaves the board untouched; the caller advances
/// its turn counter only on `Applied`.
///
/// # Example
/// ```
/// use patzer::chess::{resolve_and_apply, Board, MoveOutcome};
///
/// let mut board = Board::new();
/// let outcome = resolve_and_apply("e4", &mut board, 1);
/// assert_eq!(outcome, MoveOutcome::Applied { is_terminal: false });
/// ```
pub fn resolve_and_apply(token: &str, board: &mut Board, turn: u32) -> MoveOutcome {
    let parsed = match notation::parse(token) {
        Ok(parsed) => parsed,
        Err(err) => return err.into(),
    };

    let candidates = candidate_origins(parsed.target, parsed.piece, board, Color::on_move(turn));

    match disambiguate(&candidates, parsed.hint) {
        Ok(origin) => {
            let is_terminal = board.apply(origin, parsed.target);
            MoveOutcome::Applied { is_terminal }
        }
        Err(err) => err.into(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Returns every square from which a `piece` of `color` could reach
/// `target` on this board.
///
/// The search is purely geometric: pins and checks are never inspected,
/// so a candidate may be a move that leaves the mover's own king
/// attacked. Pawns, knights and kings are probed at fixed offsets from
/// the target; bishops, rooks and queens by walking rays outward from the
/// target until the first occupied square. A target already held by the
/// moving side yields no candidates at all.
pub fn candidate_origins(target: Square, piece: Piece, board: &Board, color: Color) -> Vec<Square> {
    let mut origins = Vec::new();

    // self-capture is illegal, no point searching
    if let Some((occupant, _)) = board.piece_at(target) {
        if occupant == color {
            return origins;
        }
    }

    let wanted = (color, piece);

    match piece {
        Pawn => {
            let forward = match color {
                White => 1,
                Black => -1,
            };

            if board.piece_at(target).is_none() {
                if let Some(back) = target.offset(0, -forward) {
                    if board.piece_at(back) == Some(wanted) {
                        origins.push(back);
                    }
                    // a leap from the home rank, if nothing stands in between
                    if target.rank() == two_step_rank(color) && board.piece_at(back).is_none() {
                        if let Some(home) = target.offset(0, -2 * forward) {
                            if board.piece_at(home) == Some(wanted) {
                                origins.push(home);
                            }
                        }
                    }
                }
            } else {
                // target occupied, so only the two diagonal captures apply
                for &dx in &[-1, 1] {
                    if let Some(sq) = target.offset(dx, -forward) {
                        if board.piece_at(sq) == Some(wanted) {
                            origins.push(sq);
                        }
                    }
                }
            }
        }
        Knight => collect_steps(&KNIGHT_JUMPS, target, wanted, board, &mut origins),
        King => collect_steps(&KING_STEPS, target, wanted, board, &mut origins),
        Bishop => collect_rays(&DIAGONALS, target, wanted, board, &mut origins),
        Rook => collect_rays(&ORTHOGONALS, target, wanted, board, &mut origins),
        Queen => {
            collect_rays(&DIAGONALS, target, wanted, board, &mut origins);
            collect_rays(&ORTHOGONALS, target, wanted, board, &mut origins);
        }
    }

    origins
}

/// Probes fixed offsets from the target. Off-board steps are discarded
/// silently.
fn collect_steps(
    steps: &[(i8, i8)],
    target: Square,
    wanted: (Color, Piece),
    board: &Board,
    origins: &mut Vec<Square>,
) {
    for &(dx, dy) in steps {
        if let Some(sq) = target.offset(dx, dy) {
            if board.piece_at(sq) == Some(wanted) {
                origins.push(sq);
            }
        }
    }
}

/// Walks each direction outward from the target and collects the
/// endpoints that hold the wanted piece.
fn collect_rays(
    directions: &[(i8, i8)],
    target: Square,
    wanted: (Color, Piece),
    board: &Board,
    origins: &mut Vec<Square>,
) {
    for &(dx, dy) in directions {
        if let Some(sq) = ray_endpoint(target, dx, dy, wanted, board) {
            origins.push(sq);
        }
    }
}

/// Steps from `target` in one direction until the first occupied square
/// or the board edge. The endpoint counts only if it holds exactly the
/// wanted piece; any other occupant blocks the ray.
fn ray_endpoint(
    target: Square,
    dx: i8,
    dy: i8,
    wanted: (Color, Piece),
    board: &Board,
) -> Option<Square> {
    let mut sq = target.offset(dx, dy)?;
    while board.piece_at(sq).is_none() {
        sq = sq.offset(dx, dy)?;
    }

    if board.piece_at(sq) == Some(wanted) {
        Some(sq)
    } else {
        None
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The rank a pawn of this color reaches only by a two-square advance
/// from its home rank.
fn two_step_rank(color: Color) -> Rank {
    match color {
        White => Rank::R4,
        Black => Rank::R5,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Narrows a candidate set to a single origin square.
///
/// A lone candidate wins outright and the hint is ignored as redundant.
/// With several candidates the hint filters by origin file or rank; only
/// a unique survivor resolves the move. The ambiguity error carries the
/// unfiltered candidate count, which is what gets reported to the player.
pub fn disambiguate(candidates: &[Square], hint: Option<Hint>) -> Result<Square> {
    match candidates {
        [] => Err(Error::NoCandidate),
        [origin] => Ok(*origin),
        _ => {
            if let Some(hint) = hint {
                let survivors: Vec<Square> = candidates
                    .iter()
                    .copied()
                    .filter(|&sq| hint.matches(sq))
                    .collect();
                if survivors.len() == 1 {
                    return Ok(survivors[0]);
                }
            }

            Err(Error::AmbiguousMove(candidates.len()))
        }
    }
}
