//! Tests the full move-resolution pipeline (chess module)
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod resolve {
    use patzer::chess::{resolve_and_apply, Board, Color, MoveOutcome, Piece, Square};

    use Color::*;
    use Piece::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn pawn_advance_from_the_starting_position() {
        let mut board = Board::new();

        let outcome = resolve_and_apply("e4", &mut board, 1);

        assert_eq!(outcome, MoveOutcome::Applied { is_terminal: false });
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.piece_at(sq("e4")), Some((White, Pawn)));
    }

    #[test]
    fn knight_development_from_the_starting_position() {
        let mut board = Board::new();

        let outcome = resolve_and_apply("Nf3", &mut board, 1);

        assert_eq!(outcome, MoveOutcome::Applied { is_terminal: false });
        assert_eq!(board.piece_at(sq("g1")), None);
        assert_eq!(board.piece_at(sq("f3")), Some((White, Knight)));
    }

    #[test]
    fn black_moves_on_even_turns() {
        let mut board = Board::new();
        assert_eq!(
            resolve_and_apply("e4", &mut board, 1),
            MoveOutcome::Applied { is_terminal: false }
        );

        let outcome = resolve_and_apply("e5", &mut board, 2);

        assert_eq!(outcome, MoveOutcome::Applied { is_terminal: false });
        assert_eq!(board.piece_at(sq("e7")), None);
        assert_eq!(board.piece_at(sq("e5")), Some((Black, Pawn)));
    }

    #[test]
    fn blocked_ray_leaves_only_the_nearer_piece() {
        // queen on d1 and rook on d5: for Qd3 the upward ray stops at the
        // rook without contributing, so the queen resolves uniquely
        let mut board = Board::empty();
        board.place(White, Queen, sq("d1"));
        board.place(White, Rook, sq("d5"));

        let outcome = resolve_and_apply("Qd3", &mut board, 1);

        assert_eq!(outcome, MoveOutcome::Applied { is_terminal: false });
        assert_eq!(board.piece_at(sq("d3")), Some((White, Queen)));
        assert_eq!(board.piece_at(sq("d1")), None);
        assert_eq!(board.piece_at(sq("d5")), Some((White, Rook)));
    }

    #[test]
    fn fully_blocked_ray_resolves_nothing() {
        let mut board = Board::empty();
        board.place(White, Queen, sq("d1"));
        board.place(White, Rook, sq("d2"));
        let before = board.clone();

        assert_eq!(resolve_and_apply("Qd3", &mut board, 1), MoveOutcome::NoSuchOrigin);
        assert_eq!(board, before);
    }

    #[test]
    fn malformed_token_leaves_the_board_unchanged() {
        let mut board = Board::new();

        assert_eq!(resolve_and_apply("Zx9", &mut board, 1), MoveOutcome::ParseFailed);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn own_piece_on_the_target_leaves_the_board_unchanged() {
        let mut board = Board::new();

        // e2 holds White's own pawn
        assert_eq!(resolve_and_apply("e2", &mut board, 1), MoveOutcome::NoSuchOrigin);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn two_candidates_without_a_hint_are_ambiguous() {
        let mut board = Board::empty();
        board.place(White, Rook, sq("a1"));
        board.place(White, Rook, sq("h1"));
        let before = board.clone();

        let outcome = resolve_and_apply("Rd1", &mut board, 1);

        assert_eq!(outcome, MoveOutcome::Ambiguous { count: 2 });
        assert_eq!(board, before);
    }

    #[test]
    fn a_file_hint_settles_the_ambiguity() {
        let mut board = Board::empty();
        board.place(White, Rook, sq("a1"));
        board.place(White, Rook, sq("h1"));

        let outcome = resolve_and_apply("Rad1", &mut board, 1);

        assert_eq!(outcome, MoveOutcome::Applied { is_terminal: false });
        assert_eq!(board.piece_at(sq("a1")), None);
        assert_eq!(board.piece_at(sq("d1")), Some((White, Rook)));
        assert_eq!(board.piece_at(sq("h1")), Some((White, Rook)));
    }

    #[test]
    fn a_rank_hint_settles_the_ambiguity() {
        let mut board = Board::empty();
        board.place(White, Rook, sq("a1"));
        board.place(White, Rook, sq("a5"));

        let outcome = resolve_and_apply("R1a3", &mut board, 1);

        assert_eq!(outcome, MoveOutcome::Applied { is_terminal: false });
        assert_eq!(board.piece_at(sq("a1")), None);
        assert_eq!(board.piece_at(sq("a3")), Some((White, Rook)));
        assert_eq!(board.piece_at(sq("a5")), Some((White, Rook)));
    }

    #[test]
    fn capturing_the_king_ends_the_game() {
        let mut board = Board::empty();
        board.place(White, Rook, sq("d1"));
        board.place(Black, King, sq("d8"));

        let outcome = resolve_and_apply("Rxd8", &mut board, 1);

        assert_eq!(outcome, MoveOutcome::Applied { is_terminal: true });
        assert_eq!(board.piece_at(sq("d8")), Some((White, Rook)));
    }

    #[test]
    fn capturing_anything_else_is_not_terminal() {
        let mut board = Board::empty();
        board.place(White, Rook, sq("d1"));
        board.place(Black, Queen, sq("d8"));

        assert_eq!(
            resolve_and_apply("Rxd8", &mut board, 1),
            MoveOutcome::Applied { is_terminal: false }
        );
    }

    #[test]
    fn lenient_notation_resolves_like_the_strict_form() {
        let mut lenient = Board::new();
        let mut strict = Board::new();

        assert_eq!(
            resolve_and_apply("Nx!?f3", &mut lenient, 1),
            resolve_and_apply("Nf3", &mut strict, 1)
        );
        assert_eq!(lenient, strict);
    }
}

mod parse_properties {
    use patzer::chess::{ParsedMove, Piece};

    fn parse(token: &str) -> Option<ParsedMove> {
        patzer::chess::notation::parse(token).ok()
    }

    #[test]
    fn reparsing_the_extracted_target_yields_the_same_target() {
        for token in &["e4", "Nf3", "Nbd7", "R1a3", "exd5", "Qx!?h7"] {
            let target = parse(token).unwrap().target;
            let reparsed = parse(&target.to_string()).unwrap();
            assert_eq!(reparsed.target, target);
            assert_eq!(reparsed.piece, Piece::Pawn);
            assert_eq!(reparsed.hint, None);
        }
    }
}
