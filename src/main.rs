//! A terminal chess program playing from shorthand algebraic notation.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::File as FsFile;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::{crate_version, App, Arg};
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use patzer::chess::{resolve_and_apply, Board, Color, File, MoveOutcome, Rank, Square};

fn main() -> Result<(), Error> {
    let matches =
        App::new("Patzer")
            .version(crate_version!())
            .about("Plays chess on the terminal from shorthand algebraic notation")
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("patzer.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .help("Sets the log level if logging is turned on"))
            .get_matches();

    let log_file = PathBuf::from(matches.value_of_os("log-file").expect("INFALLIBLE"));
    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(level) => return Err(Error(format!("{}: invalid log level", level))),
        None => unreachable!(),
    };

    let _logger = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            Config::default(),
            FsFile::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), io::sink())
    };

    play().map_err(|err| Error(format!("io error: {}", err)))
}

/// Runs the interactive game loop until quit, end of input, or a king
/// falls.
fn play() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();

    let mut board = Board::new();
    let mut turn = 1;

    print!("{}", render(&board, turn));

    loop {
        let side = Color::on_move(turn);
        print!("Please enter a move for {}: ", side);
        stdout.lock().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let token = line.trim();
        if token == "q" || token == "quit" {
            return Ok(());
        }

        let mut game_over = false;
        match resolve_and_apply(token, &mut board, turn) {
            MoveOutcome::Applied { is_terminal } => {
                info!("{} played {}", side, token);
                turn += 1;
                game_over = is_terminal;
            }
            MoveOutcome::ParseFailed => {
                debug!("unparsable move from {}: {:?}", side, token);
                println!("Move could not be parsed. Check your notation");
            }
            MoveOutcome::NoSuchOrigin => {
                debug!("no origin for {} move {:?}", side, token);
                println!("No piece can make that move");
            }
            MoveOutcome::Ambiguous { count } => {
                debug!("ambiguous {} move {:?}", side, token);
                println!("{} pieces can make that move", count);
            }
        }

        print!("{}", render(&board, turn));

        if game_over {
            println!("Checkmate!");
            return Ok(());
        }
    }
}

/// Draws the board rotated so that the side to move sits at the bottom
/// with its pieces in the usual order. Dark squares show as `=`.
fn render(board: &Board, turn: u32) -> String {
    let (files, ranks): (Vec<i8>, Vec<i8>) = match Color::on_move(turn) {
        Color::White => ((0..8).collect(), (0..8).rev().collect()),
        Color::Black => ((0..8).rev().collect(), (0..8).collect()),
    };

    // 8 squares, 9 borders
    let width = 2 * File::COUNT + 1;

    let mut out = String::new();
    out.push_str(&"_".repeat(width));
    out.push('\n');

    for &r in &ranks {
        out.push('|');
        for &f in &files {
            let file = File::from_index(f).expect("INFALLIBLE");
            let rank = Rank::from_index(r).expect("INFALLIBLE");
            let square = Square::from_coord(file, rank);

            out.push(match board.piece_at(square) {
                Some((color, piece)) => piece.letter(color),
                None if (f + r) % 2 == 1 => '=',
                None => ' ',
            });
            out.push('|');
        }
        out.push('\n');
        out.push_str(&"-".repeat(width));
        out.push('\n');
    }

    out
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }
