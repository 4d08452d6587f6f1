// This file is part of the playbook library.
// Copyright (C) 2025 The playbook developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::io::{self, BufRead as _, Write as _};

use clap::Parser;
use playbook::{
    fen::Setup,
    game::{Config, Event, Game, Observer},
    view::Highlights,
    Square,
};

/// Plays chess from squares read on stdin, one click per square.
///
/// `?` prints the board and `hints` prints where the selected piece can go.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Starting position, e.g. "4k3/8/8/8/8/8/8/R3K3 w"
    #[arg(long)]
    fen: Option<Setup>,
}

/// Prints every event on its own line.
struct Printer<W> {
    out: W,
}

impl<W: io::Write> Observer for Printer<W> {
    fn event(&mut self, event: &Event) {
        if let Err(err) = writeln!(self.out, "{event}") {
            log::error!("failed to write event: {err}");
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    let config = Config {
        setup: args.fen.unwrap_or_default(),
    };

    if let Err(err) = run(config) {
        log::error!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> io::Result<()> {
    let mut game = Game::new(config);
    let mut view = Highlights::default();
    let mut printer = Printer {
        out: io::stdout().lock(),
    };

    for line in io::stdin().lock().lines() {
        for token in line?.split_whitespace() {
            match token {
                "?" => {
                    write!(printer.out, "{}{view}", game.board())?;
                }
                "hints" => {
                    let hints = game.hints();
                    let hints: Vec<String> = hints.iter().map(Square::to_string).collect();
                    writeln!(printer.out, "{}", hints.join(" "))?;
                }
                _ => match token.parse::<Square>() {
                    Ok(square) => game.click(square, &mut view, &mut printer),
                    Err(err) => log::warn!("ignoring {token:?}: {err}"),
                },
            }
        }

        if game.is_over() {
            log::debug!("game over, {:?} won", game.winner());
            break;
        }
    }

    printer.out.flush()
}
