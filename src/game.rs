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

//! Click-driven play.
//!
//! A [`Game`] turns clicks on squares into moves: the first click selects
//! a piece of the side to move, the second tries to move it there. What
//! happens is reported to an [`Observer`] as [`Event`]s and drawn through a
//! [`View`].
//!
//! # Examples
//!
//! ```
//! use playbook::{game::Transcript, view::Highlights, Game, Square};
//!
//! let mut game = Game::default();
//! let mut view = Highlights::default();
//! let mut transcript = Transcript::default();
//!
//! for square in [Square::F2, Square::F3, Square::E7, Square::E5, Square::G2, Square::G4, Square::D8, Square::H4] {
//!     game.click(square, &mut view, &mut transcript);
//! }
//!
//! assert_eq!(transcript.lines().last().map(String::as_str), Some("Black wins by checkmate."));
//! assert!(game.is_over());
//! ```

use std::fmt;

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    color::Color,
    fen::Setup,
    notation::Notation,
    position,
    role::Role,
    rules,
    square::Square,
    types::PieceId,
    view::View,
};

/// Selection state of a [`Game`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum State {
    /// Waiting for a click on a piece of the side to move.
    AwaitingSelection,
    /// A piece is selected. The next click tries to move it.
    PieceSelected(PieceId),
    /// Checkmate has been reached. Clicks are ignored.
    GameOver,
}

/// Something that happened in response to a click.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Event {
    /// A piece of the side to move was selected.
    Selected {
        color: Color,
        role: Role,
        square: Square,
    },
    /// The selected piece cannot move to the clicked square.
    IllegalMove,
    /// The move would leave the mover's own king in check.
    KingInCheck,
    /// A move was completed.
    Moved(Notation),
    /// The side that just moved has checkmated the other.
    Checkmate { winner: Color },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Event::Selected {
                color,
                role,
                square,
            } => {
                write!(f, "{color} selects ")?;
                if let Some(symbol) = role.symbol() {
                    write!(f, "{symbol}")?;
                }
                write!(f, "{square}")
            }
            Event::IllegalMove => f.write_str("Illegal move"),
            Event::KingInCheck => f.write_str("Illegal move, King in check"),
            Event::Moved(ref notation) => write!(f, "{notation}"),
            Event::Checkmate { winner } => write!(f, "{winner} wins by checkmate."),
        }
    }
}

/// Consumes the [`Event`]s of a [`Game`].
pub trait Observer {
    fn event(&mut self, event: &Event);
}

/// Ignores all events.
impl Observer for () {
    fn event(&mut self, _event: &Event) {}
}

/// Writes each event as one line to the [`log`] facade, at info level.
#[derive(Copy, Clone, Default, Debug)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn event(&mut self, event: &Event) {
        log::info!("{event}");
    }
}

/// Collects each event as one line of text.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Observer for Transcript {
    fn event(&mut self, event: &Event) {
        self.lines.push(event.to_string());
    }
}

/// Settings for a new [`Game`].
#[derive(Clone, Default, Debug)]
pub struct Config {
    /// Pieces and side to move at the start.
    ///
    /// Defaults to the standard starting position, white to move.
    pub setup: Setup,
}

/// A game in progress. Owns the board and is the only thing that changes
/// it for good.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    state: State,
    winner: Option<Color>,
}

impl Default for Game {
    fn default() -> Game {
        Game::new(Config::default())
    }
}

impl Game {
    pub fn new(config: Config) -> Game {
        Game {
            board: config.setup.board,
            turn: config.setup.turn,
            state: State::AwaitingSelection,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The currently selected piece.
    pub fn selected(&self) -> Option<PieceId> {
        match self.state {
            State::PieceSelected(id) => Some(id),
            _ => None,
        }
    }

    /// The side that delivered checkmate, once the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.state == State::GameOver
    }

    /// Squares the selected piece can legally move to.
    pub fn hints(&mut self) -> ArrayVec<Square, 64> {
        match self.selected() {
            Some(id) => position::legal_destinations(&mut self.board, id),
            None => ArrayVec::new(),
        }
    }

    /// Handles a click on 1-based board coordinates. Clicks off the board
    /// are ignored.
    pub fn click_coords<V, O>(&mut self, file: i32, rank: i32, view: &mut V, observer: &mut O)
    where
        V: View + ?Sized,
        O: Observer + ?Sized,
    {
        match Square::from_coords_checked(file, rank) {
            Some(square) => self.click(square, view, observer),
            None => log::debug!("ignoring click outside the board at ({file}, {rank})"),
        }
    }

    /// Handles a click on `square`.
    pub fn click<V, O>(&mut self, square: Square, view: &mut V, observer: &mut O)
    where
        V: View + ?Sized,
        O: Observer + ?Sized,
    {
        match self.state {
            State::GameOver => (),
            State::AwaitingSelection => self.select(square, view, observer),
            State::PieceSelected(id) => {
                self.state = State::AwaitingSelection;
                self.try_move(id, square, view, observer);
            }
        }
    }

    fn select<V, O>(&mut self, square: Square, view: &mut V, observer: &mut O)
    where
        V: View + ?Sized,
        O: Observer + ?Sized,
    {
        let Some(id) = self.board.id_at(square) else {
            return;
        };
        let Some(piece) = self.board.piece(id) else {
            return;
        };
        if piece.color != self.turn {
            return;
        }

        view.clear_highlights();
        view.set_selected_square(square);
        self.state = State::PieceSelected(id);

        observer.event(&Event::Selected {
            color: piece.color,
            role: piece.role,
            square,
        });
    }

    fn try_move<V, O>(&mut self, id: PieceId, to: Square, view: &mut V, observer: &mut O)
    where
        V: View + ?Sized,
        O: Observer + ?Sized,
    {
        let Some((piece, from)) = self.board.get(id).filter(|(p, _)| p.color == self.turn) else {
            log::debug!("selection {id} is no longer a piece of the side to move");
            return;
        };

        if !rules::is_valid_move_from(&self.board, piece, from, to) {
            observer.event(&Event::IllegalMove);
            return;
        }

        let Some(ply) = self.board.apply(id, to) else {
            observer.event(&Event::IllegalMove);
            return;
        };

        if position::is_check(&self.board, piece.color) {
            log::debug!(
                "taking back {} from {} to {}, it exposes the {} king",
                ply.id(),
                ply.from(),
                ply.to(),
                piece.color
            );
            self.board.undo(ply);
            observer.event(&Event::KingInCheck);
            return;
        }

        let opponent = !piece.color;
        self.turn = opponent;

        let check = position::is_check(&self.board, opponent);
        observer.event(&Event::Moved(Notation {
            role: piece.role,
            from,
            to,
            capture: ply.is_capture(),
            check,
        }));
        view.set_move_square(to);

        let king = *position::kings(&self.board).get(opponent);

        if position::is_checkmate(&mut self.board, opponent) {
            self.winner = Some(piece.color);
            self.state = State::GameOver;
            observer.event(&Event::Checkmate {
                winner: piece.color,
            });
            if let Some(king) = king {
                view.set_checkmate_highlight(king);
            }
        } else if check {
            if let Some(king) = king {
                view.set_check_highlight(king);
            }
        } else {
            view.clear_highlights();
        }
    }
}
