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

//! Square highlights shown by whatever draws the board.

use std::fmt;

use crate::square::Square;

/// Receives highlight updates from a [`Game`](crate::Game).
///
/// All methods default to doing nothing, so a view only needs to implement
/// what it draws.
pub trait View {
    /// Called when a piece is selected and when a move gives neither check
    /// nor checkmate. Clears the check and checkmate highlights.
    fn clear_highlights(&mut self) {}

    fn set_selected_square(&mut self, _square: Square) {}

    /// Called with the destination of each completed move.
    fn set_move_square(&mut self, _square: Square) {}

    /// Called with the square of a king that has just been put in check.
    fn set_check_highlight(&mut self, _square: Square) {}

    /// Called with the square of a king that has just been checkmated.
    fn set_checkmate_highlight(&mut self, _square: Square) {}
}

/// A view that draws nothing.
impl View for () {}

/// Kinds of highlight kept by [`Highlights`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Highlight {
    Selected,
    Move,
    Check,
    Checkmate,
}

impl Highlight {
    /// `Selected`, `Move`, `Check` and `Checkmate`, in this order.
    pub const ALL: [Highlight; 4] = [
        Highlight::Selected,
        Highlight::Move,
        Highlight::Check,
        Highlight::Checkmate,
    ];
}

/// Current highlights, each either on one square or absent.
///
/// # Examples
///
/// ```
/// use playbook::{view::{Highlight, Highlights}, Square};
///
/// let mut highlights = Highlights::default();
/// highlights.set_coords(Highlight::Check, 5, 1);
/// assert_eq!(highlights.get(Highlight::Check), Some(Square::E1));
///
/// // (0, 0) and other coordinates off the board mean no highlight.
/// highlights.set_coords(Highlight::Check, 0, 0);
/// assert_eq!(highlights.get(Highlight::Check), None);
/// ```
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct Highlights {
    selected: Option<Square>,
    last_move: Option<Square>,
    check: Option<Square>,
    checkmate: Option<Square>,
}

impl Highlights {
    pub fn get(&self, highlight: Highlight) -> Option<Square> {
        match highlight {
            Highlight::Selected => self.selected,
            Highlight::Move => self.last_move,
            Highlight::Check => self.check,
            Highlight::Checkmate => self.checkmate,
        }
    }

    pub fn set(&mut self, highlight: Highlight, square: Option<Square>) {
        *match highlight {
            Highlight::Selected => &mut self.selected,
            Highlight::Move => &mut self.last_move,
            Highlight::Check => &mut self.check,
            Highlight::Checkmate => &mut self.checkmate,
        } = square;
    }

    /// Sets a highlight from 1-based file and rank numbers. Coordinates off
    /// the board remove the highlight.
    pub fn set_coords(&mut self, highlight: Highlight, file: i32, rank: i32) {
        self.set(highlight, Square::from_coords_checked(file, rank));
    }

    /// Highlights that are present, with their squares.
    pub fn iter(&self) -> impl Iterator<Item = (Highlight, Square)> + '_ {
        Highlight::ALL
            .into_iter()
            .filter_map(|highlight| self.get(highlight).map(|square| (highlight, square)))
    }
}

/// One line per present highlight, such as `Move: e4`.
impl fmt::Display for Highlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (highlight, square) in self.iter() {
            writeln!(f, "{highlight:?}: {square}")?;
        }
        Ok(())
    }
}

impl View for Highlights {
    fn clear_highlights(&mut self) {
        self.check = None;
        self.checkmate = None;
    }

    fn set_selected_square(&mut self, square: Square) {
        self.selected = Some(square);
    }

    fn set_move_square(&mut self, square: Square) {
        self.last_move = Some(square);
    }

    fn set_check_highlight(&mut self, square: Square) {
        self.check = Some(square);
    }

    fn set_checkmate_highlight(&mut self, square: Square) {
        self.checkmate = Some(square);
    }
}
