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

//! Movement rules for each piece type.
//!
//! Legality here ignores whether the mover's own king is left in check.
//! See [`position`](crate::position) for that.
//!
//! # Examples
//!
//! ```
//! use playbook::{rules, Board, Square};
//!
//! let board = Board::default();
//! let knight = board.id_at(Square::G1).unwrap();
//!
//! assert!(rules::is_valid_move(&board, knight, Square::F3));
//! assert!(!rules::is_valid_move(&board, knight, Square::E2)); // own pawn
//! ```

use std::iter::FusedIterator;

use crate::{
    board::Board,
    color::Color,
    role::Role,
    square::Square,
    types::{Piece, PieceId},
};

/// Geometry rule of one piece type: can a piece of `color` go from the
/// first to the second square on `board`. Only called for distinct squares
/// whose target does not hold a piece of `color`.
pub type Geometry = fn(board: &Board, color: Color, from: Square, to: Square) -> bool;

/// Looks up the geometry rule of `role`.
pub const fn geometry(role: Role) -> Geometry {
    match role {
        Role::Pawn => pawn,
        Role::Knight => knight,
        Role::Bishop => bishop,
        Role::Rook => rook,
        Role::Queen => queen,
        Role::King => king,
    }
}

/// Tests if the live piece `id` may move to `to`. Dead or unknown handles
/// never have a valid move.
pub fn is_valid_move(board: &Board, id: PieceId, to: Square) -> bool {
    board
        .get(id)
        .is_some_and(|(piece, from)| is_valid_move_from(board, piece, from, to))
}

/// Tests if `piece`, standing on `from`, may move to `to`.
pub fn is_valid_move_from(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    if board.color_at(to) == Some(piece.color) {
        return false;
    }

    geometry(piece.role)(board, piece.color, from, to)
}

/// Tests if no piece stands strictly between `from` and `to`.
///
/// # Examples
///
/// ```
/// use playbook::{rules, Board, Square};
///
/// let board = Board::default();
/// assert!(!rules::is_path_clear(&board, Square::A1, Square::A8));
/// assert!(rules::is_path_clear(&board, Square::A2, Square::A7));
/// ```
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    between(from, to).all(|sq| !board.is_occupied(sq))
}

/// Squares strictly between `from` and `to`, stepping one file and/or one
/// rank at a time towards `to`.
///
/// Meaningful for squares on a common line. For other pairs the walk takes
/// as many steps as the longer distance and skips anything off the board.
pub fn between(from: Square, to: Square) -> Between {
    let (df, dr) = from.delta(to);
    Between {
        from,
        step: (df.signum(), dr.signum()),
        next: 1,
        steps: df.abs().max(dr.abs()),
    }
}

/// Iterator returned by [`between()`].
#[derive(Clone, Debug)]
pub struct Between {
    from: Square,
    step: (i32, i32),
    next: i32,
    steps: i32,
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while self.next < self.steps {
            let i = self.next;
            self.next += 1;
            if let Some(sq) = self.from.offset(i * self.step.0, i * self.step.1) {
                return Some(sq);
            }
        }
        None
    }
}

impl FusedIterator for Between {}

fn pawn(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    let forward = color.forward();

    if df == 0 && dr == forward {
        return !board.is_occupied(to);
    }

    if df == 0 && dr == 2 * forward {
        return from.rank() == color.pawn_rank()
            && from
                .offset(0, forward)
                .is_some_and(|step| !board.is_occupied(step))
            && !board.is_occupied(to);
    }

    df.abs() == 1 && dr == forward && board.color_at(to) == Some(!color)
}

fn knight(_board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}

fn bishop(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df.abs() == dr.abs() && is_path_clear(board, from, to)
}

fn rook(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    (df == 0 || dr == 0) && is_path_clear(board, from, to)
}

fn queen(board: &Board, color: Color, from: Square, to: Square) -> bool {
    bishop(board, color, from, to) || rook(board, color, from, to)
}

fn king(_board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df.abs() <= 1 && dr.abs() <= 1
}
