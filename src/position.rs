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

//! Check and checkmate detection.
//!
//! A side is in check if any opposing piece has a valid move onto its
//! king. Checkmate is check with no move that resolves it. Positions
//! without check are never checkmate, and stalemate is not detected.
//!
//! # Examples
//!
//! ```
//! use playbook::{position, Board, Color};
//!
//! // Fool's mate.
//! let mut board = Board::from_board_fen(b"rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR")?;
//! assert!(position::is_check(&board, Color::White));
//! assert!(position::is_checkmate(&mut board, Color::White));
//! # Ok::<_, playbook::fen::ParseFenError>(())
//! ```

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    color::{ByColor, Color},
    role::Role,
    rules,
    square::Square,
    types::PieceId,
};

/// Finds the king of `color`. If there are several, the first one added
/// to the board wins.
pub fn king(board: &Board, color: Color) -> Option<Square> {
    board
        .iter()
        .find(|(_, piece, _)| piece.role == Role::King && piece.color == color)
        .map(|(_, _, square)| square)
}

/// Finds the king of each side in one pass over the board, with the same
/// tie-break as [`king()`].
pub fn kings(board: &Board) -> ByColor<Option<Square>> {
    let mut kings = ByColor::<Option<Square>>::default();
    for (_, piece, square) in board.iter() {
        if piece.role == Role::King {
            kings.get_mut(piece.color).get_or_insert(square);
        }
    }
    kings
}

/// Opposing pieces with a valid move onto the king of `color`.
pub fn checkers(board: &Board, color: Color) -> Vec<PieceId> {
    let Some(king) = king(board, color) else {
        return Vec::new();
    };

    board
        .iter()
        .filter(|&(_, piece, from)| {
            piece.color != color && rules::is_valid_move_from(board, piece, from, king)
        })
        .map(|(id, _, _)| id)
        .collect()
}

/// Tests if the king of `color` is attacked.
///
/// A board without a king of `color` is logged as an error and treated as
/// not in check.
pub fn is_check(board: &Board, color: Color) -> bool {
    let Some(king) = king(board, color) else {
        log::error!("{color} king not found while testing for check");
        return false;
    };

    board.iter().any(|(_, piece, from)| {
        piece.color != color && rules::is_valid_move_from(board, piece, from, king)
    })
}

/// Tests if moving `id` to `to` is valid and does not leave the mover's own
/// king in check.
pub fn is_legal(board: &mut Board, id: PieceId, to: Square) -> bool {
    let Some(piece) = board.piece(id) else {
        return false;
    };

    rules::is_valid_move(board, id, to)
        && board
            .simulate(id, to, |after| !is_check(after, piece.color))
            .unwrap_or(false)
}

/// Tests if `color` is in check and no move by any of its pieces gets it
/// out of check.
///
/// Every candidate move is played on `board` and taken back again, so the
/// board is unchanged when this returns.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    if !is_check(board, color) {
        return false;
    }

    let movers: Vec<PieceId> = board.by_color(color).collect();

    for id in movers {
        for to in Square::ALL {
            if is_legal(board, id, to) {
                log::debug!("{color} escapes check with {id} to {to}");
                return false;
            }
        }
    }

    true
}

/// Squares the piece `id` can legally move to.
pub fn legal_destinations(board: &mut Board, id: PieceId) -> ArrayVec<Square, 64> {
    Square::ALL
        .into_iter()
        .filter(|&to| is_legal(board, id, to))
        .collect()
}
