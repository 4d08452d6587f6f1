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

//! The set of pieces on the board.

use std::{
    error::Error,
    fmt::{self, Write as _},
};

use crate::{
    color::Color,
    role::Role,
    square::{File, Rank, Square},
    types::{Piece, PieceId},
};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
struct Slot {
    piece: Piece,
    square: Square,
    live: bool,
}

/// Error when placing a piece on a square that is already taken.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OccupiedError {
    pub square: Square,
}

impl fmt::Display for OccupiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square {} is already occupied", self.square)
    }
}

impl Error for OccupiedError {}

/// A set of pieces, each with a position.
///
/// Pieces are stored in an append-only arena and addressed by [`PieceId`].
/// Capturing a piece marks it dead rather than removing it, so handles
/// never shift and a captured piece can be reinstated exactly where it was.
/// A square index is kept alongside for constant time occupancy queries.
///
/// # Examples
///
/// ```
/// use playbook::{Board, Color, Square};
///
/// let board = Board::default();
/// assert_eq!(board.len(), 32);
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
/// assert!(!board.is_occupied(Square::E4));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    slots: Vec<Slot>,
    squares: [Option<PieceId>; 64],
}

/// Record of a ply applied by [`Board::apply()`], used to take it back.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[must_use]
pub struct Ply {
    id: PieceId,
    from: Square,
    to: Square,
    captured: Option<PieceId>,
}

impl Ply {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn captured(&self) -> Option<PieceId> {
        self.captured
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Board {
        Board {
            slots: Vec::with_capacity(32),
            squares: [None; 64],
        }
    }

    /// The standard starting arrangement. Pawns come first, alternating
    /// white and black for each file, followed by the white and black
    /// rooks, knights, bishops, queens and kings.
    pub fn new() -> Board {
        let mut board = Board::empty();

        for file in File::ALL {
            board.put(Color::White.pawn(), Square::from_coords(file, Rank::Second));
            board.put(Color::Black.pawn(), Square::from_coords(file, Rank::Seventh));
        }

        let back_rank: [(Role, &[File]); 5] = [
            (Role::Rook, &[File::A, File::H]),
            (Role::Knight, &[File::B, File::G]),
            (Role::Bishop, &[File::C, File::F]),
            (Role::Queen, &[File::D]),
            (Role::King, &[File::E]),
        ];

        for (role, files) in back_rank {
            for color in Color::ALL {
                for &file in files {
                    let rank = color.fold(Rank::First, Rank::Eighth);
                    board.put(role.of(color), Square::from_coords(file, rank));
                }
            }
        }

        board
    }

    fn put(&mut self, piece: Piece, square: Square) -> PieceId {
        let id = PieceId(self.slots.len() as u32);
        self.slots.push(Slot {
            piece,
            square,
            live: true,
        });
        self.squares[square as usize] = Some(id);
        id
    }

    /// Adds a piece to the set.
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedError`] if another piece already stands on
    /// `square`.
    pub fn insert(&mut self, piece: Piece, square: Square) -> Result<PieceId, OccupiedError> {
        if self.is_occupied(square) {
            return Err(OccupiedError { square });
        }
        Ok(self.put(piece, square))
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares[square as usize].is_some()
    }

    #[inline]
    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.id_at(square).map(|id| self.slots[id.index()].piece)
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Gets a live piece and its square.
    pub fn get(&self, id: PieceId) -> Option<(Piece, Square)> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.live)
            .map(|slot| (slot.piece, slot.square))
    }

    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.get(id).map(|(piece, _)| piece)
    }

    pub fn square_of(&self, id: PieceId) -> Option<Square> {
        self.get(id).map(|(_, square)| square)
    }

    /// Live pieces in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, Piece, Square)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.live)
            .map(|(i, slot)| (PieceId(i as u32), slot.piece, slot.square))
    }

    /// Handles of the live pieces of `color`, in the order they were added.
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.iter()
            .filter(move |(_, piece, _)| piece.color == color)
            .map(|(id, _, _)| id)
    }

    /// Number of live pieces.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.live).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the piece `id` to `to`, capturing an opposing piece standing
    /// there. Does not check whether the move is legal.
    ///
    /// Returns `None` and leaves the board untouched if `id` is not a live
    /// piece or `to` holds a piece of the same color.
    pub fn apply(&mut self, id: PieceId, to: Square) -> Option<Ply> {
        let (piece, from) = self.get(id)?;

        let captured = match self.id_at(to) {
            Some(other) if other == id => None,
            Some(other) if self.slots[other.index()].piece.color == piece.color => return None,
            Some(other) => {
                self.slots[other.index()].live = false;
                Some(other)
            }
            None => None,
        };

        self.squares[from as usize] = None;
        self.squares[to as usize] = Some(id);
        self.slots[id.index()].square = to;

        Some(Ply {
            id,
            from,
            to,
            captured,
        })
    }

    /// Takes back a ply returned by the most recent [`Board::apply()`].
    pub fn undo(&mut self, ply: Ply) {
        self.slots[ply.id.index()].square = ply.from;
        self.squares[ply.to as usize] = None;
        self.squares[ply.from as usize] = Some(ply.id);

        if let Some(captured) = ply.captured {
            // A captured piece keeps its square while dead.
            self.slots[captured.index()].live = true;
            self.squares[ply.to as usize] = Some(captured);
        }
    }

    /// Evaluates `f` on the board as it would be after moving `id` to `to`.
    /// The board is restored before returning.
    ///
    /// Returns `None` if the ply cannot be applied at all
    /// (see [`Board::apply()`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use playbook::{Board, Square};
    ///
    /// let mut board = Board::default();
    /// let before = board.clone();
    /// let pawn = board.id_at(Square::E2).unwrap();
    ///
    /// let occupied = board.simulate(pawn, Square::E4, |b| b.is_occupied(Square::E4));
    /// assert_eq!(occupied, Some(true));
    /// assert_eq!(board, before);
    /// ```
    pub fn simulate<T, F>(&mut self, id: PieceId, to: Square, f: F) -> Option<T>
    where
        F: FnOnce(&Board) -> T,
    {
        let ply = self.apply(id, to)?;
        let result = f(self);
        self.undo(ply);
        Some(result)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let square = Square::from_coords(file, rank);
                f.write_char(self.piece_at(square).map_or('.', Piece::char))?;
                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(board: &Board) {
        for (id, _, square) in board.iter() {
            assert_eq!(board.id_at(square), Some(id), "index out of sync at {square}");
        }
        let indexed = Square::ALL.iter().filter(|&&sq| board.is_occupied(sq)).count();
        assert_eq!(indexed, board.len());
    }

    #[test]
    fn test_starting_arrangement() {
        let board = Board::default();
        assert_eq!(board.len(), 32);
        assert_consistent(&board);

        assert_eq!(board.piece_at(Square::A1), Some(Color::White.rook()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::G1), Some(Color::White.knight()));
        assert_eq!(board.piece_at(Square::C8), Some(Color::Black.bishop()));
        assert_eq!(board.piece_at(Square::H7), Some(Color::Black.pawn()));
        assert_eq!(board.by_color(Color::White).count(), 16);
        assert_eq!(board.by_color(Color::Black).count(), 16);

        // Pawns come first, kings last.
        let order: Vec<Piece> = board.iter().map(|(_, piece, _)| piece).collect();
        assert_eq!(order[0], Color::White.pawn());
        assert_eq!(order[1], Color::Black.pawn());
        assert_eq!(order[30], Color::White.king());
        assert_eq!(order[31], Color::Black.king());
    }

    #[test]
    fn test_insert_occupied() {
        let mut board = Board::empty();
        board.insert(Color::White.king(), Square::E1).expect("empty square");
        assert_eq!(
            board.insert(Color::Black.king(), Square::E1),
            Err(OccupiedError { square: Square::E1 })
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_apply_and_undo_capture() {
        let mut board = Board::empty();
        let rook = board.insert(Color::White.rook(), Square::A1).unwrap();
        let knight = board.insert(Color::Black.knight(), Square::A5).unwrap();
        let king = board.insert(Color::White.king(), Square::E1).unwrap();
        let before = board.clone();

        let ply = board.apply(rook, Square::A5).expect("capture");
        assert_eq!(ply.id(), rook);
        assert_eq!(ply.from(), Square::A1);
        assert_eq!(ply.to(), Square::A5);
        assert!(ply.is_capture());
        assert_eq!(ply.captured(), Some(knight));
        assert_eq!(board.get(knight), None);
        assert_eq!(board.square_of(rook), Some(Square::A5));
        assert_eq!(board.len(), 2);
        assert_consistent(&board);

        board.undo(ply);
        assert_eq!(board, before);
        assert_eq!(board.square_of(king), Some(Square::E1));
        assert_eq!(board.square_of(knight), Some(Square::A5));
    }

    #[test]
    fn test_apply_refuses_own_piece() {
        let mut board = Board::default();
        let before = board.clone();
        let rook = board.id_at(Square::A1).unwrap();
        assert_eq!(board.apply(rook, Square::A2), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_captured_handle_stays_dead() {
        let mut board = Board::empty();
        let queen = board.insert(Color::White.queen(), Square::D1).unwrap();
        let pawn = board.insert(Color::Black.pawn(), Square::D7).unwrap();

        let _ = board.apply(queen, Square::D7).unwrap();
        assert_eq!(board.apply(pawn, Square::D6), None);
        assert_eq!(board.iter().count(), 1);
    }

    #[test]
    fn test_simulate_restores() {
        let mut board = Board::default();
        let before = board.clone();

        for (id, _, _) in before.iter() {
            for to in Square::ALL {
                board.simulate(id, to, |_| ());
                assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn test_display() {
        let board = Board::default();
        assert_eq!(
            board.to_string(),
            "r n b q k b n r\n\
             p p p p p p p p\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             P P P P P P P P\n\
             R N B Q K B N R\n"
        );
    }
}
