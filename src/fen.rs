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

//! Parse and write piece placements in the board part of
//! Forsyth-Edwards-Notation, optionally followed by the side to move.
//!
//! # Examples
//!
//! ```
//! use playbook::{fen::Setup, Color, Square};
//!
//! let setup: Setup = "4k3/8/8/8/8/8/4P3/4K3 b".parse()?;
//! assert_eq!(setup.turn, Color::Black);
//! assert_eq!(setup.board.piece_at(Square::E2), Some(Color::White.pawn()));
//! assert_eq!(setup.to_string(), "4k3/8/8/8/8/8/4P3/4K3 b");
//! # Ok::<_, playbook::fen::ParseFenError>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{
    board::Board,
    color::Color,
    square::{File, Rank, Square},
    types::Piece,
};

/// Errors that can occur when parsing a FEN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseFenError {
    InvalidBoard,
    InvalidTurn,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            ParseFenError::InvalidBoard => "invalid board part in fen",
            ParseFenError::InvalidTurn => "invalid turn part in fen",
        })
    }
}

impl Error for ParseFenError {}

impl Board {
    /// Parses the board part of a FEN. Pieces are added rank 8 to rank 1,
    /// file `a` to file `h`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFenError::InvalidBoard`] unless the placement describes
    /// exactly eight ranks of eight squares.
    pub fn from_board_fen(board_fen: &[u8]) -> Result<Board, ParseFenError> {
        let mut board = Board::empty();
        let mut ranks = 0;

        for (row, rank) in board_fen.split(|&ch| ch == b'/').zip(Rank::ALL.into_iter().rev()) {
            ranks += 1;
            let mut file = 0;

            for &ch in row {
                if (b'1'..=b'8').contains(&ch) {
                    file += i32::from(ch - b'0');
                } else {
                    let piece =
                        Piece::from_char(char::from(ch)).ok_or(ParseFenError::InvalidBoard)?;
                    let square = Square::from_coords(
                        File::from_number(file + 1).ok_or(ParseFenError::InvalidBoard)?,
                        rank,
                    );
                    board
                        .insert(piece, square)
                        .map_err(|_| ParseFenError::InvalidBoard)?;
                    file += 1;
                }

                if file > 8 {
                    return Err(ParseFenError::InvalidBoard);
                }
            }

            if file != 8 {
                return Err(ParseFenError::InvalidBoard);
            }
        }

        if ranks != 8 || board_fen.split(|&ch| ch == b'/').count() != 8 {
            return Err(ParseFenError::InvalidBoard);
        }

        Ok(board)
    }

    /// Writes the board part of a FEN.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(64);

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty: u8 = 0;

            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }

            if rank > Rank::First {
                fen.push('/');
            }
        }

        fen
    }
}

/// A starting point for a game: pieces and the side to move.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Setup {
    pub board: Board,
    pub turn: Color,
}

impl Default for Setup {
    fn default() -> Setup {
        Setup {
            board: Board::default(),
            turn: Color::White,
        }
    }
}

impl Setup {
    /// Parses `<board> [w|b]`. White moves if the turn is omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFenError`] if either part is malformed or anything
    /// follows the turn.
    pub fn from_ascii(fen: &[u8]) -> Result<Setup, ParseFenError> {
        let mut parts = fen.split(|&ch| ch == b' ').filter(|part| !part.is_empty());

        let board = Board::from_board_fen(parts.next().ok_or(ParseFenError::InvalidBoard)?)?;

        let turn = match parts.next() {
            None | Some(b"w") => Color::White,
            Some(b"b") => Color::Black,
            Some(_) => return Err(ParseFenError::InvalidTurn),
        };

        if parts.next().is_some() {
            return Err(ParseFenError::InvalidTurn);
        }

        Ok(Setup { board, turn })
    }
}

impl FromStr for Setup {
    type Err = ParseFenError;

    fn from_str(fen: &str) -> Result<Setup, ParseFenError> {
        Setup::from_ascii(fen.as_bytes())
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board.board_fen(), self.turn.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_fen() {
        assert_eq!(
            Board::default().board_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(
            Setup::default().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
        );
    }

    #[test]
    fn test_read_write() {
        for fen in [
            "8/8/8/8/8/8/8/8",
            "4k3/8/8/8/8/8/8/4K3",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "7k/8/8/8/8/8/PPP5/1K6",
            "1p6/2p5/3p4/4p3/5p2/6p1/7p/p6p",
        ] {
            let board = Board::from_board_fen(fen.as_bytes()).expect("valid fen");
            assert_eq!(board.board_fen(), fen);
        }
    }

    #[test]
    fn test_placement_order() {
        let board = Board::from_board_fen(b"4k3/8/8/8/8/8/8/R3K3").expect("valid fen");
        let order: Vec<Square> = board.iter().map(|(_, _, sq)| sq).collect();
        assert_eq!(order, [Square::E8, Square::A1, Square::E1]);
    }

    #[test]
    fn test_invalid() {
        for fen in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "44k/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "x7/8/8/8/8/8/8/8",
        ] {
            assert_eq!(
                Board::from_board_fen(fen.as_bytes()),
                Err(ParseFenError::InvalidBoard),
                "{fen:?}"
            );
        }
    }

    #[test]
    fn test_setup_turn() {
        let setup: Setup = "4k3/8/8/8/8/8/8/4K3".parse().expect("valid setup");
        assert_eq!(setup.turn, Color::White);

        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 x".parse::<Setup>(),
            Err(ParseFenError::InvalidTurn)
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 w 0 1".parse::<Setup>(),
            Err(ParseFenError::InvalidTurn)
        );
    }
}
