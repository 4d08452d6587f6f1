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

use std::{error::Error, fmt, str::FromStr};

/// A file of the board, `a` to `h`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Gets the file from its 1-based number, as used by board coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use playbook::File;
    ///
    /// assert_eq!(File::from_number(1), Some(File::A));
    /// assert_eq!(File::from_number(8), Some(File::H));
    /// assert_eq!(File::from_number(0), None);
    /// ```
    pub fn from_number(n: i32) -> Option<File> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| File::ALL.get(index).copied())
    }

    pub fn from_char(ch: char) -> Option<File> {
        match ch {
            'a'..='h' => File::from_number(i32::from(ch as u8 - b'a') + 1),
            _ => None,
        }
    }

    /// 1-based number of the file (`a` is 1).
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32 + 1
    }

    pub fn char(self) -> char {
        char::from(b'a' + self as u8)
    }

    #[inline]
    pub fn offset(self, delta: i32) -> Option<File> {
        File::from_number(self.number() + delta)
    }

    /// `A` to `H`, in this order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A rank of the board, `1` to `8`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    /// Gets the rank from its 1-based number.
    pub fn from_number(n: i32) -> Option<Rank> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Rank::ALL.get(index).copied())
    }

    pub fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1'..='8' => Rank::from_number(i32::from(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// 1-based number of the rank.
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32 + 1
    }

    pub fn char(self) -> char {
        char::from(b'1' + self as u8)
    }

    #[inline]
    pub fn offset(self, delta: i32) -> Option<Rank> {
        Rank::from_number(self.number() + delta)
    }

    /// `First` to `Eighth`, in this order.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

macro_rules! squares {
    ($($sq:ident),+ $(,)?) => {
        /// A square of the board.
        #[allow(missing_docs)]
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
        #[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum Square {
            $($sq),+
        }

        impl Square {
            /// `A1`, `B1`, ..., `G8`, `H8`.
            pub const ALL: [Square; 64] = [$(Square::$sq),+];
        }
    }
}

squares! {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Tries to get a square from 1-based file and rank numbers. Anything
    /// outside of `1..=8` is not a square.
    ///
    /// # Examples
    ///
    /// ```
    /// use playbook::Square;
    ///
    /// assert_eq!(Square::from_coords_checked(5, 2), Some(Square::E2));
    /// assert_eq!(Square::from_coords_checked(0, 0), None);
    /// assert_eq!(Square::from_coords_checked(9, 1), None);
    /// ```
    pub fn from_coords_checked(file: i32, rank: i32) -> Option<Square> {
        Some(Square::from_coords(
            File::from_number(file)?,
            Rank::from_number(rank)?,
        ))
    }

    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square::ALL[file as usize | ((rank as usize) << 3)]
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[self as usize & 7]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[self as usize >> 3]
    }

    /// Signed file and rank distance from `self` to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use playbook::Square;
    ///
    /// assert_eq!(Square::E2.delta(Square::E4), (0, 2));
    /// assert_eq!(Square::G1.delta(Square::F3), (-1, 2));
    /// ```
    #[inline]
    pub const fn delta(self, other: Square) -> (i32, i32) {
        (
            other.file().number() - self.file().number(),
            other.rank().number() - self.rank().number(),
        )
    }

    /// The square `file_delta` files and `rank_delta` ranks away, or `None`
    /// if that falls off the board.
    #[inline]
    pub fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        Some(Square::from_coords(
            self.file().offset(file_delta)?,
            self.rank().offset(rank_delta)?,
        ))
    }

    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file, rank] => Ok(Square::from_coords(
                File::from_char(char::from(file)).ok_or(ParseSquareError)?,
                Rank::from_char(char::from(rank)).ok_or(ParseSquareError)?,
            )),
            _ => Err(ParseSquareError),
        }
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().char(), self.rank().char())
    }
}
