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

//! Move text written after each completed move.
//!
//! This is a short form of algebraic notation: the piece letter (the origin
//! file for pawn captures), `x` for captures, the destination and `+` if
//! the move gives check. There is no disambiguation and checkmate is also
//! written as `+`.
//!
//! # Examples
//!
//! ```
//! use playbook::{notation::Notation, Role, Square};
//!
//! let notation = Notation {
//!     role: Role::Pawn,
//!     from: Square::E4,
//!     to: Square::D5,
//!     capture: true,
//!     check: false,
//! };
//! assert_eq!(notation.to_string(), "exd5");
//! ```

use std::fmt::{self, Write as _};

use crate::{role::Role, square::Square};

/// A completed move, as written to the log.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Notation {
    pub role: Role,
    pub from: Square,
    pub to: Square,
    pub capture: bool,
    pub check: bool,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.capture && self.role == Role::Pawn {
            f.write_char(self.from.file().char())?;
        } else if let Some(symbol) = self.role.symbol() {
            f.write_char(symbol)?;
        }

        if self.capture {
            f.write_char('x')?;
        }

        write!(f, "{}", self.to)?;

        if self.check {
            f.write_char('+')?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notation(role: Role, from: Square, to: Square, capture: bool, check: bool) -> String {
        Notation {
            role,
            from,
            to,
            capture,
            check,
        }
        .to_string()
    }

    #[test]
    fn test_write() {
        assert_eq!(notation(Role::Pawn, Square::E2, Square::E4, false, false), "e4");
        assert_eq!(notation(Role::Knight, Square::G1, Square::F3, false, false), "Nf3");
        assert_eq!(notation(Role::Queen, Square::D8, Square::H4, false, true), "Qh4+");
        assert_eq!(notation(Role::Bishop, Square::C4, Square::F7, true, true), "Bxf7+");
        assert_eq!(notation(Role::Pawn, Square::E4, Square::D5, true, false), "exd5");
        assert_eq!(notation(Role::Pawn, Square::G2, Square::H3, true, true), "gxh3+");
        assert_eq!(notation(Role::King, Square::E1, Square::E2, false, false), "Ke2");
        assert_eq!(notation(Role::Rook, Square::A1, Square::A8, true, false), "Rxa8");
    }
}
