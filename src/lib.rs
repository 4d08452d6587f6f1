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

//! A small chess rules engine driven by clicks on squares.
//!
//! # Examples
//!
//! Validate moves on a board:
//!
//! ```
//! use playbook::{rules, Board, Square};
//!
//! let board = Board::default();
//! let pawn = board.id_at(Square::E2).unwrap();
//! assert!(rules::is_valid_move(&board, pawn, Square::E4));
//! assert!(!rules::is_valid_move(&board, pawn, Square::E5));
//! ```
//!
//! Detect check and checkmate:
//!
//! ```
//! use playbook::{position, Board, Color};
//!
//! let mut board = Board::default();
//! assert!(!position::is_check(&board, Color::White));
//! assert!(!position::is_checkmate(&mut board, Color::White));
//! ```
//!
//! Play a game by clicking squares:
//!
//! ```
//! use playbook::{game::Transcript, Color, Game, Square};
//!
//! let mut game = Game::default();
//! let mut transcript = Transcript::default();
//! game.click(Square::G1, &mut (), &mut transcript);
//! game.click(Square::F3, &mut (), &mut transcript);
//!
//! assert_eq!(transcript.lines(), ["White selects Ng1", "Nf3"]);
//! assert_eq!(game.turn(), Color::Black);
//! ```
//!
//! Positions can be given in the board part of [FEN](fen).
//!
//! There is no castling, en passant or promotion. Stalemate and draws are
//! not detected.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for small value types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod role;
mod square;
mod types;

pub mod board;
pub mod fen;
pub mod game;
pub mod notation;
pub mod position;
pub mod rules;
pub mod view;

pub use board::{Board, OccupiedError, Ply};
pub use color::{ByColor, Color, ParseColorError};
pub use game::{Config, Event, Game, LogObserver, Observer, State, Transcript};
pub use role::Role;
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::{Piece, PieceId};
pub use view::View;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for PieceId {}
