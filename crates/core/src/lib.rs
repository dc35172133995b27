//! Core placement engine - pure, deterministic, and testable
//!
//! This crate holds the board model and the game state the search agents
//! explore. It performs no I/O beyond writing a replay to a caller-supplied
//! writer.
//!
//! # Module Structure
//!
//! - [`piece`]: bit-masked piece geometry and rotation
//! - [`row`]: one board row as a `u64` occupancy field plus render tiles
//! - [`board`]: gravity placement, line clearing, depth and hole queries
//! - [`pieces`]: the standard seven-piece set and piece-stream parsing
//! - [`action`]: the closed set of commands applied to an environment
//! - [`environment`]: board, buffer, pending stream and history; forking
//! - [`replay`]: the textual replay log
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trix_core::{pieces, Action, Environment};
//! use trix_core::types::Configuration;
//!
//! let stream = pieces::parse_pieces("21");
//! let mut env = Environment::new(Arc::new(Configuration::default()), stream);
//!
//! let percept = env.perceive().unwrap();
//! let piece = percept.piece;
//! env.update(Action::PlaceNextPiece { piece, left_offset: 0 }).unwrap();
//!
//! assert_eq!(env.board().height(), 2);
//! assert_eq!(env.remaining(), 1);
//! ```

pub mod action;
pub mod board;
pub mod environment;
pub mod error;
pub mod piece;
pub mod pieces;
pub mod replay;
pub mod row;

pub use trix_types as types;

// Re-export commonly used types for convenience
pub use action::Action;
pub use board::Board;
pub use environment::{Environment, Percept};
pub use error::{EnvironmentError, PieceError};
pub use piece::Piece;
pub use replay::{render_replay, write_replay};
pub use row::Row;
