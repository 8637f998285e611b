//! Core board types and pseudo-legal move generation.

mod board;
mod color;
mod error;
pub mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod square;
mod square_set;

pub use board::Board;
pub use color::Color;
pub use error::{ParseColorError, PlacementError};
pub use movegen::destinations;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use square::Square;
pub use square_set::SquareSet;
