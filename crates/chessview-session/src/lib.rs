//! Click-driven play on top of `chessview-core`: the selection state machine
//! and a text front end for it.

pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod render;
mod session;

pub use config::{SessionConfig, SessionOption};
pub use driver::Driver;
pub use error::SessionError;
pub use session::{ClickOutcome, Session};
