//! Rules for a 3x3 tic-tac-toe session: board state and win/draw detection,
//! turn sequencing, running scores, and a fixed-priority bot opponent with a
//! cosmetic thinking delay.
//!
//! The crate is presentation-agnostic: a UI layer feeds cell selections,
//! reset/new-game/mode requests and a periodic tick into a [`Session`] and
//! renders the state it reads back. Nothing here touches input devices,
//! clocks beyond the bot deadline, or storage.

pub use board::*;
pub use engine::*;
pub use error::*;
pub use mark::*;
pub use session::*;
pub use types::*;

pub mod bot;

mod board;
mod engine;
mod error;
mod mark;
mod session;
mod types;
