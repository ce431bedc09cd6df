//! Game orchestration
//!
//! Secret selection, input buffering, the round state machine, and the
//! session object tying them together.

mod buffer;
mod config;
mod selector;
mod session;
mod state;
mod stats;

pub use buffer::InputBuffer;
pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use selector::WordSelector;
pub use session::{KeyEvent, Response, Session};
pub use state::{GameState, GameStatus, GuessRecord, Outcome};
pub use stats::Statistics;
