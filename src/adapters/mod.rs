//! Adapters - Implementations of port interfaces.
//!
//! In-memory and file-backed implementations suitable for the demo binary
//! and for tests; a browser host would supply its own.

mod presenter;
mod reply_delay;
mod reply_source;
mod state_store;
mod visibility;

pub use presenter::{RecordingPresenter, TerminalPresenter};
pub use reply_delay::{FixedReplyDelay, UniformReplyDelay};
pub use reply_source::{StaticReplySource, StaticReplySourceBuilder};
pub use state_store::{InMemoryStateStore, JsonFileStateStore};
pub use visibility::SharedVisibility;
