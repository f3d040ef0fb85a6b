//! Ports - Interfaces to external collaborators.
//!
//! The core never talks to a browser, a disk, or a clock directly; it goes
//! through these traits. Adapters provide the concrete implementations.

mod presenter;
mod reply_delay;
mod reply_source;
mod state_store;
mod visibility;

pub use presenter::{ChatMessage, Presenter, Speaker};
pub use reply_delay::ReplyDelay;
pub use reply_source::{ReplySource, ReplySourceError};
pub use state_store::{keys, StateStore, StateStoreError};
pub use visibility::VisibilitySignal;
