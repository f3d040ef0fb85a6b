//! Domain layer - the decision logic of the companion chat.
//!
//! Leaves first: `foundation` holds shared value objects, `replies` the
//! keyword matching pipeline, `sentiment` and `fallback` the backup reply
//! path, and `session` the quota/mood state the orchestrator mutates.

pub mod character;
pub mod fallback;
pub mod foundation;
pub mod replies;
pub mod sentiment;
pub mod session;
