//! Foundation layer - shared value objects and error types.
//!
//! These types carry no behavior specific to any one module; they are the
//! vocabulary the rest of the domain is written in.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{CharacterId, MessageId};
pub use timestamp::Timestamp;
