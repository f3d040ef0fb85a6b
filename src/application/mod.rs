//! Application layer - orchestration of domain operations through ports.

pub mod context;
pub mod handlers;
pub mod orchestrator;
pub mod quota_ticker;
pub mod reply_loader;

pub use context::SessionContext;
pub use orchestrator::{ConversationOrchestrator, TurnError, TurnOutcome, TurnResult};
pub use quota_ticker::QuotaTicker;
pub use reply_loader::compile_reply_sets;
