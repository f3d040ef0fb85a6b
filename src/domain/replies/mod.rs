//! Keyword reply pipeline.
//!
//! A raw keyword mapping is compiled once per reload into an ordered list of
//! matchers (`PatternCompiler`), held per scope (`ReplySet`), and resolved
//! per turn with character-then-common priority (`ReplySets::resolve`).
//! `ReplySetRegistry` owns the active sets and swaps them atomically.

mod pattern;
mod registry;
mod set;

pub use pattern::{PatternCompiler, ReplyEntry};
pub use registry::ReplySetRegistry;
pub use set::{ReplyScope, ReplySet, ReplySets};
