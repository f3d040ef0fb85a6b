//! Fetch-and-compile step between the reply source and the registry.

use tracing::warn;

use crate::domain::foundation::CharacterId;
use crate::domain::replies::{PatternCompiler, ReplyScope, ReplySet, ReplySets};
use crate::ports::ReplySource;

/// Fetches both keyword mappings for a character and compiles them.
///
/// A scope that is missing, unavailable, or malformed compiles to an empty
/// set; the returned pair is always usable.
pub async fn compile_reply_sets(source: &dyn ReplySource, character_id: &CharacterId) -> ReplySets {
    let character_scope = ReplyScope::Character(character_id.clone());
    let character = compile_scope(source, &character_scope).await;
    let common = compile_scope(source, &ReplyScope::Common).await;

    ReplySets::new(character_id.clone(), character, common)
}

async fn compile_scope(source: &dyn ReplySource, scope: &ReplyScope) -> ReplySet {
    match source.fetch(scope).await {
        Ok(raw) => ReplySet::new(PatternCompiler::compile(&raw)),
        Err(err) => {
            warn!(scope = %scope.source_key(), error = %err, "keyword source fetch failed; using empty reply set");
            ReplySet::empty()
        }
    }
}
