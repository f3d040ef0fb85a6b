//! Registry owning the active reply sets.
//!
//! The registry hands out `Arc` snapshots; a reload builds the replacement
//! pair off to the side and swaps it in under a short write lock. Turns that
//! already captured a snapshot keep resolving against it (snapshot
//! semantics), so the swap is atomic from every caller's perspective.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::CharacterId;

use super::set::ReplySets;

/// Holds the compiled reply sets for the active character and the common
/// scope; replaced wholesale on character switch.
#[derive(Debug)]
pub struct ReplySetRegistry {
    current: RwLock<Arc<ReplySets>>,
}

impl ReplySetRegistry {
    /// Creates a registry seeded with an initial compiled pair.
    pub fn new(initial: ReplySets) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Atomically replaces both held sets with a freshly compiled pair.
    pub async fn install(&self, sets: ReplySets) {
        debug!(
            character = %sets.character_id(),
            character_entries = sets.character_set().len(),
            common_entries = sets.common_set().len(),
            "installing reply sets"
        );
        *self.current.write().await = Arc::new(sets);
    }

    /// Returns the current sets. Callers resolve an entire turn against one
    /// snapshot; a concurrent install does not disturb it.
    pub async fn snapshot(&self) -> Arc<ReplySets> {
        Arc::clone(&*self.current.read().await)
    }

    /// Returns the character the current sets were compiled for.
    pub async fn active_character(&self) -> CharacterId {
        self.current.read().await.character_id().clone()
    }
}
