//! Session reset handler.
//!
//! The only path by which the quota counter increases: restore the fixed
//! full grant and re-enable input.

use std::sync::Arc;

use tracing::info;

use crate::application::context::SessionContext;
use crate::ports::{ChatMessage, Presenter};

/// Handles the refresh-session user action.
pub struct ResetSessionHandler {
    context: Arc<SessionContext>,
    presenter: Arc<dyn Presenter>,
}

impl ResetSessionHandler {
    /// Creates the handler.
    pub fn new(context: Arc<SessionContext>, presenter: Arc<dyn Presenter>) -> Self {
        Self { context, presenter }
    }

    /// Restores the full quota grant and re-arms the session.
    pub async fn handle(&self) {
        info!("resetting session quota");
        self.context
            .update_state(|state| state.quota_mut().reset())
            .await;
        self.context.persist_quota().await;

        self.presenter
            .refresh_session(&self.context.snapshot().await)
            .await;
        self.presenter
            .show_message(&ChatMessage::companion("세션을 새로고침했어. 다시 시작해볼까?"))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStateStore, RecordingPresenter};
    use crate::config::SessionConfig;

    #[tokio::test]
    async fn reset_unlocks_and_restores_full_grant() {
        let store = Arc::new(InMemoryStateStore::new());
        let context = SessionContext::load(store, SessionConfig::default()).await;
        context
            .update_state(|state| {
                state.quota_mut().charge_message(10 * 60);
            })
            .await;
        assert!(context.is_locked().await);

        let handler =
            ResetSessionHandler::new(Arc::clone(&context), Arc::new(RecordingPresenter::new()));
        handler.handle().await;

        assert!(!context.is_locked().await);
        assert_eq!(
            context.snapshot().await.quota().free_seconds_remaining(),
            600
        );
    }
}
