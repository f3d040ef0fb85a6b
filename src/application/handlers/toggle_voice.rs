//! Voice mode toggle handler.
//!
//! Flips the flag and acknowledges; actual audio capture is out of scope.

use std::sync::Arc;

use crate::application::context::SessionContext;
use crate::ports::{ChatMessage, Presenter};

/// Handles the toggle-voice user action.
pub struct ToggleVoiceHandler {
    context: Arc<SessionContext>,
    presenter: Arc<dyn Presenter>,
}

impl ToggleVoiceHandler {
    /// Creates the handler.
    pub fn new(context: Arc<SessionContext>, presenter: Arc<dyn Presenter>) -> Self {
        Self { context, presenter }
    }

    /// Flips voice mode and returns the new value.
    pub async fn handle(&self) -> bool {
        let enabled = self
            .context
            .update_state(|state| state.toggle_voice())
            .await;

        let ack = if enabled {
            "음성 모드를 켰어. 마이크 접근 권한은 데모에서 생략!"
        } else {
            "음성 모드를 껐어."
        };
        self.presenter.show_message(&ChatMessage::companion(ack)).await;
        enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStateStore, RecordingPresenter};
    use crate::config::SessionConfig;

    #[tokio::test]
    async fn toggle_flips_and_acknowledges() {
        let store = Arc::new(InMemoryStateStore::new());
        let context = SessionContext::load(store, SessionConfig::default()).await;
        let presenter = Arc::new(RecordingPresenter::new());
        let handler = ToggleVoiceHandler::new(context, Arc::clone(&presenter) as Arc<dyn Presenter>);

        assert!(handler.handle().await);
        assert!(!handler.handle().await);

        let messages = presenter.messages().await;
        assert!(messages[0].text.contains("켰어"));
        assert!(messages[1].text.contains("껐어"));
    }
}
