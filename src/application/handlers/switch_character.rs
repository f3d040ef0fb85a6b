//! Character switch handler.
//!
//! Switching the active character persists the selection, reloads both
//! reply sets, and installs them atomically. No turn resolved after the
//! install can observe a mixed-character view; a turn already holding the
//! previous snapshot completes against it.

use std::sync::Arc;

use tracing::info;

use crate::application::context::SessionContext;
use crate::application::reply_loader::compile_reply_sets;
use crate::domain::character::Character;
use crate::domain::replies::ReplySetRegistry;
use crate::ports::{ChatMessage, Presenter, ReplySource};

/// Handles the choose-character user action.
pub struct SwitchCharacterHandler {
    context: Arc<SessionContext>,
    registry: Arc<ReplySetRegistry>,
    source: Arc<dyn ReplySource>,
    presenter: Arc<dyn Presenter>,
}

impl SwitchCharacterHandler {
    /// Creates the handler.
    pub fn new(
        context: Arc<SessionContext>,
        registry: Arc<ReplySetRegistry>,
        source: Arc<dyn ReplySource>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            context,
            registry,
            source,
            presenter,
        }
    }

    /// Makes the given character active and reloads its reply sets.
    pub async fn handle(&self, character: Character) {
        info!(character = %character.id(), "switching character");

        self.context.set_character(character.clone()).await;

        let sets = compile_reply_sets(self.source.as_ref(), character.id()).await;
        self.registry.install(sets).await;

        self.presenter
            .refresh_session(&self.context.snapshot().await)
            .await;
        self.presenter
            .show_message(&ChatMessage::companion(format!(
                "{}로 전환했어. 키워드 기반 응답을 사용할게!",
                character.name()
            )))
            .await;
    }
}
