//! Conversation orchestrator - sequences one user turn.
//!
//! Per turn: quota gate, per-message deduction, keyword resolution against a
//! registry snapshot, sentiment fallback when nothing matched, then the
//! staged thinking/responding/in-conversation status sequence around the
//! injected reply delay.
//!
//! A turn resolves against the reply-set snapshot captured at resolution
//! time; a character switch landing mid-delay does not redirect it. A
//! lockout landing mid-delay likewise still lets the in-flight reply arrive
//! (stale delivery, matching the observed source behavior).

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::domain::fallback::FallbackComposer;
use crate::domain::foundation::MessageId;
use crate::domain::replies::ReplySetRegistry;
use crate::domain::sentiment::SentimentClassifier;
use crate::domain::session::{AvatarStatus, Mood, QuotaChange};
use crate::ports::{ChatMessage, Presenter, ReplyDelay};

use super::context::SessionContext;

/// Externally observable result of one completed turn.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// Id of the companion's reply message.
    pub message_id: MessageId,
    /// The reply text delivered to the user.
    pub reply_text: String,
    /// Mood after the turn.
    pub mood_after: Mood,
    /// The staged delay that was applied before "responding".
    pub delay: Duration,
}

/// Outcome of submitting user text.
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// A reply was produced and delivered.
    Replied(TurnResult),
    /// Empty/whitespace-only input; silently ignored, no quota deduction.
    Ignored,
}

/// Errors produced by turn handling.
///
/// A locked session is normal control flow (the user is redirected to the
/// upgrade affordance), not a failure.
#[derive(Debug, Clone, Error)]
pub enum TurnError {
    #[error("Session is locked; free time exhausted")]
    SessionLocked,
}

/// Sequences the reply pipeline for each user turn.
pub struct ConversationOrchestrator {
    context: Arc<SessionContext>,
    registry: Arc<ReplySetRegistry>,
    presenter: Arc<dyn Presenter>,
    delay: Arc<dyn ReplyDelay>,
}

impl ConversationOrchestrator {
    /// Creates an orchestrator over the shared context and registry.
    pub fn new(
        context: Arc<SessionContext>,
        registry: Arc<ReplySetRegistry>,
        presenter: Arc<dyn Presenter>,
        delay: Arc<dyn ReplyDelay>,
    ) -> Self {
        Self {
            context,
            registry,
            presenter,
            delay,
        }
    }

    /// Handles one user submission.
    ///
    /// # Errors
    ///
    /// Returns `TurnError::SessionLocked` when the quota is exhausted; no
    /// state changes and no reply is generated.
    pub async fn handle_turn(&self, user_text: &str) -> Result<TurnOutcome, TurnError> {
        if self.context.is_locked().await {
            self.presenter.show_upsell().await;
            return Err(TurnError::SessionLocked);
        }

        let text = user_text.trim();
        if text.is_empty() {
            return Ok(TurnOutcome::Ignored);
        }

        self.presenter.show_message(&ChatMessage::user(text)).await;
        self.charge_message_cost().await;

        // Snapshot semantics: the whole turn resolves against the sets
        // captured here, regardless of interleaved reloads.
        let sets = self.registry.snapshot().await;
        let resolved = sets.resolve(text).map(str::to_string);

        let (reply_text, mood_after) = match resolved {
            Some(reply) => {
                // Keyword match: reply verbatim, classifier not run.
                debug!(character = %sets.character_id(), "keyword reply resolved");
                (reply, self.context.snapshot().await.mood())
            }
            None => {
                let current_mood = self.context.snapshot().await.mood();
                let classification = SentimentClassifier::classify(text, current_mood);
                let tone = self.context.tone().await;
                let reply = FallbackComposer::compose(&classification, tone);

                let mood = classification.proposed_mood;
                self.context.update_state(|state| state.set_mood(mood)).await;
                debug!(?mood, "fallback reply composed");
                (reply, mood)
            }
        };

        let delay = self.delay.next_delay();
        let message = ChatMessage::companion(reply_text.clone());
        let message_id = message.id;

        self.set_status(AvatarStatus::Thinking).await;
        tokio::time::sleep(delay).await;
        self.set_status(AvatarStatus::Responding).await;
        self.presenter.show_message(&message).await;
        self.set_status(AvatarStatus::InConversation).await;
        self.presenter.refresh_session(&self.context.snapshot().await).await;

        Ok(TurnOutcome::Replied(TurnResult {
            message_id,
            reply_text,
            mood_after,
            delay,
        }))
    }

    /// Deducts the per-message cost, if the cost model is enabled. The
    /// accepted submission still completes even when this deduction
    /// exhausts the quota; only subsequent submissions are rejected.
    async fn charge_message_cost(&self) {
        let cost = self.context.config().effective_message_cost();
        if cost == 0 {
            return;
        }

        let change = self
            .context
            .update_state(|state| state.quota_mut().charge_message(cost))
            .await;

        match change {
            QuotaChange::Unchanged => {}
            QuotaChange::Deducted { .. } => {
                self.context.persist_quota().await;
            }
            QuotaChange::Exhausted => {
                self.context.persist_quota().await;
                self.presenter.show_upsell().await;
            }
        }
    }

    async fn set_status(&self, status: AvatarStatus) {
        self.context
            .update_state(|state| state.set_avatar_status(status))
            .await;
        self.presenter.show_status(status).await;
    }
}
