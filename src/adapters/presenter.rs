//! Presenter adapters: terminal output for the demo, recording for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::session::{AvatarStatus, SessionState};
use crate::ports::{ChatMessage, Presenter, Speaker};

/// Presenter printing chat bubbles and session lines to the terminal.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    /// Creates the presenter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Presenter for TerminalPresenter {
    async fn show_status(&self, status: AvatarStatus) {
        println!("  · {}", status.label());
    }

    async fn show_message(&self, message: &ChatMessage) {
        let icon = match message.speaker {
            Speaker::User => "🧍",
            Speaker::Companion => "💬",
        };
        println!("[{}] {} {}", message.sent_at.clock_label(), icon, message.text);
    }

    async fn refresh_session(&self, state: &SessionState) {
        println!(
            "  ({} | {} | 남은 무료 {}분 | {})",
            state.presence(),
            state.mode_label(),
            state.quota().free_minutes_remaining(),
            state.mood().label()
        );
    }

    async fn show_upsell(&self) {
        println!("무료 시간이 종료되었습니다. [업그레이드]");
    }
}

/// Presenter recording everything it is shown, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    messages: RwLock<Vec<ChatMessage>>,
    statuses: RwLock<Vec<AvatarStatus>>,
    refreshes: RwLock<Vec<SessionState>>,
    upsells: RwLock<u32>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown so far.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    /// Status changes shown so far.
    pub async fn statuses(&self) -> Vec<AvatarStatus> {
        self.statuses.read().await.clone()
    }

    /// Session refreshes shown so far.
    pub async fn refreshes(&self) -> Vec<SessionState> {
        self.refreshes.read().await.clone()
    }

    /// Number of upsell notifications shown.
    pub async fn upsell_count(&self) -> u32 {
        *self.upsells.read().await
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn show_status(&self, status: AvatarStatus) {
        self.statuses.write().await.push(status);
    }

    async fn show_message(&self, message: &ChatMessage) {
        self.messages.write().await.push(message.clone());
    }

    async fn refresh_session(&self, state: &SessionState) {
        self.refreshes.write().await.push(state.clone());
    }

    async fn show_upsell(&self) {
        *self.upsells.write().await += 1;
    }
}
