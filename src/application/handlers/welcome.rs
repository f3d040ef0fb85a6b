//! One-shot first-visit welcome.

use std::sync::Arc;

use crate::application::context::SessionContext;
use crate::ports::{ChatMessage, Presenter};

/// Welcome line shown once per install.
const WELCOME_TEXT: &str = "어서 와! 키워드(예: 외로워, 불안, 행복, 게임)를 넣으면 맞춤 응답이 나와. shima/nadesiko/aoi마다 응답이 달라!";

/// Shows the welcome message on the first visit only.
pub struct WelcomeHandler {
    context: Arc<SessionContext>,
    presenter: Arc<dyn Presenter>,
}

impl WelcomeHandler {
    /// Creates the handler.
    pub fn new(context: Arc<SessionContext>, presenter: Arc<dyn Presenter>) -> Self {
        Self { context, presenter }
    }

    /// Shows the welcome if it was never shown; returns whether it ran.
    pub async fn handle(&self) -> bool {
        if self.context.has_welcomed().await {
            return false;
        }
        self.presenter
            .show_message(&ChatMessage::companion(WELCOME_TEXT))
            .await;
        self.context.mark_welcomed().await;
        true
    }
}
