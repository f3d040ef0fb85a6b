//! Customization apply handler.
//!
//! The profile changes only through this explicit action; it is never
//! auto-derived from conversation content.

use std::sync::Arc;

use tracing::info;

use crate::application::context::SessionContext;
use crate::domain::session::CustomizationProfile;
use crate::ports::Presenter;

/// Handles the apply-customize user action.
pub struct ApplyCustomizationHandler {
    context: Arc<SessionContext>,
    presenter: Arc<dyn Presenter>,
}

impl ApplyCustomizationHandler {
    /// Creates the handler.
    pub fn new(context: Arc<SessionContext>, presenter: Arc<dyn Presenter>) -> Self {
        Self { context, presenter }
    }

    /// Replaces and persists the customization profile.
    pub async fn handle(&self, profile: CustomizationProfile) {
        info!(tone = %profile.tone, "applying customization");
        self.context.set_profile(profile).await;
        self.presenter
            .refresh_session(&self.context.snapshot().await)
            .await;
    }
}
