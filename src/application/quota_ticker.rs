//! Quota ticker - the periodic countdown driving remaining session time.
//!
//! A fixed-cadence tick deducts from the quota while the host surface is
//! visible; hidden ticks are skipped (suspended, not cancelled). The ticker
//! is started at most once and never explicitly stopped; lockout is
//! announced to the presenter exactly once per exhaustion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tracing::{debug, info};

use crate::domain::session::QuotaChange;
use crate::ports::{Presenter, VisibilitySignal};

use super::context::SessionContext;

/// Drives `SessionQuota::tick` on the configured cadence.
pub struct QuotaTicker {
    context: Arc<SessionContext>,
    visibility: Arc<dyn VisibilitySignal>,
    presenter: Arc<dyn Presenter>,
    started: AtomicBool,
}

impl QuotaTicker {
    /// Creates a ticker over the shared session context.
    pub fn new(
        context: Arc<SessionContext>,
        visibility: Arc<dyn VisibilitySignal>,
        presenter: Arc<dyn Presenter>,
    ) -> Arc<Self> {
        Arc::new(Self {
            context,
            visibility,
            presenter,
            started: AtomicBool::new(false),
        })
    }

    /// Starts the background tick loop. Idempotent: a second call is a
    /// no-op and returns false.
    pub fn start(self: &Arc<Self>) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            return false;
        }

        let ticker = Arc::clone(self);
        let interval_secs = ticker.context.config().tick_interval_secs;
        tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(interval_secs));
            interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
            // First interval tick completes immediately; skip it so the
            // countdown starts one full cadence after start().
            interval.tick().await;
            loop {
                interval.tick().await;
                ticker.tick_once().await;
            }
        });
        true
    }

    /// Applies a single tick: sample visibility, deduct, persist, render.
    ///
    /// Exposed separately so tests can drive the cadence deterministically.
    pub async fn tick_once(&self) {
        let visible = self.visibility.is_visible();
        let cost = self.context.config().tick_cost_secs;

        let change = self
            .context
            .update_state(|state| state.quota_mut().tick(visible, cost))
            .await;

        match change {
            QuotaChange::Unchanged => {
                if !visible {
                    debug!("tick skipped; host surface hidden");
                }
            }
            QuotaChange::Deducted { remaining } => {
                self.context.persist_quota().await;
                self.presenter
                    .refresh_session(&self.context.snapshot().await)
                    .await;
                debug!(remaining, "quota tick");
            }
            QuotaChange::Exhausted => {
                self.context.persist_quota().await;
                self.presenter
                    .refresh_session(&self.context.snapshot().await)
                    .await;
                self.presenter.show_upsell().await;
                info!("free session time exhausted; chat locked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStateStore, RecordingPresenter, SharedVisibility};
    use crate::config::SessionConfig;

    async fn ticker_with(
        initial_quota_secs: u32,
        visibility: Arc<SharedVisibility>,
        presenter: Arc<RecordingPresenter>,
    ) -> Arc<QuotaTicker> {
        let config = SessionConfig {
            initial_quota_secs,
            ..Default::default()
        };
        let store = Arc::new(InMemoryStateStore::new());
        let context = SessionContext::load(store, config).await;
        QuotaTicker::new(context, visibility, presenter)
    }

    #[tokio::test]
    async fn visible_tick_deducts_one_second() {
        let visibility = Arc::new(SharedVisibility::visible());
        let presenter = Arc::new(RecordingPresenter::new());
        let ticker = ticker_with(600, visibility, Arc::clone(&presenter)).await;

        ticker.tick_once().await;
        let state = ticker.context.snapshot().await;
        assert_eq!(state.quota().free_seconds_remaining(), 599);
    }

    #[tokio::test]
    async fn hidden_tick_is_skipped() {
        let visibility = Arc::new(SharedVisibility::visible());
        let presenter = Arc::new(RecordingPresenter::new());
        let ticker = ticker_with(600, Arc::clone(&visibility), Arc::clone(&presenter)).await;

        visibility.set_visible(false);
        ticker.tick_once().await;
        ticker.tick_once().await;
        visibility.set_visible(true);
        ticker.tick_once().await;

        let state = ticker.context.snapshot().await;
        assert_eq!(state.quota().free_seconds_remaining(), 599);
    }

    #[tokio::test]
    async fn exhaustion_announces_upsell_exactly_once() {
        let visibility = Arc::new(SharedVisibility::visible());
        let presenter = Arc::new(RecordingPresenter::new());
        let ticker = ticker_with(2, visibility, Arc::clone(&presenter)).await;

        ticker.tick_once().await;
        ticker.tick_once().await;
        ticker.tick_once().await;
        ticker.tick_once().await;

        assert!(ticker.context.is_locked().await);
        assert_eq!(presenter.upsell_count().await, 1);
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let visibility = Arc::new(SharedVisibility::visible());
        let presenter = Arc::new(RecordingPresenter::new());
        let ticker = ticker_with(600, visibility, presenter).await;

        assert!(ticker.start());
        assert!(!ticker.start());
    }
}
