//! Session context - the single owner of mutable session state.
//!
//! Loads persisted values with get-or-default semantics at startup and
//! writes them back best-effort as they change. Absence or corruption of a
//! persisted value silently falls back to the documented default; a failed
//! write is logged and the session continues.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::domain::character::Character;
use crate::domain::foundation::CharacterId;
use crate::domain::session::{CustomizationProfile, SessionQuota, SessionState, Tone};
use crate::ports::{keys, StateStore};

/// Explicit session context object; no ambient globals.
///
/// All mutation happens through the methods below, on the single
/// cooperative execution thread.
pub struct SessionContext {
    store: Arc<dyn StateStore>,
    config: SessionConfig,
    state: RwLock<SessionState>,
    character: RwLock<Character>,
    profile: RwLock<CustomizationProfile>,
}

impl SessionContext {
    /// Loads a context from the state store, falling back to defaults for
    /// anything missing or corrupted.
    pub async fn load(store: Arc<dyn StateStore>, config: SessionConfig) -> Arc<Self> {
        let free_seconds = get_or_default(
            store.as_ref(),
            keys::FREE_SECONDS,
            config.initial_quota_secs,
        )
        .await;
        let character = get_or_default(
            store.as_ref(),
            keys::CURRENT_CHARACTER,
            Character::default_character(),
        )
        .await;
        let profile = get_or_default(
            store.as_ref(),
            keys::CUSTOMIZATION,
            CustomizationProfile::default(),
        )
        .await;

        let quota = SessionQuota::restore(free_seconds, config.initial_quota_secs);

        Arc::new(Self {
            store,
            config,
            state: RwLock::new(SessionState::with_quota(quota)),
            character: RwLock::new(character),
            profile: RwLock::new(profile),
        })
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns a clone of the current session state for rendering.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Returns true while chat is gated by an exhausted quota.
    pub async fn is_locked(&self) -> bool {
        self.state.read().await.is_locked()
    }

    /// Mutates the session state under the write lock.
    pub async fn update_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.state.write().await;
        f(&mut state)
    }

    /// Returns the active character.
    pub async fn character(&self) -> Character {
        self.character.read().await.clone()
    }

    /// Returns the active character's id.
    pub async fn character_id(&self) -> CharacterId {
        self.character.read().await.id().clone()
    }

    /// Replaces the active character and persists it.
    pub async fn set_character(&self, character: Character) {
        self.persist(keys::CURRENT_CHARACTER, &character).await;
        *self.character.write().await = character;
    }

    /// Returns the customization profile.
    pub async fn profile(&self) -> CustomizationProfile {
        self.profile.read().await.clone()
    }

    /// Returns the profile's tone.
    pub async fn tone(&self) -> Tone {
        self.profile.read().await.tone
    }

    /// Replaces the customization profile and persists it.
    pub async fn set_profile(&self, profile: CustomizationProfile) {
        let profile = profile.normalized();
        self.persist(keys::CUSTOMIZATION, &profile).await;
        *self.profile.write().await = profile;
    }

    /// Writes the current quota counter back to the store.
    pub async fn persist_quota(&self) {
        let remaining = self.state.read().await.quota().free_seconds_remaining();
        self.persist(keys::FREE_SECONDS, &remaining).await;
    }

    /// Returns whether the one-shot welcome was already shown.
    pub async fn has_welcomed(&self) -> bool {
        get_or_default(self.store.as_ref(), keys::WELCOMED, false).await
    }

    /// Marks the one-shot welcome as shown.
    pub async fn mark_welcomed(&self) {
        self.persist(keys::WELCOMED, &true).await;
    }

    /// Best-effort persistence; failures are logged, never propagated.
    async fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                warn!(key, error = %err, "failed to serialize persisted value");
                return;
            }
        };
        if let Err(err) = self.store.put(key, &json).await {
            warn!(key, error = %err, "failed to persist value");
        }
    }
}

/// Reads a value from the store, returning the default on absence,
/// corruption, or store failure.
async fn get_or_default<T: DeserializeOwned>(store: &dyn StateStore, key: &str, default: T) -> T {
    match store.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                debug!(key, error = %err, "corrupted persisted value; using default");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            debug!(key, error = %err, "state store unavailable; using default");
            default
        }
    }
}
