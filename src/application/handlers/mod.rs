//! User-action handlers.
//!
//! External triggers (character cards, customization form, session toolbar)
//! land here; their UI affordances are out of scope.

mod apply_customization;
mod reset_session;
mod switch_character;
mod toggle_voice;
mod welcome;

pub use apply_customization::ApplyCustomizationHandler;
pub use reset_session::ResetSessionHandler;
pub use switch_character::SwitchCharacterHandler;
pub use toggle_voice::ToggleVoiceHandler;
pub use welcome::WelcomeHandler;
