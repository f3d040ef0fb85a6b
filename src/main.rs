//! HEARt Companion demo - terminal chat loop over the core engine.
//!
//! Commands: `/char <id>` switches character, `/customize <tone>` changes
//! the fallback tone, `/reset` restores the free-time grant, `/voice`
//! toggles voice mode, `/quit` exits. Anything else is a chat turn.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use heart_companion::adapters::{
    JsonFileStateStore, SharedVisibility, StaticReplySource, TerminalPresenter, UniformReplyDelay,
};
use heart_companion::application::handlers::{
    ApplyCustomizationHandler, ResetSessionHandler, SwitchCharacterHandler, ToggleVoiceHandler,
    WelcomeHandler,
};
use heart_companion::application::{
    compile_reply_sets, ConversationOrchestrator, QuotaTicker, SessionContext, TurnError,
};
use heart_companion::config::AppConfig;
use heart_companion::domain::character::Character;
use heart_companion::domain::foundation::CharacterId;
use heart_companion::domain::replies::ReplySetRegistry;
use heart_companion::domain::session::{CustomizationProfile, Tone};
use heart_companion::ports::{Presenter, ReplySource, StateStore};

/// Stock character roster for the `/char` command.
fn stock_character(id: &str) -> Option<Character> {
    let (name, tag) = match id {
        "shima" => ("shima", "기본"),
        "nadesiko" => ("nadesiko", "활발"),
        "aoi" => ("aoi", "차분"),
        _ => return None,
    };
    let id = CharacterId::new(id).ok()?;
    Character::new(id, name, tag).ok()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let store: Arc<dyn StateStore> = Arc::new(JsonFileStateStore::open("heart-state.json").await);
    let source: Arc<dyn ReplySource> = Arc::new(StaticReplySource::with_builtin_bank());
    let presenter: Arc<dyn Presenter> = Arc::new(TerminalPresenter::new());
    let visibility = Arc::new(SharedVisibility::visible());
    let delay = Arc::new(UniformReplyDelay::from_config(&config.reply));

    let context = SessionContext::load(Arc::clone(&store), config.session.clone()).await;
    let sets = compile_reply_sets(source.as_ref(), &context.character_id().await).await;
    let registry = Arc::new(ReplySetRegistry::new(sets));

    let orchestrator = ConversationOrchestrator::new(
        Arc::clone(&context),
        Arc::clone(&registry),
        Arc::clone(&presenter),
        delay,
    );
    let switch_character = SwitchCharacterHandler::new(
        Arc::clone(&context),
        Arc::clone(&registry),
        Arc::clone(&source),
        Arc::clone(&presenter),
    );
    let apply_customization =
        ApplyCustomizationHandler::new(Arc::clone(&context), Arc::clone(&presenter));
    let reset_session = ResetSessionHandler::new(Arc::clone(&context), Arc::clone(&presenter));
    let toggle_voice = ToggleVoiceHandler::new(Arc::clone(&context), Arc::clone(&presenter));
    let welcome = WelcomeHandler::new(Arc::clone(&context), Arc::clone(&presenter));

    let ticker = QuotaTicker::new(Arc::clone(&context), visibility, Arc::clone(&presenter));
    ticker.start();

    let character = context.character().await;
    println!("— {} 와의 대화를 시작합니다 —", character.display_label());
    presenter.refresh_session(&context.snapshot().await).await;
    welcome.handle().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => continue,
            "/quit" => break,
            "/reset" => reset_session.handle().await,
            "/voice" => {
                toggle_voice.handle().await;
            }
            _ if input.starts_with("/char ") => {
                let id = input.trim_start_matches("/char ").trim();
                match stock_character(id) {
                    Some(character) => switch_character.handle(character).await,
                    None => println!("알 수 없는 캐릭터: {}", id),
                }
            }
            _ if input.starts_with("/customize ") => {
                let tone = match input.trim_start_matches("/customize ").trim() {
                    "gentle" => Tone::Gentle,
                    "cheerful" => Tone::Cheerful,
                    "calm" => Tone::Calm,
                    other => {
                        println!("알 수 없는 톤: {}", other);
                        continue;
                    }
                };
                let profile = CustomizationProfile {
                    tone,
                    ..context.profile().await
                };
                apply_customization.handle(profile).await;
            }
            text => match orchestrator.handle_turn(text).await {
                Ok(_) => {}
                Err(TurnError::SessionLocked) => {
                    info!("submission rejected; session locked");
                }
            },
        }
    }

    context.persist_quota().await;
    println!("다음에 또 만나!");
    Ok(())
}
