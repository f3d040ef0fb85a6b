//! End-to-end conversation flow tests over the public API.

use std::sync::Arc;
use std::time::Duration;

use heart_companion::adapters::{
    FixedReplyDelay, InMemoryStateStore, RecordingPresenter, StaticReplySource,
};
use heart_companion::application::handlers::{ResetSessionHandler, SwitchCharacterHandler};
use heart_companion::application::{
    compile_reply_sets, ConversationOrchestrator, SessionContext, TurnError, TurnOutcome,
};
use heart_companion::config::SessionConfig;
use heart_companion::domain::character::Character;
use heart_companion::domain::foundation::CharacterId;
use heart_companion::domain::replies::ReplySetRegistry;
use heart_companion::domain::session::Mood;
use heart_companion::ports::Speaker;

struct Stack {
    context: Arc<SessionContext>,
    registry: Arc<ReplySetRegistry>,
    source: Arc<StaticReplySource>,
    presenter: Arc<RecordingPresenter>,
    orchestrator: ConversationOrchestrator,
}

async fn stack_with(config: SessionConfig, source: StaticReplySource, delay: Duration) -> Stack {
    let store = Arc::new(InMemoryStateStore::new());
    let context = SessionContext::load(store, config).await;
    let source = Arc::new(source);
    let presenter = Arc::new(RecordingPresenter::new());

    let sets = compile_reply_sets(source.as_ref(), &context.character_id().await).await;
    let registry = Arc::new(ReplySetRegistry::new(sets));

    let orchestrator = ConversationOrchestrator::new(
        Arc::clone(&context),
        Arc::clone(&registry),
        Arc::clone(&presenter) as Arc<dyn heart_companion::ports::Presenter>,
        Arc::new(FixedReplyDelay::new(delay)),
    );

    Stack {
        context,
        registry,
        source,
        presenter,
        orchestrator,
    }
}

fn dual_scope_source() -> StaticReplySource {
    StaticReplySource::builder()
        .with_character("shima", r#"{"게임": "시마: 게임 좋지!", "바다": "시마: 바다 가자"}"#)
        .with_character("aoi", r#"{"게임": "아오이: 차분한 게임이 좋아"}"#)
        .with_common(r#"{"게임": "공통: 게임 이야기구나", "안녕": "공통: 안녕!"}"#)
        .build()
}

fn reply_of(outcome: TurnOutcome) -> String {
    match outcome {
        TurnOutcome::Replied(result) => result.reply_text,
        TurnOutcome::Ignored => panic!("expected a reply"),
    }
}

#[tokio::test]
async fn character_reply_beats_common_reply() {
    let stack = stack_with(SessionConfig::default(), dual_scope_source(), Duration::ZERO).await;

    let outcome = stack.orchestrator.handle_turn("게임 하자").await.unwrap();
    assert_eq!(reply_of(outcome), "시마: 게임 좋지!");
}

#[tokio::test]
async fn common_reply_used_when_character_silent() {
    let stack = stack_with(SessionConfig::default(), dual_scope_source(), Duration::ZERO).await;

    let outcome = stack.orchestrator.handle_turn("안녕!").await.unwrap();
    assert_eq!(reply_of(outcome), "공통: 안녕!");
}

#[tokio::test]
async fn earlier_declared_pattern_wins() {
    let source = StaticReplySource::builder()
        .with_character("shima", r#"{"외로": "먼저", "외로워": "나중"}"#)
        .with_common("{}")
        .build();
    let stack = stack_with(SessionConfig::default(), source, Duration::ZERO).await;

    let outcome = stack.orchestrator.handle_turn("외로워").await.unwrap();
    assert_eq!(reply_of(outcome), "먼저");
}

#[tokio::test]
async fn turn_mid_delay_delivers_from_its_snapshot() {
    let stack = stack_with(
        SessionConfig::default(),
        dual_scope_source(),
        Duration::from_millis(50),
    )
    .await;

    let switch = SwitchCharacterHandler::new(
        Arc::clone(&stack.context),
        Arc::clone(&stack.registry),
        Arc::clone(&stack.source) as Arc<dyn heart_companion::ports::ReplySource>,
        Arc::clone(&stack.presenter) as Arc<dyn heart_companion::ports::Presenter>,
    );

    let aoi = Character::new(CharacterId::new("aoi").unwrap(), "aoi", "차분").unwrap();
    let turn = stack.orchestrator.handle_turn("게임 하자");
    let interleaved_switch = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        switch.handle(aoi).await;
    };

    let (outcome, ()) = tokio::join!(turn, interleaved_switch);
    // The in-flight turn resolved before the switch; it must not observe
    // the post-switch set.
    assert_eq!(reply_of(outcome.unwrap()), "시마: 게임 좋지!");

    // The next turn resolves against the new character.
    let outcome = stack.orchestrator.handle_turn("게임 하자").await.unwrap();
    assert_eq!(reply_of(outcome), "아오이: 차분한 게임이 좋아");
}

#[tokio::test]
async fn locked_submissions_are_idempotent() {
    let config = SessionConfig {
        initial_quota_secs: 60,
        message_cost_enabled: true,
        message_cost_secs: 60,
        ..Default::default()
    };
    let stack = stack_with(config, dual_scope_source(), Duration::ZERO).await;

    // First message exhausts the quota but still completes.
    let outcome = stack.orchestrator.handle_turn("안녕").await.unwrap();
    assert!(matches!(outcome, TurnOutcome::Replied(_)));
    assert!(stack.context.is_locked().await);

    // Every further submission is rejected without deduction.
    for _ in 0..3 {
        let result = stack.orchestrator.handle_turn("안녕").await;
        assert!(matches!(result, Err(TurnError::SessionLocked)));
        let state = stack.context.snapshot().await;
        assert_eq!(state.quota().free_seconds_remaining(), 0);
    }
    // One upsell from exhaustion plus one per rejected submission.
    assert_eq!(stack.presenter.upsell_count().await, 4);
}

#[tokio::test]
async fn reset_reopens_a_locked_session() {
    let config = SessionConfig {
        initial_quota_secs: 60,
        message_cost_enabled: true,
        message_cost_secs: 60,
        ..Default::default()
    };
    let stack = stack_with(config, dual_scope_source(), Duration::ZERO).await;
    stack.orchestrator.handle_turn("안녕").await.unwrap();
    assert!(stack.context.is_locked().await);

    let reset = ResetSessionHandler::new(
        Arc::clone(&stack.context),
        Arc::clone(&stack.presenter) as Arc<dyn heart_companion::ports::Presenter>,
    );
    reset.handle().await;

    let outcome = stack.orchestrator.handle_turn("게임 하자").await.unwrap();
    assert_eq!(reply_of(outcome), "시마: 게임 좋지!");
}

#[tokio::test]
async fn fallback_mood_flows_into_turn_result_and_state() {
    let stack = stack_with(SessionConfig::default(), dual_scope_source(), Duration::ZERO).await;

    let outcome = stack.orchestrator.handle_turn("요즘 많이 우울해").await.unwrap();
    let TurnOutcome::Replied(result) = outcome else {
        panic!("expected a reply");
    };
    assert_eq!(result.mood_after, Mood::Concerned);
    assert_eq!(stack.context.snapshot().await.mood(), Mood::Concerned);

    // A later keyword match leaves the concerned mood untouched.
    let outcome = stack.orchestrator.handle_turn("게임 하자").await.unwrap();
    let TurnOutcome::Replied(result) = outcome else {
        panic!("expected a reply");
    };
    assert_eq!(result.mood_after, Mood::Concerned);
}

#[tokio::test]
async fn chat_log_alternates_user_and_companion() {
    let stack = stack_with(SessionConfig::default(), dual_scope_source(), Duration::ZERO).await;

    stack.orchestrator.handle_turn("안녕").await.unwrap();
    stack.orchestrator.handle_turn("게임 하자").await.unwrap();

    let speakers: Vec<Speaker> = stack
        .presenter
        .messages()
        .await
        .iter()
        .map(|m| m.speaker)
        .collect();
    assert_eq!(
        speakers,
        vec![
            Speaker::User,
            Speaker::Companion,
            Speaker::User,
            Speaker::Companion,
        ]
    );
}
