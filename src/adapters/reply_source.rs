//! Static reply source - keyword mappings held in memory.
//!
//! The built-in bank mirrors the three stock characters plus the shared
//! default mapping; tests assemble their own via the builder.

use std::collections::HashMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::replies::ReplyScope;
use crate::ports::{ReplySource, ReplySourceError};

/// Built-in keyword banks, keyed by scope source key.
static BUILTIN_BANK: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "replies-shima",
            r#"{
                "외로워|외롭|lonely": "내가 여기 있잖아. 오늘 하루 중 제일 허전했던 순간이 언제였어?",
                "불안|걱정": "불안할 땐 같이 호흡부터 고르자. 숨을 크게 쉬어볼래?",
                "행복|기뻐": "와, 나도 덩달아 기분 좋아져! 무슨 일이 있었는지 더 들려줘.",
                "게임|game": "게임 좋지! 요즘 어떤 게임 해? 나는 퍼즐 게임이 좋아."
            }"#,
        ),
        (
            "replies-nadesiko",
            r#"{
                "외로워|외롭|lonely": "혼자라고 느껴질 때일수록 움직여보자! 가볍게 산책 어때?",
                "불안|걱정": "걱정은 절반으로 나누면 가벼워져. 나한테 절반 맡겨!",
                "행복|기뻐": "역시! 그 기세로 오늘 하나만 더 해보자!",
                "게임|game": "액션 게임이라면 자신 있어! 같이 랭킹 올려볼까?"
            }"#,
        ),
        (
            "replies-aoi",
            r#"{
                "외로워|외롭|lonely": "그 마음, 천천히 들여다보자. 지금 어디에 있어?",
                "불안|걱정": "걱정거리를 종이에 적어 내려가면 생각이 정리되곤 해.",
                "행복|기뻐": "좋은 일은 기록해두면 오래 남아. 한 줄로 남겨볼까?",
                "게임|game": "차분한 시뮬레이션 게임을 추천해. 같이 마을을 가꿔보자."
            }"#,
        ),
        (
            "replies-default",
            r#"{
                "안녕|hello|hi": "안녕! 오늘 하루는 어땠어?",
                "고마워|thank": "천만에! 네가 말 걸어줘서 나도 좋아.",
                "잘자|굿나잇|good night": "잘 자! 내일 또 이야기하자.",
                "심심|보드게임": "심심할 땐 같이 이야기 만들기 놀이 어때?"
            }"#,
        ),
    ])
});

/// In-memory reply source.
#[derive(Debug, Clone)]
pub struct StaticReplySource {
    mappings: HashMap<String, String>,
}

impl StaticReplySource {
    /// Source holding the built-in character and common banks.
    pub fn with_builtin_bank() -> Self {
        Self {
            mappings: BUILTIN_BANK
                .iter()
                .map(|(key, json)| (key.to_string(), json.to_string()))
                .collect(),
        }
    }

    /// Starts an empty builder for custom banks.
    pub fn builder() -> StaticReplySourceBuilder {
        StaticReplySourceBuilder::default()
    }
}

#[async_trait]
impl ReplySource for StaticReplySource {
    async fn fetch(&self, scope: &ReplyScope) -> Result<String, ReplySourceError> {
        let key = scope.source_key();
        self.mappings
            .get(&key)
            .cloned()
            .ok_or(ReplySourceError::NotFound(key))
    }
}

/// Builder for custom static banks.
#[derive(Debug, Default)]
pub struct StaticReplySourceBuilder {
    mappings: HashMap<String, String>,
}

impl StaticReplySourceBuilder {
    /// Sets the mapping for a character scope.
    pub fn with_character(mut self, id: &str, json: &str) -> Self {
        self.mappings.insert(format!("replies-{}", id), json.to_string());
        self
    }

    /// Sets the shared common mapping.
    pub fn with_common(mut self, json: &str) -> Self {
        self.mappings.insert("replies-default".to_string(), json.to_string());
        self
    }

    /// Builds the source.
    pub fn build(self) -> StaticReplySource {
        StaticReplySource {
            mappings: self.mappings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CharacterId;

    #[tokio::test]
    async fn builtin_bank_serves_all_stock_characters() {
        let source = StaticReplySource::with_builtin_bank();
        for id in ["shima", "nadesiko", "aoi"] {
            let scope = ReplyScope::Character(CharacterId::new(id).unwrap());
            assert!(source.fetch(&scope).await.is_ok(), "missing bank for {}", id);
        }
        assert!(source.fetch(&ReplyScope::Common).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_scope_is_not_found() {
        let source = StaticReplySource::with_builtin_bank();
        let scope = ReplyScope::Character(CharacterId::new("ghost").unwrap());
        assert!(matches!(
            source.fetch(&scope).await,
            Err(ReplySourceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn builder_overrides_are_returned_verbatim() {
        let source = StaticReplySource::builder()
            .with_character("shima", r#"{"a": "b"}"#)
            .build();
        let scope = ReplyScope::Character(CharacterId::new("shima").unwrap());
        assert_eq!(source.fetch(&scope).await.unwrap(), r#"{"a": "b"}"#);
    }
}
