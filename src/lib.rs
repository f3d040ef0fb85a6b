//! HEARt Companion - Keyword-driven companion chat engine
//!
//! This crate implements a local companion-chat session: keyword reply
//! resolution with character-then-common priority, sentiment-driven mood
//! and fallback text synthesis, and a session quota state machine that
//! gates the conversation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
