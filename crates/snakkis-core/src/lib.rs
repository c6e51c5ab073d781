//! snakkis-core — Pure conversation logic, no UI.
//!
//! This crate contains the conversation state holder, the canned reply
//! stub, the topic catalog, and configuration for the snakkis chat
//! widget. It is completely UI-agnostic — frontends (TUI, Web) either
//! drive a [`conversation::Conversation`] directly or subscribe to a
//! [`session::ChatSession`] via tokio::broadcast.

pub mod config;
pub mod conversation;
pub mod events;
pub mod types;
pub mod ui_text;

#[cfg(feature = "driver")]
pub mod session;
