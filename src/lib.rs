//! polyquery — ask one question in many languages
//!
//! Translates a question into a set of target languages, queries a chat
//! completion API with each translation, translates the answers back, and
//! appends everything to a CSV result table. Translation uses a two-tier
//! provider fallback (MyMemory, then Google Translate) that degrades to
//! the original text rather than failing.

pub mod chat;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod sink;
pub mod translate;

pub use error::{Error, Result};
