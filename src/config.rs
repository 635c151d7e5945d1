//! Runtime configuration for polyquery

use crate::error::{Error, Result};
use std::env;

/// Everything the pipeline needs, resolved once at startup and passed by
/// reference into the client constructors. Endpoint bases are plain fields
/// so tests can point them at a local mock server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer key for the chat completion API
    pub openai_api_key: String,

    /// API key for the secondary (Google) translation provider
    pub google_api_key: String,

    /// Chat completion model identifier
    pub chat_model: String,

    /// Chat completion API base URL
    pub chat_endpoint: String,

    /// Primary translation provider (MyMemory) base URL
    pub mymemory_endpoint: String,

    /// Secondary translation provider (Google Translate v2) base URL
    pub google_endpoint: String,

    /// Origin language of the session; questions start here and responses
    /// are translated back to it
    pub origin_lang: String,
}

// Defaults

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_chat_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_mymemory_endpoint() -> String {
    "https://api.mymemory.translated.net".to_string()
}

fn default_google_endpoint() -> String {
    "https://translation.googleapis.com".to_string()
}

fn default_origin_lang() -> String {
    "en".to_string()
}

/// Target languages used when none are given on the command line
pub fn default_languages() -> Vec<String> {
    ["fr", "hi", "zh", "ja", "ar"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    /// Build configuration from the process environment. Both credentials
    /// are required; a missing one is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| Error::MissingCredential("OpenAI API Key (OPENAI_API_KEY)"))?;
        let google_api_key = env::var("GOOGLE_API_KEY")
            .map_err(|_| Error::MissingCredential("Google API Key (GOOGLE_API_KEY)"))?;

        Ok(Self {
            openai_api_key,
            google_api_key,
            chat_model: default_chat_model(),
            chat_endpoint: default_chat_endpoint(),
            mymemory_endpoint: default_mymemory_endpoint(),
            google_endpoint: default_google_endpoint(),
            origin_lang: default_origin_lang(),
        })
    }

    /// Configuration with dummy credentials, for tests that override the
    /// endpoint fields.
    pub fn for_endpoints(chat: &str, mymemory: &str, google: &str) -> Self {
        Self {
            openai_api_key: "test-key".to_string(),
            google_api_key: "test-key".to_string(),
            chat_model: default_chat_model(),
            chat_endpoint: chat.to_string(),
            mymemory_endpoint: mymemory.to_string(),
            google_endpoint: google.to_string(),
            origin_lang: default_origin_lang(),
        }
    }
}
