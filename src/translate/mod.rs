//! Translation resolution with a two-tier provider fallback
//!
//! The resolver tries MyMemory first, falls back to Google Translate when
//! the attempt fails or the free quota is exhausted, and degrades to the
//! original text when both providers fail. Resolution never errors; total
//! failure is an identity translation, not an exception.

mod google;
mod mymemory;

pub use google::GoogleTranslateClient;
pub use mymemory::{MyMemoryClient, QUOTA_SENTINEL};

use crate::config::Config;
use tracing::{debug, warn};

/// Outcome of a single provider attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Translated(String),
    Failed(String),
}

impl Attempt {
    /// Promote a successful attempt into a resolution tagged with the
    /// provider that produced it; a failed attempt yields its reason.
    fn into_resolved(self, provider: Provider) -> Result<Resolved, String> {
        match self {
            Attempt::Translated(text) => Ok(Resolved { text, provider }),
            Attempt::Failed(reason) => Err(reason),
        }
    }
}

/// Which tier produced a resolved text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Primary,
    Secondary,
    /// Both providers failed; the original text passed through unchanged
    Identity,
}

/// A resolved translation with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    pub provider: Provider,
}

pub struct Resolver {
    primary: MyMemoryClient,
    secondary: GoogleTranslateClient,
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        Self {
            primary: MyMemoryClient::new(&config.mymemory_endpoint),
            secondary: GoogleTranslateClient::new(
                &config.google_endpoint,
                &config.google_api_key,
            ),
        }
    }

    /// Translate `text` from `from` to `to`. One attempt per provider, no
    /// retries. Never fails: the terminal case returns the input unchanged.
    pub async fn resolve(&self, text: &str, from: &str, to: &str) -> Resolved {
        let primary = self
            .primary
            .translate(text, from, to)
            .await
            .into_resolved(Provider::Primary);
        let reason = match primary {
            Ok(resolved) => {
                debug!(target_lang = to, "translated via primary provider");
                return resolved;
            }
            Err(reason) => reason,
        };
        warn!(target_lang = to, %reason, "primary translation failed, falling back");

        let secondary = self
            .secondary
            .translate(text, to)
            .await
            .into_resolved(Provider::Secondary);
        match secondary {
            Ok(resolved) => {
                debug!(target_lang = to, "translated via secondary provider");
                resolved
            }
            Err(reason) => {
                warn!(
                    target_lang = to,
                    %reason,
                    "both translation providers failed, returning original text"
                );
                Resolved {
                    text: text.to_string(),
                    provider: Provider::Identity,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_attempt_resolves_with_provider() {
        let attempt = Attempt::Translated("bonjour".to_string());
        let resolved = attempt.into_resolved(Provider::Primary).unwrap();
        assert_eq!(resolved.text, "bonjour");
        assert_eq!(resolved.provider, Provider::Primary);
    }

    #[test]
    fn failed_attempt_yields_reason() {
        let attempt = Attempt::Failed("connection refused".to_string());
        let err = attempt.into_resolved(Provider::Secondary).unwrap_err();
        assert_eq!(err, "connection refused");
    }
}
