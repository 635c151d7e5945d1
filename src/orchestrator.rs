//! Multilingual query orchestration
//!
//! Drives the per-language pipeline: translate the question, ask the chat
//! model, translate the answer back. Languages are processed strictly in
//! input order, one at a time. A chat failure for one language is recorded
//! as a marker in that language's slot and the run continues, so every run
//! yields exactly one record per requested language.

use crate::chat::ChatClient;
use crate::error::Result;
use crate::translate::Resolver;
use tracing::warn;

/// One row of the result table: everything produced for a single target
/// language. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRecord {
    /// Upper-cased ISO 639-1 code
    pub language: String,
    pub translated_question: String,
    pub chat_response: String,
    pub back_translated: String,
}

pub struct Orchestrator<'a> {
    resolver: &'a Resolver,
    chat: &'a ChatClient,
    origin_lang: &'a str,
}

impl<'a> Orchestrator<'a> {
    pub fn new(resolver: &'a Resolver, chat: &'a ChatClient, origin_lang: &'a str) -> Self {
        Self {
            resolver,
            chat,
            origin_lang,
        }
    }

    /// Run the full pipeline over `languages`, in order. The returned
    /// sequence always has one record per input language.
    pub async fn run(&self, question: &str, languages: &[String]) -> Vec<LanguageRecord> {
        let mut records = Vec::with_capacity(languages.len());

        for lang in languages {
            println!("\nProcessing language: {}...", lang.to_uppercase());

            let translated_question = self
                .resolver
                .resolve(question, self.origin_lang, lang)
                .await;

            match self.answer(&translated_question.text, lang).await {
                Ok((chat_response, back_translated)) => records.push(LanguageRecord {
                    language: lang.to_uppercase(),
                    translated_question: translated_question.text,
                    chat_response,
                    back_translated,
                }),
                Err(e) => {
                    warn!(language = %lang, error = %e, "chat query failed, recording marker");
                    let marker = format!("[chat error: {e}]");
                    records.push(LanguageRecord {
                        language: lang.to_uppercase(),
                        translated_question: translated_question.text,
                        chat_response: marker.clone(),
                        back_translated: marker,
                    });
                }
            }
        }

        records
    }

    async fn answer(&self, prompt: &str, lang: &str) -> Result<(String, String)> {
        let chat_response = self.chat.ask(prompt).await?;

        // Back-translation source is always this record's language, target
        // is always the session origin.
        let back_translated = self
            .resolver
            .resolve(&chat_response, lang, self.origin_lang)
            .await;

        Ok((chat_response, back_translated.text))
    }
}
