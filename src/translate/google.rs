//! Google Translate v2 REST client (secondary translation provider)

use super::Attempt;
use serde::{Deserialize, Serialize};

pub struct GoogleTranslateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: Option<TranslateData>,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl GoogleTranslateClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Single POST with the target language only; Google infers the source.
    pub async fn translate(&self, text: &str, to: &str) -> Attempt {
        let request = TranslateRequest {
            q: text,
            target: to,
            format: "text",
        };
        let response = self
            .client
            .post(format!("{}/language/translate/v2", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await;

        let body = match response {
            Ok(resp) => match resp.json::<TranslateResponse>().await {
                Ok(body) => body,
                Err(e) => return Attempt::Failed(format!("unparseable response: {e}")),
            },
            Err(e) => return Attempt::Failed(format!("request failed: {e}")),
        };

        let translated = body
            .data
            .and_then(|data| data.translations.into_iter().next())
            .and_then(|t| t.translated_text);
        match translated {
            Some(text) => Attempt::Translated(text),
            None => Attempt::Failed("response missing translatedText".to_string()),
        }
    }
}
