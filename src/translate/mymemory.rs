//! MyMemory API client (primary translation provider)

use super::Attempt;
use serde::Deserialize;

/// Marker string MyMemory returns in place of a translation once the free
/// daily quota is spent. Must be treated as a failure signal, never as
/// translated content.
pub const QUOTA_SENTINEL: &str = "YOU USED ALL AVAILABLE FREE TRANSLATIONS FOR TODAY";

pub struct MyMemoryClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Single GET against `/get` with a `from|to` langpair. Transport
    /// errors, unparseable bodies, missing fields, and the quota sentinel
    /// all come back as `Attempt::Failed`.
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Attempt {
        let langpair = format!("{from}|{to}");
        let response = self
            .client
            .get(format!("{}/get", self.base_url))
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await;

        let body = match response {
            Ok(resp) => match resp.json::<MyMemoryResponse>().await {
                Ok(body) => body,
                Err(e) => return Attempt::Failed(format!("unparseable response: {e}")),
            },
            Err(e) => return Attempt::Failed(format!("request failed: {e}")),
        };

        let translated = body
            .response_data
            .and_then(|data| data.translated_text);
        match translated {
            Some(text) if text.contains(QUOTA_SENTINEL) => {
                Attempt::Failed("free quota exhausted".to_string())
            }
            Some(text) => Attempt::Translated(text),
            None => Attempt::Failed("response missing translatedText".to_string()),
        }
    }
}
