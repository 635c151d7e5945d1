//! Translation resolver fallback behavior against mock providers

use polyquery::config::Config;
use polyquery::translate::{Provider, Resolver, QUOTA_SENTINEL};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mymemory_body(text: &str) -> serde_json::Value {
    json!({
        "responseData": { "translatedText": text },
        "responseStatus": 200
    })
}

fn google_body(text: &str) -> serde_json::Value {
    json!({
        "data": { "translations": [ { "translatedText": text } ] }
    })
}

async fn resolver_for(server: &MockServer) -> Resolver {
    let uri = server.uri();
    Resolver::new(&Config::for_endpoints(&uri, &uri, &uri))
}

#[tokio::test]
async fn primary_success_skips_secondary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mymemory_body("bonjour")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_body("salut")))
        .expect(0)
        .mount(&server)
        .await;

    let resolved = resolver_for(&server).await.resolve("hello", "en", "fr").await;
    assert_eq!(resolved.text, "bonjour");
    assert_eq!(resolved.provider, Provider::Primary);
}

#[tokio::test]
async fn quota_sentinel_forces_secondary_and_never_leaks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mymemory_body(QUOTA_SENTINEL)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_body("bonjour")))
        .expect(1)
        .mount(&server)
        .await;

    let resolved = resolver_for(&server).await.resolve("hello", "en", "fr").await;
    assert_eq!(resolved.text, "bonjour");
    assert_eq!(resolved.provider, Provider::Secondary);
    assert!(!resolved.text.contains(QUOTA_SENTINEL));
}

#[tokio::test]
async fn garbled_primary_body_falls_back() {
    let server = MockServer::start().await;
    // Parseable JSON, but the expected field is missing
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "responseStatus": 403 })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_body("bonjour")))
        .expect(1)
        .mount(&server)
        .await;

    let resolved = resolver_for(&server).await.resolve("hello", "en", "fr").await;
    assert_eq!(resolved.text, "bonjour");
    assert_eq!(resolved.provider, Provider::Secondary);
}

#[tokio::test]
async fn both_providers_failing_returns_original_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let original = "What is gravity?";
    let resolved = resolver_for(&server).await.resolve(original, "en", "fr").await;
    assert_eq!(resolved.text, original);
    assert_eq!(resolved.provider, Provider::Identity);
}
