//! Tests for the chat API client.
//!
//! Validates URL construction and the request payload shape; the network
//! call itself is exercised against the real backend, not here.

use crate::api::ChatApiClient;
use crate::models::{ChatRequest, ChatResponse};

#[test]
fn chat_url_joins_base_and_path() {
    let client = ChatApiClient::new("/api");
    assert_eq!(client.api_url("chat"), "/api/chat");
}

#[test]
fn trailing_and_leading_slashes_collapse() {
    let client = ChatApiClient::new("http://localhost:8080/api/");
    assert_eq!(client.api_url("/chat"), "http://localhost:8080/api/chat");
}

#[test]
fn request_body_carries_raw_message() {
    let request = ChatRequest {
        message: " raw, untrimmed \n".to_string(),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, "{\"message\":\" raw, untrimmed \\n\"}");
}

#[test]
fn malformed_success_body_is_not_a_reply() {
    // A 200 whose body decodes but lacks the reply field is handled by the
    // greeting fallback, not the error path.
    let decoded: ChatResponse = serde_json::from_str(r#"{"model":"fv-1"}"#).unwrap();
    assert_eq!(decoded.reply, None);
}

#[test]
fn shared_client_is_reusable() {
    let first = ChatApiClient::shared();
    let second = ChatApiClient::shared();
    assert_eq!(first.api_url("chat"), second.api_url("chat"));
}
