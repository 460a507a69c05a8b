//! Test utilities for Lambda handler testing.
//!
//! Provides an in-memory gateway, fixed identifiers and API Gateway event
//! builders so handler tests never touch DynamoDB.
//!
//! # Usage
//!
//! ```ignore
//! use football_lambda_shared::test_utils::{memory_gateway, proxy_event, MESSI_BODY};
//!
//! #[tokio::test]
//! async fn test_handler() {
//!     let gateway = memory_gateway();
//!     let event = proxy_event("POST", None, Some(MESSI_BODY));
//!     // ... invoke the handler with `gateway` and `event`
//! }
//! ```

use std::collections::HashMap;

use football_lib::{InMemoryStore, Player, PlayerGateway};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::requests::ProxyRequest;

/// Table name used by every in-memory gateway.
pub const TABLE: &str = "players";

/// Identifier produced by [`fixed_id_generator`].
pub const FIXED_ID: &str = "0b6c4f6e-2f57-4c3e-9d55-6f8f2b1d7a10";

/// A complete player body without an identifier.
pub const MESSI_BODY: &str = r#"{"firstName":"Leo","lastName":"Messi","country":"Argentina","position":"Forward","club":"Inter Miami"}"#;

/// Gateway over an empty [`InMemoryStore`].
pub fn memory_gateway() -> PlayerGateway<InMemoryStore> {
    PlayerGateway::new(InMemoryStore::new(), TABLE)
}

/// Identifier generator that always returns [`FIXED_ID`].
pub fn fixed_id_generator() -> Uuid {
    Uuid::parse_str(FIXED_ID).expect("fixed id is a valid uuid")
}

/// The player described by [`MESSI_BODY`], carrying `id`.
pub fn sample_player(id: &str) -> Player {
    Player {
        id: id.to_string(),
        first_name: "Leo".to_string(),
        last_name: "Messi".to_string(),
        country: "Argentina".to_string(),
        position: "Forward".to_string(),
        club: "Inter Miami".to_string(),
    }
}

/// Build a proxy request with an optional `id` query parameter and body.
pub fn proxy_request(method: &str, id: Option<&str>, body: Option<&str>) -> ProxyRequest {
    ProxyRequest {
        http_method: method.to_string(),
        path: Some("/players".to_string()),
        query_string_parameters: id
            .map(|id| HashMap::from([("id".to_string(), id.to_string())])),
        body: body.map(str::to_string),
        is_base64_encoded: false,
    }
}

/// Raw API Gateway event JSON as the Lambda runtime would deliver it.
pub fn proxy_event(method: &str, id: Option<&str>, body: Option<&str>) -> Value {
    json!({
        "resource": "/players",
        "path": "/players",
        "httpMethod": method,
        "headers": {"Content-Type": "application/json"},
        "queryStringParameters": id.map(|id| json!({ "id": id })),
        "requestContext": {"stage": "test"},
        "body": body,
        "isBase64Encoded": false
    })
}

/// Create a mock Lambda request ID for testing.
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{suffix}")
}
