//! Response envelope returned to API Gateway.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body returned for verbs the handler does not route.
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";

/// Headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 5] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "OPTIONS, POST, GET, PUT, DELETE"),
    ("Access-Control-Allow-Credentials", "true"),
];

/// API Gateway proxy integration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-serialized payload.
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    /// Parse the body back into JSON.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

/// Error payload, serialized as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Wrap `body` into a response with `status` and the CORS headers.
///
/// If `body` cannot be serialized the failure is logged and the response is
/// sent with an empty body.
pub fn response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> ProxyResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        warn!(status = status.as_u16(), error = %e, "failed to serialize response body");
        String::new()
    });

    ProxyResponse {
        status_code: status.as_u16(),
        headers: CORS_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        body,
        is_base64_encoded: false,
    }
}

/// 400 response carrying `message` in an [`ErrorBody`].
pub fn error_response(message: impl Into<String>) -> ProxyResponse {
    response(StatusCode::BAD_REQUEST, &ErrorBody::new(message))
}

/// 405 response for unrouted verbs.
pub fn method_not_allowed() -> ProxyResponse {
    response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::Serializer;
    use serde_json::json;

    #[derive(Debug, Serialize)]
    struct TestData {
        value: i32,
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn serializes_body_and_status() {
        let response = response(StatusCode::CREATED, &TestData { value: 42 });
        assert_eq!(response.status_code, 201);
        assert_eq!(response.body, r#"{"value":42}"#);
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn always_attaches_cors_headers() {
        let response = response(StatusCode::OK, &());
        assert_eq!(response.headers.len(), 5);
        assert_eq!(response.headers["Content-Type"], "application/json");
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(response.headers["Access-Control-Allow-Headers"], "Content-Type");
        assert_eq!(
            response.headers["Access-Control-Allow-Methods"],
            "OPTIONS, POST, GET, PUT, DELETE"
        );
        assert_eq!(response.headers["Access-Control-Allow-Credentials"], "true");
    }

    #[test]
    fn unit_and_none_serialize_as_null() {
        assert_eq!(response(StatusCode::OK, &()).body, "null");
        assert_eq!(response(StatusCode::OK, &None::<TestData>).body, "null");
    }

    #[test]
    fn serialization_failure_yields_empty_body() {
        let response = response(StatusCode::OK, &Unserializable);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "");
        assert_eq!(response.headers.len(), 5);
    }

    #[test]
    fn error_response_wraps_message() {
        let response = error_response("Invalid ID");
        assert_eq!(response.status_code, 400);
        assert_eq!(response.json().unwrap(), json!({"error": "Invalid ID"}));
    }

    #[test]
    fn method_not_allowed_body_is_json_string() {
        let response = method_not_allowed();
        assert_eq!(response.status_code, 405);
        assert_eq!(response.body, r#""method not allowed""#);
    }

    #[test]
    fn envelope_uses_api_gateway_field_names() {
        let value = serde_json::to_value(error_response("boom")).unwrap();
        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["isBase64Encoded"], false);
        assert_eq!(value["body"], r#"{"error":"boom"}"#);
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
    }
}
