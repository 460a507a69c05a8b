//! Inbound API Gateway proxy event.

use std::borrow::Cow;
use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The parts of an API Gateway (REST, proxy integration) event the handler
/// reads. Everything else in the event is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// HTTP verb exactly as sent by API Gateway (`GET`, `POST`, ...).
    #[serde(default)]
    pub http_method: String,

    /// Resource path, used for logging only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Query string parameters. API Gateway sends `null` when there are none.
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,

    /// Raw request body.
    #[serde(default)]
    pub body: Option<String>,

    /// True when API Gateway base64-encoded the body.
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyRequest {
    /// Value of a query string parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    /// The `id` query parameter, or an empty string when absent.
    pub fn id_param(&self) -> &str {
        self.query_param("id").unwrap_or_default()
    }

    /// Request body as text, decoding base64 when flagged.
    ///
    /// A missing body, or a flagged body that is not valid base64 UTF-8, is
    /// returned as an empty string.
    pub fn body_text(&self) -> Cow<'_, str> {
        let Some(body) = self.body.as_deref() else {
            return Cow::Borrowed("");
        };

        if !self.is_base64_encoded {
            return Cow::Borrowed(body);
        }

        match STANDARD.decode(body).map(String::from_utf8) {
            Ok(Ok(text)) => Cow::Owned(text),
            Ok(Err(e)) => {
                warn!(error = %e, "decoded request body is not UTF-8");
                Cow::Borrowed("")
            }
            Err(e) => {
                warn!(error = %e, "request body is not valid base64");
                Cow::Borrowed("")
            }
        }
    }
}
