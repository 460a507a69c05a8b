//! The player record.

use serde::{Deserialize, Serialize};

/// An athlete record keyed by a random v4 identifier.
///
/// Every field defaults to an empty string when absent from a JSON body or a
/// stored item, and unknown fields are ignored. An empty `id` is how a
/// decoded lookup result signals "no such player".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub position: String,
    pub club: String,
}

impl Player {
    /// Decode a request body into a player.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// True when the record carries an identifier.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
