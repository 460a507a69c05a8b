use thiserror::Error;

/// Convenient result alias for the football library.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the player gateway.
///
/// The `Display` strings are part of the public contract: they are returned
/// verbatim to API callers inside the `{"error": ...}` envelope.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    /// Identifier is not a canonical v4 UUID (also raised for an undecodable
    /// update body).
    #[error("Invalid ID")]
    InvalidId,

    /// Create body was not a valid player JSON object.
    #[error("Invalid Player data")]
    InvalidPlayerData,

    /// Freshly generated identifier already belongs to a stored player.
    #[error("Player already exists")]
    PlayerAlreadyExists,

    /// Lookup returned a record without an identifier.
    #[error("Player does not exist")]
    PlayerDoesNotExist,

    /// Point lookup or scan against the store failed.
    #[error("Failed to fetch record")]
    FetchFailed,

    /// Put issued by create failed.
    #[error("Could not post item in DB")]
    CouldNotPostItem,

    /// Put issued by update failed.
    #[error("Could not put item in DB")]
    CouldNotPutItem,

    /// Delete-by-key failed.
    #[error("Could not delete item")]
    CouldNotDeleteItem,

    /// Stored item could not be decoded into a player.
    #[error("Failed to unmarshal record")]
    UnmarshalFailed,

    /// Player could not be encoded into a store item.
    #[error("Could not marshal item")]
    CouldNotMarshalItem,
}

/// Coarse classification of an [`Error`], used for log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Backend,
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Backend => "backend",
            ErrorKind::Serialization => "serialization",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidId | Error::InvalidPlayerData => ErrorKind::Validation,
            Error::PlayerAlreadyExists | Error::PlayerDoesNotExist => ErrorKind::Conflict,
            Error::FetchFailed
            | Error::CouldNotPostItem
            | Error::CouldNotPutItem
            | Error::CouldNotDeleteItem => ErrorKind::Backend,
            Error::UnmarshalFailed | Error::CouldNotMarshalItem => ErrorKind::Serialization,
        }
    }
}
