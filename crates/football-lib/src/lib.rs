//! Football players library entry points.
//!
//! This crate owns the player record, the identifier format check, the
//! conversion between players and DynamoDB items, and the gateway that runs
//! the read/create/update/delete operations against an [`ItemStore`].
//! Higher-level consumers (Lambdas) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod gateway;
pub mod item;
pub mod player;
pub mod store;
pub mod validate;

pub use error::{Error, ErrorKind, Result};
pub use gateway::PlayerGateway;
pub use item::{from_item, from_items, to_item, ItemError};
pub use player::Player;
pub use store::{DynamoDbStore, InMemoryStore, Item, ItemStore, ScanPage, StoreError, StoreOp};
pub use validate::is_valid_id;
