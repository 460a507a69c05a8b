//! Player read/create/update/delete operations over an [`ItemStore`].
//!
//! The gateway converts between [`Player`] and store items and maps every
//! store or codec failure onto the [`Error`] taxonomy. Underlying causes are
//! logged, never returned: callers only ever see the fixed messages.
//!
//! Two behaviours are kept on purpose:
//!
//! - Create and update check for an existing record and then issue an
//!   unconditional put. The two steps are not atomic, so concurrent writers
//!   targeting the same identifier can overwrite each other.
//! - `get_players` issues a single scan and returns its first page only. A
//!   truncated page is logged at `warn`.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::item::{from_item, from_items, to_item};
use crate::player::Player;
use crate::store::ItemStore;
use crate::validate::is_valid_id;

/// Source of identifiers for newly created players.
pub type IdGenerator = fn() -> Uuid;

/// Entry point for all player operations against one table.
#[derive(Debug, Clone)]
pub struct PlayerGateway<S> {
    store: S,
    table: String,
    new_id: IdGenerator,
}

impl<S: ItemStore> PlayerGateway<S> {
    /// Gateway over `table` that assigns random v4 identifiers.
    pub fn new(store: S, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
            new_id: Uuid::new_v4,
        }
    }

    /// Replace the identifier source used by [`create_player`](Self::create_player).
    pub fn with_id_generator(mut self, new_id: IdGenerator) -> Self {
        self.new_id = new_id;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch one player by identifier.
    ///
    /// A key with no stored item is reported as [`Error::FetchFailed`].
    pub async fn get_player(&self, id: &str) -> Result<Player> {
        if !is_valid_id(id) {
            return Err(Error::InvalidId);
        }

        let item = match self.store.get_item(&self.table, id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                debug!(table = %self.table, player_id = %id, "no item stored under key");
                return Err(Error::FetchFailed);
            }
            Err(e) => {
                warn!(table = %self.table, player_id = %id, error = %e, "point lookup failed");
                return Err(Error::FetchFailed);
            }
        };

        from_item(&item).map_err(|e| {
            warn!(table = %self.table, player_id = %id, error = %e, "stored player is malformed");
            Error::UnmarshalFailed
        })
    }

    /// Fetch every player on the first scan page, in store order.
    pub async fn get_players(&self) -> Result<Vec<Player>> {
        let page = self.store.scan(&self.table).await.map_err(|e| {
            warn!(table = %self.table, error = %e, "scan failed");
            Error::FetchFailed
        })?;

        if page.is_truncated() {
            warn!(
                table = %self.table,
                returned = page.items.len(),
                "scan result truncated; only the first page is returned"
            );
        }

        from_items(&page.items).map_err(|e| {
            warn!(table = %self.table, error = %e, "stored players are malformed");
            Error::UnmarshalFailed
        })
    }

    /// Create a player from a JSON body, assigning a fresh identifier.
    ///
    /// Any `id` supplied by the caller is discarded.
    pub async fn create_player(&self, body: &str) -> Result<Player> {
        let mut player = Player::from_json(body).map_err(|e| {
            debug!(error = %e, "create body is not a player");
            Error::InvalidPlayerData
        })?;
        player.id = (self.new_id)().to_string();

        if let Ok(existing) = self.get_player(&player.id).await {
            if existing.has_id() {
                warn!(table = %self.table, player_id = %player.id, "generated id already in use");
                return Err(Error::PlayerAlreadyExists);
            }
        }

        self.put(&player, Error::CouldNotPostItem).await?;
        info!(table = %self.table, player_id = %player.id, "player created");
        Ok(player)
    }

    /// Replace a player in full with the JSON body, keyed by its `id`.
    ///
    /// An absent key, or a stored record that decodes with an empty `id`, is
    /// rejected as missing. A lookup that fails outright (store error or
    /// undecodable record) does not stop the write.
    pub async fn update_player(&self, body: &str) -> Result<Player> {
        let player = Player::from_json(body).map_err(|e| {
            debug!(error = %e, "update body is not a player");
            Error::InvalidId
        })?;

        if !is_valid_id(&player.id) {
            return Err(Error::InvalidId);
        }

        if !self.exists_for_update(&player.id).await {
            debug!(table = %self.table, player_id = %player.id, "update target not stored");
            return Err(Error::PlayerDoesNotExist);
        }

        self.put(&player, Error::CouldNotPutItem).await?;
        info!(table = %self.table, player_id = %player.id, "player updated");
        Ok(player)
    }

    /// Delete a player by identifier. Deleting an unknown identifier succeeds.
    pub async fn delete_player(&self, id: &str) -> Result<()> {
        if !is_valid_id(id) {
            return Err(Error::InvalidId);
        }

        self.store.delete_item(&self.table, id).await.map_err(|e| {
            warn!(table = %self.table, player_id = %id, error = %e, "delete failed");
            Error::CouldNotDeleteItem
        })?;

        info!(table = %self.table, player_id = %id, "player deleted");
        Ok(())
    }

    /// Existence check ahead of an update. Lookup failures count as present.
    async fn exists_for_update(&self, id: &str) -> bool {
        match self.store.get_item(&self.table, id).await {
            Ok(None) => false,
            Ok(Some(item)) => match from_item::<Player>(&item) {
                Ok(current) => current.has_id(),
                Err(e) => {
                    warn!(
                        table = %self.table,
                        player_id = %id,
                        error = %e,
                        "stored player is malformed"
                    );
                    true
                }
            },
            Err(e) => {
                warn!(table = %self.table, player_id = %id, error = %e, "existence check failed");
                true
            }
        }
    }

    async fn put(&self, player: &Player, write_error: Error) -> Result<()> {
        let item = to_item(player).map_err(|e| {
            warn!(player_id = %player.id, error = %e, "could not encode player");
            Error::CouldNotMarshalItem
        })?;

        self.store.put_item(&self.table, item).await.map_err(|e| {
            warn!(table = %self.table, player_id = %player.id, error = %e, "put failed");
            write_error
        })
    }
}
