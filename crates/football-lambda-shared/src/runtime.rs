//! Cold-start configuration and store bootstrap.
//!
//! The DynamoDB client is built once per Lambda instance and handed to the
//! handler as an explicit dependency. Region, credentials and endpoint come
//! from the AWS SDK default provider chain (`AWS_REGION`, `AWS_ENDPOINT_URL`,
//! ...); only the table name is read here.

use std::time::Instant;

use aws_config::BehaviorVersion;
use football_lib::{DynamoDbStore, PlayerGateway};
use tracing::info;

/// Environment variable holding the table name.
pub const TABLE_NAME_ENV: &str = "PLAYERS_TABLE_NAME";

/// Table used when [`TABLE_NAME_ENV`] is not set.
pub const DEFAULT_TABLE_NAME: &str = "players";

/// Error during runtime initialization.
#[derive(Debug, Clone)]
pub struct InitError {
    pub message: String,
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lambda initialization failed: {}", self.message)
    }
}

impl std::error::Error for InitError {}

/// Settings read from the environment at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub table_name: String,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl LambdaConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, InitError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = match lookup(TABLE_NAME_ENV) {
            Some(value) if value.trim().is_empty() => {
                return Err(InitError {
                    message: format!("{TABLE_NAME_ENV} is set but empty"),
                })
            }
            Some(value) => value.trim().to_string(),
            None => DEFAULT_TABLE_NAME.to_string(),
        };

        Ok(Self { table_name })
    }
}

/// Build the DynamoDB-backed gateway for `config`.
pub async fn init_gateway(config: &LambdaConfig) -> PlayerGateway<DynamoDbStore> {
    let start = Instant::now();

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let region = sdk_config
        .region()
        .map(|r| r.to_string())
        .unwrap_or_else(|| "<unset>".to_string());
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);

    info!(
        table = %config.table_name,
        region = %region,
        init_ms = start.elapsed().as_millis(),
        "DynamoDB client initialized"
    );

    PlayerGateway::new(DynamoDbStore::new(client), config.table_name.clone())
}
