//! DynamoDB-backed [`ItemStore`].

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use super::{Item, ItemStore, ScanPage, StoreError, StoreOp, KEY_ATTRIBUTE};

/// Store handle wrapping a shared `aws_sdk_dynamodb::Client`.
///
/// The client is cheap to clone and reuses connections and credentials across
/// invocations.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .key(KEY_ATTRIBUTE, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error(&e, StoreOp::GetItem, table))?;

        Ok(output.item)
    }

    async fn scan(&self, table: &str) -> Result<ScanPage, StoreError> {
        let output = self
            .client
            .scan()
            .table_name(table)
            .send()
            .await
            .map_err(|e| map_sdk_error(&e, StoreOp::Scan, table))?;

        debug!(
            table = %table,
            count = output.count,
            scanned = output.scanned_count,
            "scan page received"
        );

        Ok(ScanPage {
            items: output.items.unwrap_or_default(),
            last_evaluated_key: output.last_evaluated_key,
        })
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_sdk_error(&e, StoreOp::PutItem, table))?;

        Ok(())
    }

    async fn delete_item(&self, table: &str, key: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(table)
            .key(KEY_ATTRIBUTE, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error(&e, StoreOp::DeleteItem, table))?;

        Ok(())
    }
}

/// Map an SDK error from any of the four operations to a [`StoreError`].
fn map_sdk_error<E, R>(err: &SdkError<E, R>, op: StoreOp, table: &str) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    let message = DisplayErrorContext(err).to_string();
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            StoreError::ConnectionFailed { op, message }
        }
        SdkError::ServiceError(service) => match service.err().code() {
            Some("ResourceNotFoundException") => StoreError::TableNotFound {
                op,
                table: table.to_string(),
            },
            Some(
                "ProvisionedThroughputExceededException"
                | "RequestLimitExceeded"
                | "ThrottlingException",
            ) => StoreError::Throttled { op },
            _ => StoreError::RequestFailed { op, message },
        },
        _ => StoreError::RequestFailed { op, message },
    }
}
