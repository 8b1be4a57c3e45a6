//! DynamoDB-backed readiness store
//!
//! Records live in a table with a composite primary key:
//!
//! | Attribute | Type   | Description                    |
//! |-----------|--------|--------------------------------|
//! | `name`    | String | Partition key: dataset name    |
//! | `date`    | String | Sort key: `YYYY-MM-DD`         |
//!
//! No other attributes are read.

use super::ReadinessStore;
use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::types::{ReadinessRecord, RecordKey};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Build an authenticated DynamoDB client from explicit credentials
///
/// `endpoint_url` overrides the regional endpoint, e.g. for local DynamoDB.
#[instrument(skip_all)]
pub async fn connect(
    credentials: &Credentials,
    region: &str,
    endpoint_url: Option<&str>,
) -> Client {
    let provider = aws_sdk_dynamodb::config::Credentials::new(
        credentials.access_key_id.clone(),
        credentials.secret_access_key.clone(),
        credentials.session_token.clone(),
        None,
        "readiness-check",
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .credentials_provider(provider);
    if let Some(url) = endpoint_url {
        debug!("Using DynamoDB endpoint override {url}");
        loader = loader.endpoint_url(url);
    }

    let config = loader.load().await;
    Client::new(&config)
}

/// Readiness store over a single DynamoDB table
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Create a store with a pre-built client
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Create a store using the standard AWS config chain in `region`
    ///
    /// Credentials come from wherever the SDK finds them: environment,
    /// profiles, or instance metadata.
    pub async fn from_env(table_name: impl Into<String>, region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&config), table_name)
    }

    /// Name of the table being queried
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The underlying DynamoDB client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Convert a returned item into a record
///
/// `name` falls back to the requested key. A missing `date` is an error; a
/// `date` of any other type than `S` yields a record that confirms nothing.
fn parse_item(item: &HashMap<String, AttributeValue>, key: &RecordKey) -> Result<ReadinessRecord> {
    let date = item
        .get("date")
        .ok_or_else(|| Error::malformed_item(key, "missing date attribute"))?
        .as_s()
        .ok()
        .cloned();

    let name = item
        .get("name")
        .and_then(|v| v.as_s().ok())
        .map_or_else(|| key.name.clone(), String::clone);

    Ok(ReadinessRecord { name, date })
}

#[async_trait]
impl ReadinessStore for DynamoDbStore {
    async fn get_record(&self, key: &RecordKey) -> Result<Option<ReadinessRecord>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("name", AttributeValue::S(key.name.clone()))
            .key("date", AttributeValue::S(key.date.clone()))
            .send()
            .await
            .map_err(|e| Error::store(key, DisplayErrorContext(&e).to_string()))?;

        match output.item() {
            Some(item) if !item.is_empty() => parse_item(item, key).map(Some),
            _ => Ok(None),
        }
    }
}
