//! Readiness checker
//!
//! Answers "is `table` ready for `date`?" with a single point lookup
//! against the readiness table.

use crate::error::{Error, Result};
use crate::store::{DynamoDbStore, ReadinessStore};
use crate::types::RecordKey;
use aws_sdk_dynamodb::Client;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// Checks readiness records in a store
#[derive(Debug)]
pub struct ReadinessChecker<S = DynamoDbStore> {
    store: S,
}

impl ReadinessChecker<DynamoDbStore> {
    /// Create a checker over the DynamoDB table `readiness_table`
    ///
    /// Uses `session` when given; otherwise builds a client in
    /// `default_region` from the standard AWS config chain.
    pub async fn connect(
        readiness_table: impl Into<String>,
        default_region: &str,
        session: Option<Client>,
    ) -> Self {
        let store = match session {
            Some(client) => DynamoDbStore::new(client, readiness_table),
            None => DynamoDbStore::from_env(readiness_table, default_region).await,
        };
        Self::new(store)
    }
}

impl<S: ReadinessStore> ReadinessChecker<S> {
    /// Create a checker over any readiness store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check whether `table` is ready for `date`
    ///
    /// The lookup key uses `table` exactly as given; only the log lines
    /// lowercase it. A found item counts as ready only if its own `date`
    /// matches the requested one.
    #[instrument(skip_all)]
    pub async fn check_ready(&self, table: &str, date: NaiveDate) -> Result<bool> {
        if table.is_empty() {
            return Err(Error::EmptyTableName);
        }

        let key = RecordKey::new(table, date);
        let table_lowercase = table.to_lowercase();
        info!("Checking state: table={table_lowercase}, date={}", key.date);

        let item = self.store.get_record(&key).await?;
        let is_ready = item.is_some_and(|record| record.confirms(&key));

        let status = format!("Resource `{table_lowercase}` for date {} is", key.date);
        if is_ready {
            debug!("{status} ready");
        } else {
            debug!("{status} not ready.");
        }
        Ok(is_ready)
    }
}
