//! CLI runner - executes the readiness check

use crate::checker::ReadinessChecker;
use crate::cli::commands::Cli;
use crate::config::Credentials;
use crate::error::Result;
use crate::store::{connect, ReadinessStore};
use crate::types::Verdict;
use tracing::{info, instrument};

/// CLI runner
pub struct Runner {
    cli: Cli,
    credentials: Credentials,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli, credentials: Credentials) -> Self {
        Self { cli, credentials }
    }

    /// Connect to DynamoDB and run the check
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result<Verdict> {
        info!("Setting aws session");
        let session = connect(
            &self.credentials,
            &self.cli.aws_region,
            self.cli.endpoint_url.as_deref(),
        )
        .await;

        info!("Initializing DynamoDB readiness checker");
        let checker = ReadinessChecker::connect(
            self.cli.readiness_table.as_str(),
            &self.cli.aws_region,
            Some(session),
        )
        .await;

        self.check(&checker).await
    }

    /// Run the check against an already constructed checker
    #[instrument(skip_all)]
    pub async fn check<S: ReadinessStore>(&self, checker: &ReadinessChecker<S>) -> Result<Verdict> {
        info!("Checking readiness state");
        let ready = checker.check_ready(&self.cli.table_name, self.cli.date).await?;
        Ok(Verdict::from(ready))
    }
}
