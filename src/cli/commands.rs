//! CLI argument parsing

use crate::types::{parse_date, DEFAULT_REGION, READINESS_TABLE};
use chrono::NaiveDate;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Check whether a table's data for a date has landed
///
/// Exits 0 when ready and 1 when not ready.
#[derive(Parser, Debug)]
#[command(name = "readiness-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the source table to check data for
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub table_name: String,

    /// Date to check, in iso format (yyyy-mm-dd)
    #[arg(long, value_parser = parse_date)]
    pub date: NaiveDate,

    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION)]
    pub aws_region: String,

    /// DynamoDB table holding readiness records
    #[arg(long, default_value = READINESS_TABLE, hide = true)]
    pub readiness_table: String,

    /// DynamoDB endpoint override (local DynamoDB, tests)
    #[arg(long, hide = true)]
    pub endpoint_url: Option<String>,
}
