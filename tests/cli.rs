//! End-to-end tests for the readiness-check binary
//!
//! The binary is pointed at a mock DynamoDB endpoint through the hidden
//! `--endpoint-url` flag.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::{Command, Output};
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AMZ_JSON: &str = "application/x-amz-json-1.0";

/// Run the binary off the async runtime so the mock server keeps serving
async fn run(args: &[&str], credentials: bool) -> Output {
    let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("readiness-check").unwrap();
        cmd.args(&args)
            .env_remove("AWS_ACCESS_KEY_ID")
            .env_remove("AWS_SECRET_ACCESS_KEY")
            .env_remove("AWS_SESSION_TOKEN")
            .env_remove("RUST_LOG");
        if credentials {
            cmd.env("AWS_ACCESS_KEY_ID", "AKIDTEST")
                .env("AWS_SECRET_ACCESS_KEY", "SECRETTEST");
        }
        cmd.output().unwrap()
    })
    .await
    .unwrap()
}

async fn mount_orders_item(server: &MockServer) {
    Mock::given(method("POST"))
        .and(header("x-amz-target", "DynamoDB_20120810.GetItem"))
        .and(body_partial_json(json!({
            "TableName": "readiness-states",
            "Key": {"name": {"S": "orders"}, "date": {"S": "2024-03-01"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            json!({"Item": {"name": {"S": "orders"}, "date": {"S": "2024-03-01"}}}).to_string(),
            AMZ_JSON,
        ))
        .mount(server)
        .await;

    // Anything else is absent
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", AMZ_JSON))
        .with_priority(10)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_ready_exits_zero() {
    let server = MockServer::start().await;
    mount_orders_item(&server).await;
    let uri = server.uri();

    let output = run(
        &["--table-name", "orders", "--date", "2024-03-01", "--endpoint-url", &uri],
        true,
    )
    .await;

    output.assert().code(0);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_log_lines_carry_function_names() {
    let server = MockServer::start().await;
    mount_orders_item(&server).await;
    let uri = server.uri();

    let output = run(
        &["--table-name", "orders", "--date", "2024-03-01", "--endpoint-url", &uri],
        true,
    )
    .await;

    output
        .assert()
        .code(0)
        .stderr(predicate::str::contains("run: Setting aws session"))
        .stderr(predicate::str::contains("check: Checking readiness state"))
        .stderr(predicate::str::contains(
            "check_ready: Checking state: table=orders, date=2024-03-01",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_not_ready_exits_one() {
    let server = MockServer::start().await;
    mount_orders_item(&server).await;
    let uri = server.uri();

    let output = run(
        &["--table-name", "orders", "--date", "2024-03-02", "--endpoint-url", &uri],
        true,
    )
    .await;

    output
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not ready"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_logs_lowercased_table_name() {
    let server = MockServer::start().await;
    mount_orders_item(&server).await;
    let uri = server.uri();

    let output = run(
        &["--table-name", "ORDERS", "--date", "2024-03-01", "--endpoint-url", &uri],
        true,
    )
    .await;

    // Key lookup is case-sensitive, so the upper-case name is not ready
    output
        .assert()
        .code(1)
        .stderr(predicate::str::contains("table=orders, date=2024-03-01"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_invalid_date_is_usage_error_without_store_calls() {
    let server = MockServer::start().await;
    mount_orders_item(&server).await;
    let uri = server.uri();

    let output = run(
        &["--table-name", "orders", "--date", "2024-13-01", "--endpoint-url", &uri],
        true,
    )
    .await;

    output
        .assert()
        .code(2)
        .stderr(predicate::str::contains("yyyy-mm-dd"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_missing_credentials_aborts_before_parsing() {
    let server = MockServer::start().await;
    mount_orders_item(&server).await;
    let uri = server.uri();

    // Arguments are invalid too; the credential check must win
    let output = run(&["--date", "not-a-date", "--endpoint-url", &uri], false).await;

    output
        .assert()
        .code(3)
        .stderr(predicate::str::contains("AWS_ACCESS_KEY_ID"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_store_error_exits_four() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            json!({
                "__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
                "message": "Requested resource not found"
            })
            .to_string(),
            AMZ_JSON,
        ))
        .mount(&server)
        .await;
    let uri = server.uri();

    let output = run(
        &["--table-name", "orders", "--date", "2024-03-01", "--endpoint-url", &uri],
        true,
    )
    .await;

    output
        .assert()
        .code(4)
        .stderr(predicate::str::contains("DynamoDB error"));
}
