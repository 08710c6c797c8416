//! Routes declared in a config file, loaded end to end.

use std::io::Write;

use fixture_server::config::{load_config, ConfigError, ValidationError};
use fixture_server::http::FixtureServer;
use fixture_server::net;
use reqwest::StatusCode;

mod common;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_config_routes_served() {
    let file = write_config(
        r#"
[[routes]]
name = "ping"
method = "GET"
path = "/ping"
headers = [["Content-Type", "text/plain"], ["Access-Control-Allow-Origin", "*"]]
body = "pong"

[[routes]]
method = "POST"
path = "/save"
status = 422
body = "Name is required"
"#,
    );
    let config = load_config(file.path()).unwrap();
    let server = common::start_fixture_server(config).await;
    let client = common::client();

    let res = client.get(server.url("/ping")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/plain");
    assert_eq!(res.text().await.unwrap(), "pong");

    let res = client.post(server.url("/save")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.text().await.unwrap(), "Name is required");

    // Untouched built-ins still answer.
    let res = client.get(server.url("/alert")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_query_string_is_part_of_the_match() {
    let server = common::start_fixture_server(Default::default()).await;
    let client = common::client();

    let res = client
        .get(server.url("/tab-content?tab=lazy&n=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.bytes().await.unwrap().is_empty());

    let res = client.post(server.url("/save?draft=1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_invalid_file_reports_every_error() {
    let file = write_config(
        r#"
[listener]
bind_address = "localhost"

[[routes]]
method = "OPTIONS"
path = "nope"
"#,
    );

    let Err(ConfigError::Validation(errors)) = load_config(file.path()) else {
        panic!("expected validation errors");
    };
    assert_eq!(
        errors,
        vec![
            ValidationError::BindAddress("localhost".into()),
            ValidationError::RouteMethod {
                index: 0,
                method: "OPTIONS".into()
            },
            ValidationError::RoutePath {
                index: 0,
                path: "nope".into()
            },
        ]
    );
}

#[tokio::test]
async fn test_bind_conflict_propagates() {
    let first = common::start_fixture_server(Default::default()).await;

    let mut config = fixture_server::ServerConfig::default();
    config.listener.bind_address = first.addr.to_string();
    let server = FixtureServer::new(config).unwrap();

    let err = net::bind(&server.config().listener).await.unwrap_err();
    assert!(err.to_string().contains(&first.addr.to_string()));
}
