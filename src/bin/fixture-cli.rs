//! Companion CLI for the fixture server.
//!
//! - `routes`: print the built-in table as JSON, no server needed
//! - `probe`: send one request and dump status, headers and body
//! - `check`: request every built-in route and report mismatches

use clap::{Parser, Subcommand};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use fixture_server::routing::{RouteEntry, RouteTable};

#[derive(Parser)]
#[command(name = "fixture-cli")]
#[command(about = "Inspect and probe the fixture server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in route table as JSON
    Routes,
    /// Send one request and print status, headers and body
    Probe {
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,
        path: String,
    },
    /// Request every built-in route and compare against the table
    Check,
}

#[derive(Serialize)]
struct RouteSummary {
    method: String,
    path: String,
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

impl From<&RouteEntry> for RouteSummary {
    fn from(entry: &RouteEntry) -> Self {
        Self {
            method: entry.method().to_string(),
            path: entry.path().to_string(),
            status: entry.status().as_u16(),
            headers: entry
                .headers()
                .iter()
                .map(|(n, v)| {
                    (
                        n.to_string(),
                        String::from_utf8_lossy(v.as_bytes()).into_owned(),
                    )
                })
                .collect(),
            body: String::from_utf8_lossy(entry.body_bytes()).into_owned(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let base = Url::parse(&cli.url)?;
    let client = reqwest::Client::builder().no_proxy().build()?;

    match cli.command {
        Commands::Routes => {
            let table = RouteTable::builtin();
            let routes: Vec<RouteSummary> = table.entries().map(RouteSummary::from).collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Probe { method, path } => {
            let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())?;
            let res = client.request(method, base.join(&path)?).send().await?;
            print_response(res).await?;
        }
        Commands::Check => {
            let failures = check(&client, &base).await?;
            if failures > 0 {
                return Err(format!("{} route(s) did not match the table", failures).into());
            }
            println!("All routes match");
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    println!("{:?} {}", res.version(), res.status());
    for (name, value) in res.headers() {
        println!("{}: {}", name, String::from_utf8_lossy(value.as_bytes()));
    }
    println!();

    let body = res.bytes().await?;
    println!("{}", String::from_utf8_lossy(&body));
    Ok(())
}

/// Returns the number of mismatching routes.
async fn check(client: &reqwest::Client, base: &Url) -> Result<usize, Box<dyn std::error::Error>> {
    let table = RouteTable::builtin();
    let mut failures = 0;

    for entry in table.entries() {
        let res = client
            .request(entry.method().clone(), base.join(entry.path())?)
            .send()
            .await?;

        let mut problems = Vec::new();
        if res.status() != entry.status() {
            problems.push(format!("status {} != {}", res.status(), entry.status()));
        }
        for (name, value) in entry.headers() {
            if res.headers().get(name) != Some(value) {
                problems.push(format!("header {} missing or different", name));
            }
        }
        if res.bytes().await? != *entry.body_bytes() {
            problems.push("body differs".to_string());
        }

        report(entry.method(), entry.path(), &problems);
        failures += usize::from(!problems.is_empty());
    }

    let res = client
        .request(Method::OPTIONS, base.join("/does-not-exist")?)
        .send()
        .await?;
    let mut problems = Vec::new();
    if !res.status().is_success() {
        problems.push(format!("status {}", res.status()));
    }
    if res.headers().get("access-control-allow-methods").is_none() {
        problems.push("no Access-Control-Allow-Methods".to_string());
    }
    report(&Method::OPTIONS, "/does-not-exist", &problems);
    failures += usize::from(!problems.is_empty());

    Ok(failures)
}

fn report(method: &Method, path: &str, problems: &[String]) {
    if problems.is_empty() {
        println!("ok       {} {}", method, path);
    } else {
        println!("MISMATCH {} {}: {}", method, path, problems.join("; "));
    }
}
