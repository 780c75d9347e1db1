//! Wellboard smoke check — backend connectivity probe
//!
//! Points the console's API client at a backend and walks the basic
//! operator path: liveness, system info, and (with credentials) login
//! followed by an authenticated dashboard fetch. Exits non-zero on the
//! first transport failure so deployment scripts can gate on it.
//!
//! ```bash
//! # Anonymous probe against the configured backend
//! wellboard-smoke
//!
//! # Full authenticated pass
//! wellboard-smoke --username operator --password secret
//! ```
//!
//! ## Environment variables
//!
//! | Variable               | Required | Description                          |
//! |------------------------|----------|--------------------------------------|
//! | `WELLBOARD_API_URL`    | No       | Backend base URL override            |
//! | `WELLBOARD_CONFIG`     | No       | Explicit config file path            |
//! | `WELLBOARD_TOKEN_PATH` | No       | Token file location                  |

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use wellboard::types::{Credentials, TokenGrant, WellQuery};
use wellboard::{ApiClient, ConsoleConfig, FileTokenStore, TokenProvider};

#[derive(Parser, Debug)]
#[command(name = "wellboard-smoke", about = "Wellboard — backend connectivity check")]
struct CliArgs {
    /// Backend base URL (overrides config file)
    #[arg(long, env = "WELLBOARD_API_URL")]
    api_url: Option<String>,

    /// Config file path
    #[arg(long, env = "WELLBOARD_CONFIG")]
    config: Option<String>,

    /// Token file location
    #[arg(long, env = "WELLBOARD_TOKEN_PATH")]
    token_path: Option<String>,

    /// Username for the authenticated pass
    #[arg(long)]
    username: Option<String>,

    /// Password for the authenticated pass
    #[arg(long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    let config = ConsoleConfig::load_layered(args.config, args.api_url, args.token_path);
    config.validate().context("Invalid console configuration")?;

    let store = FileTokenStore::new(config.auth.token_path.clone());
    let client = ApiClient::builder()
        .base_url(config.api.base_url.clone())
        .timeout(std::time::Duration::from_secs(config.api.timeout_secs))
        .token_provider(Arc::new(store.clone()))
        .build()
        .context("Failed to build API client")?;

    println!("Checking backend: {}", client.base_url());
    println!();

    // Step 1+2: unauthenticated probes, issued together
    println!("  [1/4] Probing liveness and system info...");
    let (health, info) =
        futures::future::try_join(client.health_check(), client.system_info())
            .await
            .context("Backend unreachable")?;
    println!("        /health       HTTP {}", health.status());
    println!("        /system/info  HTTP {}", info.status());
    if info.status().is_success() {
        let payload: serde_json::Value =
            info.json().await.context("Invalid system info response")?;
        if let Some(version) = payload.get("version").and_then(|v| v.as_str()) {
            println!("        Backend version: {}", version);
        }
    }

    // Step 2: login, when credentials were given
    match (args.username, args.password) {
        (Some(username), Some(password)) => {
            println!("  [2/4] Logging in as {}...", username);
            let resp = client
                .login(&Credentials::new(username, password))
                .await
                .context("Login request failed")?;
            if !resp.status().is_success() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                anyhow::bail!("Login rejected (HTTP {}): {}", status, text);
            }
            let grant: TokenGrant = resp.json().await.context("Invalid token grant")?;
            store
                .store(&grant.access_token)
                .with_context(|| format!("Failed to write {}", store.path().display()))?;
            println!("        Token stored at {}", store.path().display());
        }
        (None, None) => {
            if store.token().is_some() {
                println!("  [2/4] No credentials given, using stored token");
            } else {
                println!("  [2/4] No credentials given, continuing unauthenticated");
            }
        }
        _ => anyhow::bail!("--username and --password must be given together"),
    }

    // Step 3: dashboard overview (picks up the token stored above)
    println!("  [3/4] Fetching dashboard overview...");
    let overview = client
        .dashboard_overview()
        .await
        .context("Dashboard request failed")?;
    println!("        /dashboard/overview  HTTP {}", overview.status());

    // Step 4: well list
    println!("  [4/4] Fetching well list...");
    let wells = client
        .list_wells(&WellQuery::default())
        .await
        .context("Well list request failed")?;
    let status = wells.status();
    println!("        /wells/  HTTP {}", status);
    if status.is_success() {
        let payload: serde_json::Value = wells.json().await.context("Invalid well list")?;
        if let Some(list) = payload.as_array() {
            println!("        {} wells visible", list.len());
        }
    }

    println!();
    println!("Smoke check complete");
    Ok(())
}
