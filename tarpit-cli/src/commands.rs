//! Subcommand implementations.
//!
//! Every handler funnels its backend reply through [`require`], so the one
//! place that turns failure outcomes into process exits also words them.

use std::path::Path;

use anyhow::{anyhow, bail};
use tracing::info;

use tarpit_client::types::AppExport;
use tarpit_client::{ApiClient, ApiOutcome, ResourceKind};

/// Unwraps a successful outcome; every failure kind becomes a non-zero
/// exit with its message.
fn require<T>(outcome: ApiOutcome<T>) -> anyhow::Result<T> {
    match outcome {
        ApiOutcome::Success(value) => Ok(value),
        ApiOutcome::Unauthorized => {
            bail!("the backend rejected the credential (403); run `tarpit login`")
        }
        ApiOutcome::BackendFailure(message) => bail!("backend error: {message}"),
        ApiOutcome::TransportFailure(message) => bail!("cannot reach the backend: {message}"),
    }
}

pub async fn login(client: &ApiClient, user: &str, password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    match client.login(user, &password).await? {
        ApiOutcome::Success(()) => {
            println!("logged in as {user}");
            Ok(())
        }
        ApiOutcome::Unauthorized => bail!("the backend rejected the login with a 403"),
        ApiOutcome::BackendFailure(message) => bail!("{message}"),
        ApiOutcome::TransportFailure(message) => bail!("cannot reach the backend: {message}"),
    }
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("password: ");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let password = line.trim();
    if password.is_empty() {
        bail!("no password given");
    }
    Ok(password.to_string())
}

pub async fn logout(client: &ApiClient) -> anyhow::Result<()> {
    client.log_out().await?;
    println!("credential cleared");
    Ok(())
}

pub async fn search(
    client: &ApiClient,
    kind: &str,
    query: &str,
    offset: i64,
    limit: i64,
) -> anyhow::Result<()> {
    let Some(kind) = ResourceKind::from_name(kind) else {
        bail!(
            "unknown resource {kind:?}; one of {}",
            ResourceKind::ALL.map(ResourceKind::name).join(", ")
        );
    };

    let items = require(
        client
            .segment::<serde_json::Value>(kind, query, offset, limit)
            .await?,
    )?;
    info!(count = items.len(), %kind, offset, "page fetched");
    for item in items {
        println!("{}", serde_json::to_string(&item)?);
    }
    Ok(())
}

pub async fn export_app(client: &ApiClient, id: i64, out: Option<&Path>) -> anyhow::Result<()> {
    let bundle = require(client.export_app(id).await?)?;
    let encoded = serde_json::to_string_pretty(&bundle)?;
    match out {
        Some(path) => {
            std::fs::write(path, encoded)
                .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
            info!(path = %path.display(), "bundle written");
        }
        None => println!("{encoded}"),
    }
    Ok(())
}

pub async fn import_app(client: &ApiClient, file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .map_err(|e| anyhow!("Failed to read {}: {}", file.display(), e))?;
    let bundle: AppExport = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("{} is not an export bundle: {}", file.display(), e))?;
    let name = bundle
        .app
        .as_ref()
        .map(|app| app.name.clone())
        .unwrap_or_else(|| "(unnamed)".to_string());

    require(client.import_app(&bundle).await?)?;
    println!(
        "imported application {name} ({} rules, {} contents)",
        bundle.rules.len(),
        bundle.contents.len()
    );
    Ok(())
}

pub async fn whois(client: &ApiClient, ip: &str) -> anyhow::Result<()> {
    let entry = require(client.whois(ip).await?)?;
    println!("ip:      {}", entry.ip);
    println!("country: {}", entry.country);
    if !entry.data.is_empty() {
        println!("{}", entry.data);
    }
    if !entry.rdap_string.is_empty() {
        println!("{}", entry.rdap_string);
    }
    Ok(())
}

pub async fn stats(client: &ApiClient) -> anyhow::Result<()> {
    let stats = require(client.global_stats().await?)?;

    if !stats.requests_per_month.is_empty() {
        println!("requests per month:");
        for row in &stats.requests_per_month {
            println!("  {:<10} {}", row.month, row.total_entries);
        }
    }
    if !stats.top_10_source_ips_last_24_hours.is_empty() {
        println!("top source IPs, last 24h:");
        for row in &stats.top_10_source_ips_last_24_hours {
            println!("  {:<40} {}", row.source_ip, row.total_requests);
        }
    }
    if !stats.top_10_uris_last_24_hours.is_empty() {
        println!("top URIs, last 24h:");
        for row in &stats.top_10_uris_last_24_hours {
            println!("  {:<60} {}", row.uri, row.total_requests);
        }
    }
    if !stats.malware_last_24_hours.is_empty() {
        println!("malware, last 24h:");
        for row in &stats.malware_last_24_hours {
            println!(
                "  {:<20} {:<20} {}",
                row.kind, row.subtype, row.total_entries
            );
        }
    }
    Ok(())
}
