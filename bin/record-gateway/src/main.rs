// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

// Minimal bootstrap; handlers and the record core live in library modules.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use record_gateway::{
    config::{load_config, GatewayConfig},
    http::routes::{build_meta_router, build_records_router},
    logging::init_tracing,
    AppState,
};
use stave::{HttpStoreClient, ProvisionOutcome, QueryGateway, StoreClient, TableProvisioner};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "record-gateway", about = "Sortable record listing backed by a columnar store")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Provision the table if needed, then serve both listeners.
    Serve,
    /// Provision the table if needed and exit.
    Provision,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = load_config().context("invalid GATEWAY_* configuration")?;
    init_tracing(config.log_json);

    let store: Arc<dyn StoreClient> = Arc::new(HttpStoreClient::new(config.store_url.clone())?);
    provision(store.as_ref(), &config).await?;

    match cli.cmd.unwrap_or(Command::Serve) {
        Command::Serve => run_server(store, config).await,
        Command::Provision => Ok(()),
    }
}

async fn provision(store: &dyn StoreClient, config: &GatewayConfig) -> Result<()> {
    let table = config.table_ref();
    let outcome = TableProvisioner::new(store, &table)
        .ensure_ready()
        .await
        .context("Failed to create table and insert data")?;
    match outcome {
        ProvisionOutcome::AlreadyPresent => info!(%table, "table ready"),
        ProvisionOutcome::Created { seeded_rows } => {
            info!(%table, seeded_rows, "table provisioned");
        }
    }
    Ok(())
}

async fn run_server(store: Arc<dyn StoreClient>, config: GatewayConfig) -> Result<()> {
    let gateway = Arc::new(QueryGateway::new(store, config.table_ref()));
    let records_app = build_records_router(AppState::new(gateway));
    let meta_app = build_meta_router(config.meta_body.as_str());

    let records_listener = TcpListener::bind(config.records_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind records listener on {}", config.records_addr))?;
    let meta_listener = TcpListener::bind(config.meta_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind meta listener on {}", config.meta_addr))?;
    info!(addr = %records_listener.local_addr()?, "records listener ready");
    info!(addr = %meta_listener.local_addr()?, "meta listener ready");

    tokio::select! {
        res = axum::serve(records_listener, records_app) => res.context("records server stopped")?,
        res = axum::serve(meta_listener, meta_app) => res.context("meta server stopped")?,
        _ = tokio::signal::ctrl_c() => info!("shutdown signal received"),
    }
    info!("record-gateway shutting down");
    Ok(())
}
