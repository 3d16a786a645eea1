// ABOUTME: Main server binary for the Acelera fitness API
// ABOUTME: Loads configuration, seeds the in-memory store, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! # Acelera Fitness API Server Binary
//!
//! Starts the REST API backed by the seeded in-memory store.

use acelera_server::{
    config::ServerConfig, logging, resources::ServerResources, server::HttpServer,
    storage::MemoryStorage,
};
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "acelera-server")]
#[command(about = "Acelera Fitness API - REST backend for the Acelera fitness app")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Acelera Fitness API");
    info!("{}", config.summary());

    let storage = Arc::new(MemoryStorage::seeded());
    let resources = Arc::new(ServerResources::new(storage, config));

    HttpServer::new(resources).serve().await?;

    Ok(())
}
