// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use drill_agent::app::{create_router, AppState, VERSION};
use drill_agent::services::config::ServiceConfig;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_env()?;
    let port = config.port;

    if config.debug {
        println!(
            "Debug mode enabled (environment: {}, build: {}, commit: {})",
            config.environment, config.build_number, config.git_commit
        );
    }

    let state = AppState {
        config: Arc::new(config),
    };
    let app = create_router(state);

    // Bind to 0.0.0.0 to accept connections from any network interface (required for Docker)
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    println!("drill-agent v{} listening on {}", VERSION, addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server exited with an error")?;

    Ok(())
}
