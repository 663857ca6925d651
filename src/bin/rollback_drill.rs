// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Entry point for the rollback walkthrough. Exit code 0 on a successful
//! drill, 1 on failure or interruption.

use drill_agent::services::logging::log_line;
use drill_agent::services::rollback::{Pacing, RollbackRunner, RULE};
use drill_agent::services::status::StatusClient;
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    println!("Rollback Drill - DevOps Automation");
    println!("{}", RULE);

    let app_url = env::var("APP_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    let client = match StatusClient::new(&app_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            process::exit(1);
        }
    };

    println!("Target service: {}", client.base_url());

    let mut runner = RollbackRunner::new(client, Pacing::standard());

    tokio::select! {
        success = runner.run() => {
            process::exit(if success { 0 } else { 1 });
        }
        _ = tokio::signal::ctrl_c() => {
            log_line("[WARN] Drill interrupted by user");
            process::exit(1);
        }
    }
}
