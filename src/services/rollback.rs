// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Scripted rollback drill: backup, simulated failure, rollback, verdict.
//!
//! The drill is a fixed linear sequence. The `docker` commands below are
//! narrative strings printed for the audience, never executed, and the
//! "failure" step has no effect on the service it talks to.

use crate::models::backup::BackupRecord;
use crate::models::version::VersionInfo;
use crate::services::logging::log_line;
use crate::services::status::StatusClient;
use std::time::Duration;
use tokio::time::sleep;

/// Separator line used around drill sections.
pub const RULE: &str = "==================================================";

/// Delays between drill steps.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Pause after narrated (no-op) steps
    pub narration: Duration,
    /// Pause after each printed remediation command
    pub command: Duration,
    /// Pause before the post-remediation health probe
    pub settle: Duration,
}

impl Pacing {
    /// The classroom pacing: slow enough to read along.
    pub fn standard() -> Self {
        Self {
            narration: Duration::from_secs(2),
            command: Duration::from_secs(1),
            settle: Duration::from_secs(5),
        }
    }

    /// No pauses at all, for tests.
    pub fn none() -> Self {
        Self {
            narration: Duration::ZERO,
            command: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

/// The fixed remediation sequence printed during the drill. The `sleep 10`
/// entry is itself narrative: it is printed like the others, not slept.
fn rollback_commands(version: &str) -> [String; 4] {
    [
        "docker stop devops-app".to_string(),
        "docker rm devops-app".to_string(),
        format!("docker run -d -p 5000:5000 --name devops-app devops-automation-app:{version}"),
        "sleep 10".to_string(),
    ]
}

/// Runs the rollback walkthrough against one status service.
pub struct RollbackRunner {
    client: StatusClient,
    pacing: Pacing,
    backups: Vec<BackupRecord>,
}

impl RollbackRunner {
    pub fn new(client: StatusClient, pacing: Pacing) -> Self {
        Self {
            client,
            pacing,
            backups: Vec::new(),
        }
    }

    /// Backups captured so far, oldest first.
    pub fn backups(&self) -> &[BackupRecord] {
        &self.backups
    }

    /// Probe `/api/health`, logging the verdict. Any non-200 response or
    /// transport error counts as unhealthy.
    pub async fn check_application_health(&self) -> bool {
        match self.client.fetch_health().await {
            Ok(health) => {
                log_line(&format!("[OK] Application healthy: {}", health.status));
                true
            }
            Err(e) => {
                log_line(&format!("[ERROR] Health check failed: {:#}", e));
                false
            }
        }
    }

    /// Fetch `/api/version`, logging the result.
    async fn get_current_version(&self) -> Option<VersionInfo> {
        match self.client.fetch_version().await {
            Ok(info) => {
                log_line(&format!(
                    "[INFO] Current version: {} (build: {})",
                    info.version, info.build
                ));
                Some(info)
            }
            Err(e) => {
                log_line(&format!("[ERROR] Could not fetch version: {:#}", e));
                None
            }
        }
    }

    /// Snapshot the live version into the backup list.
    pub async fn create_backup(&mut self) -> Option<BackupRecord> {
        let info = self.get_current_version().await?;
        let record = BackupRecord::from_version(&info);
        log_line(&format!(
            "[BACKUP] Backup created: version {}",
            record.version
        ));
        self.backups.push(record.clone());
        Some(record)
    }

    /// Narrate a broken deployment. Pure storytelling: the service's actual
    /// health is untouched.
    pub async fn simulate_deployment_failure(&self) {
        log_line("[ALERT] SIMULATING DEPLOYMENT FAILURE...");
        log_line("   - New release shipped with critical bugs");
        log_line("   - Application is not responding correctly");
        log_line("   - Main endpoints returning 500 errors");
        sleep(self.pacing.narration).await;
    }

    /// Walk through the remediation commands and re-probe health for the
    /// final verdict.
    pub async fn execute_rollback(&self) -> bool {
        log_line("[ROLLBACK] STARTING ROLLBACK PROCEDURE...");

        let Some(last_backup) = self.backups.last() else {
            log_line("[ERROR] No backup versions available");
            return false;
        };

        log_line(&format!(
            "[VERSION] Reverting to version: {}",
            last_backup.version
        ));

        for command in rollback_commands(&last_backup.version) {
            log_line(&format!("[RUN] Executing: {}", command));
            sleep(self.pacing.command).await;
        }

        // Give the narrative container time to "start"
        sleep(self.pacing.settle).await;

        if self.check_application_health().await {
            log_line("[OK] ROLLBACK SUCCEEDED");
            log_line(&format!(
                "   - Application restored to version {}",
                last_backup.version
            ));
            log_line("   - Status: running normally");
            true
        } else {
            log_line("[ERROR] ROLLBACK FAILED");
            log_line("   - The application is still down");
            log_line("   - Manual intervention required");
            false
        }
    }

    /// Run the whole drill. Returns the final verdict, which is always the
    /// outcome of the last health probe after remediation.
    pub async fn run(&mut self) -> bool {
        log_line("[START] STARTING ROLLBACK DRILL");
        log_line(RULE);

        log_line("[STATUS] Checking initial application health...");
        if !self.check_application_health().await {
            log_line("[ERROR] The application is not running. Aborting drill.");
            return false;
        }

        log_line("[BACKUP] Creating backup of the current version...");
        let Some(backup) = self.create_backup().await else {
            log_line("[ERROR] Could not create a backup. Aborting drill.");
            return false;
        };

        log_line("[ALERT] Simulating a failed deployment...");
        self.simulate_deployment_failure().await;

        log_line("[CHECK] Verifying application failure...");
        if self.check_application_health().await {
            log_line("[WARN] Application still responds. Continuing the simulated outage...");
            sleep(self.pacing.narration).await;
        }

        log_line("[ROLLBACK] Executing rollback...");
        let rollback_ok = self.execute_rollback().await;

        log_line(RULE);
        log_line("[INFO] DRILL SUMMARY");
        log_line(&format!("   - Backup created: {}", backup.version));
        log_line(&format!(
            "   - Rollback executed: {}",
            if rollback_ok {
                "[OK] success"
            } else {
                "[ERROR] failed"
            }
        ));
        log_line(&format!(
            "   - Final status: {}",
            if rollback_ok {
                "application running"
            } else {
                "application degraded"
            }
        ));

        rollback_ok
    }
}
