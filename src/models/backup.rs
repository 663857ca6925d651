// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::version::VersionInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-memory snapshot of the version metadata that was live when the drill
/// started. Appended to the runner's backup list, never removed, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    pub id: Uuid,
    pub version: String,
    pub build: String,
    pub commit: String,
    /// Capture time
    pub timestamp: DateTime<Utc>,
    pub status: String,
}

impl BackupRecord {
    /// Snapshot a fetched [`VersionInfo`] at the current instant.
    pub fn from_version(info: &VersionInfo) -> Self {
        Self {
            id: Uuid::now_v7(),
            version: info.version.clone(),
            build: info.build.clone(),
            commit: info.commit.clone(),
            timestamp: Utc::now(),
            status: "backup".to_string(),
        }
    }
}
