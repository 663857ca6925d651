// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Version metadata served by `/api/version` and parsed back by the drill
/// runner. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VersionInfo {
    pub version: String,
    /// Build identifier, usually injected by CI ("local" outside CI)
    pub build: String,
    /// Git commit hash the build was produced from ("unknown" outside CI)
    pub commit: String,
}
