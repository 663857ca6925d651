// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for `/api/info`: course metadata plus runtime environment.
///
/// Field names are the wire contract and keep the original course's Spanish
/// naming; the drill materials and graders expect these exact keys.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub materia: String,
    pub profesor: String,
    pub alumno: String,
    /// Current server time, formatted `%Y-%m-%d %H:%M:%S`
    pub fecha: String,
    pub version: String,
    pub entorno: String,
    pub status: String,
}

/// Response for `/api/health`. Always reports healthy; the endpoint performs
/// no real health computation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 timestamp of the probe
    pub timestamp: String,
    pub uptime: String,
}
