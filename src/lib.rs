// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Classroom deployment-drill demo: a small status service plus a scripted
//! rollback walkthrough that talks to it over HTTP.

pub mod app;
pub mod models;
pub mod services;
