// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Timestamped stdout logging for the drill narrative.

use chrono::Utc;

/// Format used for every narrative line's timestamp prefix.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time rendered for a log prefix.
pub fn timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Print a drill narrative line as `[2024-01-01 12:00:00] message`.
pub fn log_line(message: &str) {
    println!("[{}] {}", timestamp(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_round_trips_through_format() {
        let ts = timestamp();
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_timestamp_has_no_subsecond_noise() {
        let ts = timestamp();
        assert_eq!(ts.len(), "2024-01-01 12:00:00".len());
        assert!(!ts.contains('.'));
    }
}
