// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for pcm-info
//!
//! Resolution itself never fails: unknown OSIDs produce a disabled profile.
//! These errors cover the fallible edges around it (registry construction
//! from caller tables, OSID parsing, settings I/O).

use thiserror::Error;

/// Main error type for pcm-info operations
#[derive(Error, Debug)]
pub enum PcmError {
    /// Two registry groups claim the same OSID
    #[error("OSID {osid} is claimed by both '{first}' and '{second}'")]
    DuplicateOsid {
        osid: u32,
        first: &'static str,
        second: &'static str,
    },

    /// OSID text could not be parsed
    #[error("Invalid OSID: {0}")]
    InvalidOsid(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pcm-info operations
pub type Result<T> = std::result::Result<T, PcmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_osid_names_both_groups() {
        let err = PcmError::DuplicateOsid {
            osid: 12202127,
            first: "P04 Intel",
            second: "P04 AMD",
        };
        let msg = err.to_string();
        assert!(msg.contains("12202127"));
        assert!(msg.contains("P04 Intel"));
        assert!(msg.contains("P04 AMD"));
    }

    #[test]
    fn test_invalid_osid() {
        let err = PcmError::InvalidOsid("abc".to_string());
        assert_eq!(err.to_string(), "Invalid OSID: abc");
    }

    #[test]
    fn test_config_error() {
        let err = PcmError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PcmError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PcmError = json_err.into();
        assert!(matches!(err, PcmError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_fn() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(test_fn().unwrap(), 42);
    }
}
