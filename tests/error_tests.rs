// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;

use pcm_info::{Osid, PcmError};

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let pcm_error: PcmError = io_error.into();

    match pcm_error {
        PcmError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_config_error_display() {
    let error = PcmError::Config("kernel_dir must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: kernel_dir must not be empty"
    );
}

#[test]
fn test_invalid_osid_from_parse() {
    let error = "12OO2127".parse::<Osid>().unwrap_err();
    assert_eq!(error.to_string(), "Invalid OSID: 12OO2127");
}

#[test]
fn test_duplicate_osid_display() {
    let error = PcmError::DuplicateOsid {
        osid: 1251001,
        first: "VCM Suite 1251001",
        second: "HPT COS",
    };
    assert_eq!(
        error.to_string(),
        "OSID 1251001 is claimed by both 'VCM Suite 1251001' and 'HPT COS'"
    );
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
    let pcm_error: PcmError = json_error.into();
    assert!(pcm_error.to_string().starts_with("JSON error"));
}
