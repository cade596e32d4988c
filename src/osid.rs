// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Operating system identifier
//!
//! The OSID is read from the PCM during the connection handshake and names
//! the exact firmware build it is running. It is opaque here: only equality
//! and the decimal form matter.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PcmError;

/// OSID reported by a PCM
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Osid(u32);

impl Osid {
    /// Wrap a raw OSID value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw OSID value
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Osid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Osid> for u32 {
    fn from(osid: Osid) -> Self {
        osid.0
    }
}

impl fmt::Display for Osid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses decimal text. OSIDs are often written zero-padded to eight
/// digits (`01337601`), so leading zeros are accepted and ignored.
impl FromStr for Osid {
    type Err = PcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PcmError::InvalidOsid(s.to_string()));
        }

        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| PcmError::InvalidOsid(s.to_string()))
    }
}
