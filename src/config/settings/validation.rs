// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{PcmError, Result};

use super::ResolverSettings;

impl ResolverSettings {
    /// Reject settings that cannot be used.
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.kernel_dir {
            if dir.as_os_str().is_empty() {
                return Err(PcmError::Config("kernel_dir must not be empty".to_string()));
            }
        }
        Ok(())
    }
}
