// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Resolver settings
//!
//! Handles loading and saving settings from ~/.pcm-info/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::profile::HardwareProfile;
use crate::resolver::DescriptionMode;

mod io;
mod validation;

/// Settings structure, stored in ~/.pcm-info/settings.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// How COS groups pick their description
    #[serde(default)]
    pub description_mode: DescriptionMode,

    /// Directory holding the kernel binaries (defaults to ~/.pcm-info/kernels)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_dir: Option<PathBuf>,
}

impl ResolverSettings {
    /// Effective kernel directory
    pub fn kernel_dir(&self) -> PathBuf {
        self.kernel_dir
            .clone()
            .unwrap_or_else(|| Self::home().join("kernels"))
    }

    /// Where the kernel for `profile` is expected to be
    pub fn kernel_path(&self, profile: &HardwareProfile) -> PathBuf {
        profile.kernel_path(&self.kernel_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osid::Osid;
    use crate::resolver::resolve;

    #[test]
    fn test_default_settings() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.description_mode, DescriptionMode::Legacy);
        assert!(settings.kernel_dir.is_none());
    }

    #[test]
    fn test_kernel_path_uses_configured_dir() {
        let settings = ResolverSettings {
            kernel_dir: Some(PathBuf::from("/srv/kernels")),
            ..Default::default()
        };
        let profile = resolve(Osid::new(12213305));
        assert_eq!(
            settings.kernel_path(&profile),
            PathBuf::from("/srv/kernels/Kernel-P10.bin")
        );
    }

    #[test]
    fn test_kernel_dir_default_is_under_home() {
        let settings = ResolverSettings::default();
        assert!(settings.kernel_dir().ends_with("kernels"));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let settings: ResolverSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ResolverSettings::default());
    }

    #[test]
    fn test_serialize_skips_missing_kernel_dir() {
        let json = serde_json::to_string(&ResolverSettings::default()).unwrap();
        assert_eq!(json, r#"{"description_mode":"legacy"}"#);
    }
}
