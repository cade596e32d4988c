// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! OSID resolver
//!
//! Turns an OSID into a [`HardwareProfile`] by layering the matching
//! group's overrides over [`BASE_PROFILE`]. Resolution never fails: an OSID
//! no group claims yields the disabled "Unknown" profile, and it is up to
//! the caller to check [`HardwareProfile::is_flashable`] before touching
//! flash.

use serde::{Deserialize, Serialize};

use crate::config::ResolverSettings;
use crate::osid::Osid;
use crate::profile::{HardwareProfile, BASE_PROFILE};
use crate::registry::{CosVariants, OsidRegistry, UNKNOWN_KEY_ALGORITHM, UNKNOWN_OVERRIDES};

/// How groups with COS variants pick their description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionMode {
    /// Match the whole OSID against the COS numbers. No registered OSID is
    /// a bare COS number, so every member reports the group description.
    /// This is the output existing tools and logs show.
    #[default]
    Legacy,
    /// Match the last two digits of the OSID, which hold the COS number
    /// (`04072902` is COS 2). Changes the reported description.
    CosSuffix,
}

impl DescriptionMode {
    fn cos_key(self, osid: Osid) -> u32 {
        match self {
            DescriptionMode::Legacy => osid.value(),
            DescriptionMode::CosSuffix => osid.value() % 100,
        }
    }

    fn select(self, osid: Osid, variants: CosVariants, fallback: &'static str) -> &'static str {
        let key = self.cos_key(osid);
        variants
            .iter()
            .find(|&&(cos, _)| cos == key)
            .map(|&(_, description)| description)
            .unwrap_or(fallback)
    }
}

/// Resolver from OSID to hardware profile
#[derive(Debug, Clone, Copy)]
pub struct ProfileResolver<'a> {
    registry: &'a OsidRegistry,
    description_mode: DescriptionMode,
}

impl<'a> ProfileResolver<'a> {
    /// Create a resolver over the given registry
    pub fn new(registry: &'a OsidRegistry) -> Self {
        Self {
            registry,
            description_mode: DescriptionMode::default(),
        }
    }

    pub fn with_description_mode(mut self, mode: DescriptionMode) -> Self {
        self.description_mode = mode;
        self
    }

    pub fn registry(&self) -> &'a OsidRegistry {
        self.registry
    }

    pub fn description_mode(&self) -> DescriptionMode {
        self.description_mode
    }

    /// Resolve an OSID to its profile
    pub fn resolve(&self, osid: Osid) -> HardwareProfile {
        let base = BASE_PROFILE.with_osid(osid);

        let Some(group) = self.registry.find_group(osid) else {
            tracing::debug!(
                osid = osid.value(),
                key_algorithm = UNKNOWN_KEY_ALGORITHM,
                "Unknown OSID, using disabled profile"
            );
            return UNKNOWN_OVERRIDES.apply(&base);
        };

        let mut profile = group.overrides().apply(&base);
        if let Some(variants) = group.cos_variants() {
            let description = self
                .description_mode
                .select(osid, variants, profile.description());
            profile = profile.with_description(description);
        }

        tracing::debug!(
            osid = osid.value(),
            group = group.name(),
            supported = profile.is_supported(),
            "Resolved OSID"
        );
        profile
    }
}

impl ProfileResolver<'static> {
    /// Resolver over the built-in registry
    pub fn builtin() -> Self {
        Self::new(OsidRegistry::builtin())
    }

    /// Resolver over the built-in registry, configured from settings
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        Self::builtin().with_description_mode(settings.description_mode)
    }
}

impl Default for ProfileResolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve an OSID against the built-in registry
pub fn resolve(osid: Osid) -> HardwareProfile {
    ProfileResolver::builtin().resolve(osid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::HardwareType;
    use crate::profile::GroupOverrides;
    use crate::registry::OsidGroup;

    static CUSTOM: &[OsidGroup] = &[OsidGroup::new(
        "custom",
        &[101, 202],
        GroupOverrides::described("Custom").image(0, 4096),
    )
    .with_cos_variants(&[(1, "Custom COS1"), (2, "Custom COS2")])];

    #[test]
    fn test_resolve_lb7_efilive() {
        let profile = resolve(Osid::new(1337601));
        assert_eq!(profile.hardware_type(), HardwareType::Lb7);
        assert_eq!(profile.validation_method(), HardwareType::P01P59);
        assert_eq!(profile.image_size(), 524288);
        assert_eq!(profile.image_base_address(), 0);
        assert_eq!(profile.key_algorithm(), 2);
        assert_eq!(profile.description(), "LB7 EFILive COS");
        assert_eq!(profile.kernel_file_name(), "Kernel-P01.bin");
    }

    #[test]
    fn test_resolve_p12() {
        let profile = resolve(Osid::new(12623279));
        assert_eq!(profile.kernel_file_name(), "Kernel-P12.bin");
        assert_eq!(profile.ram_size(), 0x6000);
        assert_eq!(profile.image_size(), 1048576);
        assert_eq!(profile.validation_method(), HardwareType::P12);
        assert_eq!(profile.key_algorithm(), 91);
    }

    #[test]
    fn test_resolve_p04_intel() {
        let profile = resolve(Osid::new(12202127));
        assert!(!profile.checksum_support());
        assert!(!profile.kernel_version_support());
        assert!(!profile.flash_id_support());
        assert_eq!(profile.kernel_max_block_size(), 2048);
        assert_eq!(profile.kernel_base_address(), 0xFF9090);
        assert_eq!(profile.kernel_file_name(), "Kernel-P04-Intel.bin");
    }

    #[test]
    fn test_resolve_unknown() {
        let profile = resolve(Osid::new(999999999));
        assert!(!profile.is_supported());
        assert_eq!(profile.image_size(), 0);
        assert_eq!(profile.description(), "Unknown");
        assert_eq!(profile.key_algorithm(), UNKNOWN_KEY_ALGORITHM);
        assert_eq!(profile.osid().value(), 999999999);
        assert_eq!(profile.kernel_file_name(), BASE_PROFILE.kernel_file_name());
    }

    #[test]
    fn test_resolve_sets_osid() {
        assert_eq!(resolve(Osid::new(12587007)).osid(), Osid::new(12587007));
    }

    #[test]
    fn test_legacy_cos_description_falls_through() {
        for osid in [4072901, 4072902, 4072903, 2020005] {
            assert_eq!(resolve(Osid::new(osid)).description(), "EFI Live COS");
        }
    }

    #[test]
    fn test_cos_suffix_description() {
        let resolver =
            ProfileResolver::builtin().with_description_mode(DescriptionMode::CosSuffix);
        assert_eq!(
            resolver.resolve(Osid::new(4072901)).description(),
            "EFI Live COS1"
        );
        assert_eq!(
            resolver.resolve(Osid::new(4072902)).description(),
            "EFI Live COS2"
        );
        assert_eq!(
            resolver.resolve(Osid::new(4110003)).description(),
            "EFI Live COS3"
        );
        assert_eq!(
            resolver.resolve(Osid::new(2020005)).description(),
            "EFI Live COS5"
        );
    }

    #[test]
    fn test_cos_suffix_leaves_other_groups_alone() {
        let resolver =
            ProfileResolver::builtin().with_description_mode(DescriptionMode::CosSuffix);
        // LB7 EFILive OSIDs end in 01/05 but the group has no COS variants
        assert_eq!(
            resolver.resolve(Osid::new(1337601)).description(),
            "LB7 EFILive COS"
        );
    }

    #[test]
    fn test_description_mode_only_changes_description() {
        let legacy = resolve(Osid::new(1290002));
        let suffix = ProfileResolver::builtin()
            .with_description_mode(DescriptionMode::CosSuffix)
            .resolve(Osid::new(1290002));
        assert_eq!(suffix.with_description(legacy.description()), legacy);
    }

    #[test]
    fn test_custom_registry() {
        let registry = OsidRegistry::from_groups(CUSTOM).unwrap();
        let resolver = ProfileResolver::new(&registry);

        let profile = resolver.resolve(Osid::new(202));
        assert_eq!(profile.description(), "Custom");
        assert_eq!(profile.image_size(), 4096);

        let profile = resolver.resolve(Osid::new(1337601));
        assert!(!profile.is_supported());
    }

    #[test]
    fn test_custom_registry_cos_suffix() {
        let registry = OsidRegistry::from_groups(CUSTOM).unwrap();
        let resolver =
            ProfileResolver::new(&registry).with_description_mode(DescriptionMode::CosSuffix);
        assert_eq!(resolver.resolve(Osid::new(101)).description(), "Custom COS1");
        assert_eq!(resolver.resolve(Osid::new(202)).description(), "Custom COS2");
    }

    #[test]
    fn test_legacy_matches_bare_cos_number() {
        // A registry that does list a bare COS number shows the legacy switch
        static BARE: &[OsidGroup] =
            &[OsidGroup::new("bare", &[2], GroupOverrides::described("Bare"))
                .with_cos_variants(&[(2, "Bare COS2")])];
        let registry = OsidRegistry::from_groups(BARE).unwrap();
        let resolver = ProfileResolver::new(&registry);
        assert_eq!(resolver.resolve(Osid::new(2)).description(), "Bare COS2");
    }

    #[test]
    fn test_from_settings() {
        let settings = ResolverSettings {
            description_mode: DescriptionMode::CosSuffix,
            ..Default::default()
        };
        let resolver = ProfileResolver::from_settings(&settings);
        assert_eq!(resolver.description_mode(), DescriptionMode::CosSuffix);
    }

    #[test]
    fn test_default_resolver_is_legacy_builtin() {
        let resolver = ProfileResolver::default();
        assert_eq!(resolver.description_mode(), DescriptionMode::Legacy);
        assert!(std::ptr::eq(resolver.registry(), OsidRegistry::builtin()));
    }

    #[test]
    fn test_description_mode_serde() {
        let json = serde_json::to_string(&DescriptionMode::CosSuffix).unwrap();
        assert_eq!(json, "\"cos_suffix\"");
        let mode: DescriptionMode = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(mode, DescriptionMode::Legacy);
    }
}
