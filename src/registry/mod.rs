// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! OSID registry
//!
//! Known OSIDs are organised in groups: every OSID in a group runs on the
//! same hardware with the same memory layout and kernel, so the group holds
//! one set of [`GroupOverrides`] for all of them.
//!
//! An OSID may belong to at most one group. The built-in table is checked
//! at compile time; tables passed to [`OsidRegistry::from_groups`] are
//! checked when the registry is built.

mod builtin;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{PcmError, Result};
use crate::osid::Osid;
use crate::profile::GroupOverrides;

pub use builtin::BUILTIN_GROUPS;

/// Key algorithm reported for OSIDs that are not in the registry
pub const UNKNOWN_KEY_ALGORITHM: u32 = 40;

/// Description reported for OSIDs that are not in the registry
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Overrides producing the disabled profile for unknown OSIDs
pub const UNKNOWN_OVERRIDES: GroupOverrides = GroupOverrides::described(UNKNOWN_DESCRIPTION)
    .supported(false)
    .key_algorithm(UNKNOWN_KEY_ALGORITHM)
    .image(0, 0);

/// Finer-grained descriptions keyed by COS number
pub type CosVariants = &'static [(u32, &'static str)];

/// A set of equivalent OSIDs sharing one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsidGroup {
    name: &'static str,
    osids: &'static [u32],
    overrides: GroupOverrides,
    cos_variants: Option<CosVariants>,
}

impl OsidGroup {
    pub const fn new(
        name: &'static str,
        osids: &'static [u32],
        overrides: GroupOverrides,
    ) -> Self {
        Self {
            name,
            osids,
            overrides,
            cos_variants: None,
        }
    }

    /// Attach a COS-number to description table for this group
    pub const fn with_cos_variants(mut self, variants: CosVariants) -> Self {
        self.cos_variants = Some(variants);
        self
    }

    /// Name identifying the group in logs and errors
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw OSID values in this group
    pub fn osids(&self) -> &'static [u32] {
        self.osids
    }

    pub fn overrides(&self) -> &GroupOverrides {
        &self.overrides
    }

    pub fn cos_variants(&self) -> Option<CosVariants> {
        self.cos_variants
    }
}

/// Returns the first OSID listed more than once across `groups`.
///
/// `const` so the built-in table can be checked at compile time.
pub const fn first_duplicate(groups: &[OsidGroup]) -> Option<u32> {
    let mut g = 0;
    while g < groups.len() {
        let osids = groups[g].osids;
        let mut i = 0;
        while i < osids.len() {
            let candidate = osids[i];

            // Rest of the same group
            let mut j = i + 1;
            while j < osids.len() {
                if osids[j] == candidate {
                    return Some(candidate);
                }
                j += 1;
            }

            // Every later group
            let mut h = g + 1;
            while h < groups.len() {
                let other = groups[h].osids;
                let mut k = 0;
                while k < other.len() {
                    if other[k] == candidate {
                        return Some(candidate);
                    }
                    k += 1;
                }
                h += 1;
            }
            i += 1;
        }
        g += 1;
    }
    None
}

const _: () = assert!(
    first_duplicate(BUILTIN_GROUPS).is_none(),
    "an OSID is listed in more than one built-in group"
);

/// Lookup table from OSID to group
#[derive(Debug)]
pub struct OsidRegistry {
    groups: &'static [OsidGroup],
    index: HashMap<u32, usize>,
}

static BUILTIN_REGISTRY: OnceLock<OsidRegistry> = OnceLock::new();

impl OsidRegistry {
    /// The registry of every OSID this crate knows about
    pub fn builtin() -> &'static OsidRegistry {
        BUILTIN_REGISTRY.get_or_init(|| Self::index(BUILTIN_GROUPS))
    }

    /// Build a registry from a custom table.
    ///
    /// Fails if any OSID appears twice, whether in two groups or twice in
    /// the same group.
    pub fn from_groups(groups: &'static [OsidGroup]) -> Result<Self> {
        let mut owners: HashMap<u32, usize> = HashMap::new();

        for (position, group) in groups.iter().enumerate() {
            for &osid in group.osids {
                if let Some(&first) = owners.get(&osid) {
                    return Err(PcmError::DuplicateOsid {
                        osid,
                        first: groups[first].name,
                        second: group.name,
                    });
                }
                owners.insert(osid, position);
            }
        }

        Ok(Self {
            groups,
            index: owners,
        })
    }

    /// Index a table already known to be free of duplicates
    fn index(groups: &'static [OsidGroup]) -> Self {
        let index = groups
            .iter()
            .enumerate()
            .flat_map(|(position, group)| group.osids.iter().map(move |&osid| (osid, position)))
            .collect();

        Self { groups, index }
    }

    /// Find the group claiming `osid`
    pub fn find_group(&self, osid: Osid) -> Option<&OsidGroup> {
        self.index
            .get(&osid.value())
            .map(|&position| &self.groups[position])
    }

    pub fn contains(&self, osid: Osid) -> bool {
        self.index.contains_key(&osid.value())
    }

    /// All groups, in table order
    pub fn groups(&self) -> &'static [OsidGroup] {
        self.groups
    }

    /// Every registered OSID, in table order
    pub fn known_osids(&self) -> impl Iterator<Item = Osid> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.osids.iter().copied().map(Osid::new))
    }

    /// Number of registered OSIDs
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
