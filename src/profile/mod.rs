// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware profiles
//!
//! A [`HardwareProfile`] is everything the kernel loader, flash validator and
//! unlock module need to know about a connected PCM. Profiles are built by
//! layering a group's [`GroupOverrides`] over [`BASE_PROFILE`] and cannot be
//! changed afterwards.

mod overrides;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::hardware::HardwareType;
use crate::osid::Osid;

pub use overrides::GroupOverrides;

/// Defaults every profile starts from (P01/P59 hardware and kernel)
pub const BASE_PROFILE: HardwareProfile = {
    let kernel = HardwareType::P01P59.kernel_defaults();
    HardwareProfile {
        osid: Osid::new(0),
        description: "",
        is_supported: true,
        validation_method: HardwareType::P01P59,
        hardware_type: HardwareType::P01P59,
        kernel_file_name: kernel.file_name,
        kernel_base_address: kernel.base_address,
        ram_size: kernel.ram_size,
        kernel_max_block_size: kernel.max_block_size,
        image_base_address: 0,
        image_size: 0,
        key_algorithm: 0,
        checksum_support: kernel.checksum_support,
        flash_id_support: kernel.flash_id_support,
        kernel_version_support: kernel.kernel_version_support,
    }
};

/// Resolved configuration for one PCM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HardwareProfile {
    osid: Osid,
    description: &'static str,
    is_supported: bool,
    validation_method: HardwareType,
    hardware_type: HardwareType,
    kernel_file_name: &'static str,
    kernel_base_address: u32,
    ram_size: u32,
    kernel_max_block_size: u32,
    image_base_address: u32,
    image_size: u32,
    key_algorithm: u32,
    checksum_support: bool,
    flash_id_support: bool,
    kernel_version_support: bool,
}

impl HardwareProfile {
    pub(crate) fn with_osid(self, osid: Osid) -> Self {
        Self { osid, ..self }
    }

    pub(crate) fn with_description(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// Operating system ID this profile was resolved for
    pub fn osid(&self) -> Osid {
        self.osid
    }

    /// Descriptive text
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Whether reading and writing this PCM is supported
    pub fn is_supported(&self) -> bool {
        self.is_supported
    }

    /// Which rule to use when validating an image before writing
    pub fn validation_method(&self) -> HardwareType {
        self.validation_method
    }

    /// Hardware family, selects the kernel
    pub fn hardware_type(&self) -> HardwareType {
        self.hardware_type
    }

    /// Kernel binary to upload
    pub fn kernel_file_name(&self) -> &'static str {
        self.kernel_file_name
    }

    /// RAM address the kernel is written to
    pub fn kernel_base_address(&self) -> u32 {
        self.kernel_base_address
    }

    /// RAM available to the kernel
    pub fn ram_size(&self) -> u32 {
        self.ram_size
    }

    /// Largest block the kernel accepts in one transfer
    pub fn kernel_max_block_size(&self) -> u32 {
        self.kernel_max_block_size
    }

    /// Flash address where the image starts
    pub fn image_base_address(&self) -> u32 {
        self.image_base_address
    }

    /// Size of the flash image in bytes, 0 when unknown
    pub fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Selector for the unlock (seed/key) algorithm
    pub fn key_algorithm(&self) -> u32 {
        self.key_algorithm
    }

    /// Does the kernel support flash segment checksums?
    pub fn checksum_support(&self) -> bool {
        self.checksum_support
    }

    /// Does the kernel support flash chip identification?
    pub fn flash_id_support(&self) -> bool {
        self.flash_id_support
    }

    /// Does the kernel report its version?
    pub fn kernel_version_support(&self) -> bool {
        self.kernel_version_support
    }

    /// Supported and with a known image layout. Callers must check this
    /// before reading or writing flash.
    pub fn is_flashable(&self) -> bool {
        self.is_supported && self.image_size > 0
    }

    /// Location of the kernel binary inside `kernel_dir`
    pub fn kernel_path(&self, kernel_dir: &Path) -> PathBuf {
        kernel_dir.join(self.kernel_file_name)
    }
}
