// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-group deltas over the base profile

use super::HardwareProfile;
use crate::hardware::{HardwareType, KernelDefaults};

/// Fields a registry group changes relative to the base profile.
///
/// Every field is optional; `None` keeps whatever the base has. The builder
/// methods are `const` so the built-in table can be static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOverrides {
    description: Option<&'static str>,
    is_supported: Option<bool>,
    validation_method: Option<HardwareType>,
    hardware_type: Option<HardwareType>,
    kernel_file_name: Option<&'static str>,
    kernel_base_address: Option<u32>,
    ram_size: Option<u32>,
    kernel_max_block_size: Option<u32>,
    image_base_address: Option<u32>,
    image_size: Option<u32>,
    key_algorithm: Option<u32>,
    checksum_support: Option<bool>,
    flash_id_support: Option<bool>,
    kernel_version_support: Option<bool>,
}

impl GroupOverrides {
    /// Overrides that change nothing
    pub const NONE: GroupOverrides = GroupOverrides {
        description: None,
        is_supported: None,
        validation_method: None,
        hardware_type: None,
        kernel_file_name: None,
        kernel_base_address: None,
        ram_size: None,
        kernel_max_block_size: None,
        image_base_address: None,
        image_size: None,
        key_algorithm: None,
        checksum_support: None,
        flash_id_support: None,
        kernel_version_support: None,
    };

    /// Start a set of overrides with a description
    pub const fn described(description: &'static str) -> Self {
        Self::NONE.description(description)
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn supported(mut self, is_supported: bool) -> Self {
        self.is_supported = Some(is_supported);
        self
    }

    pub const fn validation_method(mut self, method: HardwareType) -> Self {
        self.validation_method = Some(method);
        self
    }

    pub const fn hardware_type(mut self, hardware_type: HardwareType) -> Self {
        self.hardware_type = Some(hardware_type);
        self
    }

    /// Override every kernel parameter and capability flag at once
    pub const fn kernel(mut self, kernel: KernelDefaults) -> Self {
        self.kernel_file_name = Some(kernel.file_name);
        self.kernel_base_address = Some(kernel.base_address);
        self.ram_size = Some(kernel.ram_size);
        self.kernel_max_block_size = Some(kernel.max_block_size);
        self.checksum_support = Some(kernel.checksum_support);
        self.flash_id_support = Some(kernel.flash_id_support);
        self.kernel_version_support = Some(kernel.kernel_version_support);
        self
    }

    pub const fn kernel_base_address(mut self, address: u32) -> Self {
        self.kernel_base_address = Some(address);
        self
    }

    pub const fn image(mut self, base_address: u32, size: u32) -> Self {
        self.image_base_address = Some(base_address);
        self.image_size = Some(size);
        self
    }

    pub const fn image_size(mut self, size: u32) -> Self {
        self.image_size = Some(size);
        self
    }

    pub const fn key_algorithm(mut self, algorithm: u32) -> Self {
        self.key_algorithm = Some(algorithm);
        self
    }

    /// Layer these overrides on top of `base`
    pub fn apply(&self, base: &HardwareProfile) -> HardwareProfile {
        HardwareProfile {
            osid: base.osid,
            description: self.description.unwrap_or(base.description),
            is_supported: self.is_supported.unwrap_or(base.is_supported),
            validation_method: self.validation_method.unwrap_or(base.validation_method),
            hardware_type: self.hardware_type.unwrap_or(base.hardware_type),
            kernel_file_name: self.kernel_file_name.unwrap_or(base.kernel_file_name),
            kernel_base_address: self
                .kernel_base_address
                .unwrap_or(base.kernel_base_address),
            ram_size: self.ram_size.unwrap_or(base.ram_size),
            kernel_max_block_size: self
                .kernel_max_block_size
                .unwrap_or(base.kernel_max_block_size),
            image_base_address: self.image_base_address.unwrap_or(base.image_base_address),
            image_size: self.image_size.unwrap_or(base.image_size),
            key_algorithm: self.key_algorithm.unwrap_or(base.key_algorithm),
            checksum_support: self.checksum_support.unwrap_or(base.checksum_support),
            flash_id_support: self.flash_id_support.unwrap_or(base.flash_id_support),
            kernel_version_support: self
                .kernel_version_support
                .unwrap_or(base.kernel_version_support),
        }
    }
}

impl Default for GroupOverrides {
    fn default() -> Self {
        Self::NONE
    }
}
