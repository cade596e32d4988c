// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! PCM hardware families and their kernel defaults

use std::fmt;

use serde::Serialize;

/// Hardware/firmware family of a PCM
///
/// A profile carries this twice: once as the hardware type (which kernel to
/// upload) and once as the validation method (which image check to run).
/// The two usually agree but are set independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareType {
    /// OSID could not be determined, e.g. from an unreadable image
    Undefined,
    /// Gen III V8 (P01) and its successor (P59)
    #[default]
    P01P59,
    /// 1998-2005 V6, Intel flash
    P04Intel,
    /// 1998-2005 V6, AMD flash
    P04Amd,
    /// Motorola-based 4-cylinder controller
    P10,
    /// Atlas I4/I5/I6
    P12,
    /// Duramax LB7
    Lb7,
    /// Duramax LLY
    Lly,
    /// Early 'black box' controller
    BlackBox,
}

/// Kernel upload parameters and capability flags for one kernel family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelDefaults {
    pub file_name: &'static str,
    pub base_address: u32,
    pub ram_size: u32,
    pub max_block_size: u32,
    pub checksum_support: bool,
    pub flash_id_support: bool,
    pub kernel_version_support: bool,
}

const P01_KERNEL: KernelDefaults = KernelDefaults {
    file_name: "Kernel-P01.bin",
    base_address: 0xFF8000,
    ram_size: 0x4DFF,
    max_block_size: 4096,
    checksum_support: true,
    flash_id_support: true,
    kernel_version_support: true,
};

const P04_INTEL_KERNEL: KernelDefaults = KernelDefaults {
    file_name: "Kernel-P04-Intel.bin",
    base_address: 0xFF9090,
    max_block_size: 2048,
    checksum_support: false,
    flash_id_support: false,
    kernel_version_support: false,
    ..P01_KERNEL
};

const P04_AMD_KERNEL: KernelDefaults = KernelDefaults {
    file_name: "Kernel-P04-AMD.bin",
    max_block_size: 512,
    ..P04_INTEL_KERNEL
};

// Base address may be 0xFFA000 on some units; 0xFFB800 is what has been verified.
const P10_KERNEL: KernelDefaults = KernelDefaults {
    file_name: "Kernel-P10.bin",
    base_address: 0xFFB800,
    ram_size: 0x2800,
    ..P01_KERNEL
};

const P12_KERNEL: KernelDefaults = KernelDefaults {
    file_name: "Kernel-P12.bin",
    base_address: 0xFF2000,
    ram_size: 0x6000,
    ..P01_KERNEL
};

impl HardwareType {
    /// Every variant, in declaration order
    pub const ALL: [HardwareType; 9] = [
        HardwareType::Undefined,
        HardwareType::P01P59,
        HardwareType::P04Intel,
        HardwareType::P04Amd,
        HardwareType::P10,
        HardwareType::P12,
        HardwareType::Lb7,
        HardwareType::Lly,
        HardwareType::BlackBox,
    ];

    /// Kernel parameters used when uploading to this family.
    ///
    /// The Duramax and black box families have no kernel of their own and
    /// share the P01 kernel.
    pub const fn kernel_defaults(self) -> KernelDefaults {
        match self {
            HardwareType::P04Intel => P04_INTEL_KERNEL,
            HardwareType::P04Amd => P04_AMD_KERNEL,
            HardwareType::P10 => P10_KERNEL,
            HardwareType::P12 => P12_KERNEL,
            HardwareType::Undefined
            | HardwareType::P01P59
            | HardwareType::Lb7
            | HardwareType::Lly
            | HardwareType::BlackBox => P01_KERNEL,
        }
    }

    /// Whether this family has a dedicated kernel binary
    pub fn has_own_kernel(self) -> bool {
        matches!(
            self,
            HardwareType::P01P59
                | HardwareType::P04Intel
                | HardwareType::P04Amd
                | HardwareType::P10
                | HardwareType::P12
        )
    }

    /// Short name as used in the community
    pub fn name(self) -> &'static str {
        match self {
            HardwareType::Undefined => "Undefined",
            HardwareType::P01P59 => "P01/P59",
            HardwareType::P04Intel => "P04 Intel",
            HardwareType::P04Amd => "P04 AMD",
            HardwareType::P10 => "P10",
            HardwareType::P12 => "P12",
            HardwareType::Lb7 => "LB7",
            HardwareType::Lly => "LLY",
            HardwareType::BlackBox => "Black Box",
        }
    }
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
