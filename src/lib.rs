// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! pcm-info - hardware profiles for GM powertrain control modules.
//!
//! Given the OSID a PCM reports during the connection handshake, this crate
//! says how to talk to its flash: which kernel to upload and where, how big
//! the image is, which unlock algorithm applies and what the kernel can do.
//!
//! Modules:
//! - `osid`: the identifier newtype and its parsing
//! - `hardware`: the closed set of PCM families and their kernel defaults
//! - `profile`: the immutable resolved profile and per-group overrides
//! - `registry`: the built-in OSID table and uniqueness checks
//! - `resolver`: OSID to profile resolution
//! - `config`: resolver settings stored on disk
//!
//! ```
//! use pcm_info::{resolve, HardwareType, Osid};
//!
//! let profile = resolve(Osid::new(12623279));
//! assert_eq!(profile.hardware_type(), HardwareType::P12);
//! assert!(profile.is_flashable());
//! ```

pub mod config;
pub mod error;
pub mod hardware;
pub mod osid;
pub mod profile;
pub mod registry;
pub mod resolver;

pub use config::ResolverSettings;
pub use error::{PcmError, Result};
pub use hardware::{HardwareType, KernelDefaults};
pub use osid::Osid;
pub use profile::{GroupOverrides, HardwareProfile, BASE_PROFILE};
pub use registry::{OsidGroup, OsidRegistry};
pub use resolver::{resolve, DescriptionMode, ProfileResolver};
