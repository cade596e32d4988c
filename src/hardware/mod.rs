// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware classification
//!
//! The closed set of PCM families this crate knows about, and the kernel
//! parameters each family implies.

pub mod pcm_type;

pub use pcm_type::*;
