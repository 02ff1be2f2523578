/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod coder;
pub mod codes;
pub mod error;
pub mod impls;
pub mod traits;
pub mod tree;
pub mod utils;

#[cfg(feature = "std")]
pub mod files;

#[cfg(feature = "fuzz")]
pub mod fuzz;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::coder::*;
    pub use crate::codes::*;
    #[cfg(feature = "std")]
    pub use crate::files::*;
    pub use crate::impls::*;
    pub use crate::traits::*;
    pub use crate::tree::*;
    pub use crate::utils::*;
}
