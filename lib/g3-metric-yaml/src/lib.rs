/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

#[macro_use]
mod macros;

mod hash;
pub mod value;

pub use hash::{foreach_kv, get_required as hash_get_required};
