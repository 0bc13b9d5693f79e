/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod map;
pub mod value;

pub use map::{get_required as map_get_required, get_required_str};
