/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::anyhow;
use serde_json::{Map, Value};

pub fn get_required<'a>(map: &'a Map<String, Value>, k: &str) -> anyhow::Result<&'a Value> {
    map.get(k)
        .ok_or_else(|| anyhow!("no required key {k} found in this map"))
}

pub fn get_required_str<'a>(map: &'a Map<String, Value>, k: &str) -> anyhow::Result<&'a str> {
    match get_required(map, k)? {
        Value::String(s) => Ok(s),
        _ => Err(anyhow!("invalid string value for required key {k}")),
    }
}
