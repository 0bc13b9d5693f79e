/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use serde_json::Value;

use g3_metric::{MetricLabels, MetricName};

fn as_label_value(v: &Value) -> anyhow::Result<String> {
    match v {
        Value::String(s) => Ok(s.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(anyhow!(
            "json value type for 'metric label value' should be 'string', 'number' or 'boolean'"
        )),
    }
}

pub fn as_metric_labels(v: &Value) -> anyhow::Result<MetricLabels> {
    let Value::Object(map) = v else {
        return Err(anyhow!(
            "json value type for 'metric labels' should be 'map'"
        ));
    };

    let mut labels = BTreeMap::new();
    for (k, v) in map {
        let value = as_label_value(v).context(format!("invalid value for label {k}"))?;
        labels.insert(k.as_str(), value);
    }
    Ok(MetricLabels::from_iter(&labels))
}

/// Parse a metric name from either the `namespace:name` string form or a map
/// with keys `namespace`, `name` and optional `labels`.
pub fn as_metric_name(v: &Value) -> anyhow::Result<MetricName> {
    match v {
        Value::String(s) => {
            MetricName::from_str(s).map_err(|e| anyhow!("invalid metric name {s}: {e}"))
        }
        Value::Object(map) => {
            if let Some(k) = map
                .keys()
                .find(|k| !matches!(k.as_str(), "namespace" | "name" | "labels"))
            {
                return Err(anyhow!("invalid key {k}"));
            }

            let namespace = crate::get_required_str(map, "namespace")?;
            let name = crate::get_required_str(map, "name")?;
            match map.get("labels") {
                Some(v) => {
                    let labels = as_metric_labels(v).context("invalid value for key labels")?;
                    MetricName::with_labels(namespace, name, &labels)
                        .context("invalid metric name")
                }
                None => MetricName::new(namespace, name).context("invalid metric name"),
            }
        }
        _ => Err(anyhow!(
            "json value type for 'metric name' should be 'string' or 'map'"
        )),
    }
}
