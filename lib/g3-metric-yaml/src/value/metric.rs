/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use g3_metric::{MetricLabels, MetricName};

fn as_label_value(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        _ => Err(anyhow!(
            "yaml value type for 'metric label value' should be 'string', 'integer', 'real' or 'boolean'"
        )),
    }
}

pub fn as_metric_labels(v: &Yaml) -> anyhow::Result<MetricLabels> {
    let Yaml::Hash(map) = v else {
        return Err(anyhow!(
            "the yaml value type for 'metric labels' should be 'map'"
        ));
    };

    // duplicate keys are already rejected by the yaml loader
    let mut labels = Vec::with_capacity(map.len());
    crate::foreach_kv(map, |k, v| {
        let value = as_label_value(v).context("invalid metric label value")?;
        labels.push((k.to_string(), value));
        Ok(())
    })?;
    Ok(MetricLabels::from_iter(labels))
}

/// Parse a metric name from either the `namespace:name` string form or a map
/// with keys `namespace`, `name` and optional `labels`.
pub fn as_metric_name(v: &Yaml) -> anyhow::Result<MetricName> {
    match v {
        Yaml::String(s) => {
            MetricName::from_str(s).map_err(|e| anyhow!("invalid metric name {s}: {e}"))
        }
        Yaml::Hash(map) => {
            crate::foreach_kv(map, |k, _| match k {
                "namespace" | "name" | "labels" => Ok(()),
                _ => Err(anyhow!("invalid key {k}")),
            })?;

            let namespace = crate::hash_get_required(map, "namespace")?;
            let Yaml::String(namespace) = namespace else {
                return Err(anyhow!("yaml value type for 'namespace' should be 'string'"));
            };
            let name = crate::hash_get_required(map, "name")?;
            let Yaml::String(name) = name else {
                return Err(anyhow!("yaml value type for 'name' should be 'string'"));
            };

            match map.get(&Yaml::String("labels".to_string())) {
                Some(v) => {
                    let labels = as_metric_labels(v).context("invalid value for key labels")?;
                    MetricName::with_labels(namespace, name, &labels)
                        .context("invalid metric name")
                }
                None => MetricName::new(namespace, name).context("invalid metric name"),
            }
        }
        _ => Err(anyhow!(
            "yaml value type for 'metric name' should be 'string' or 'map'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let yaml = yaml_doc!("server: test-tls\nstat_id: 406995395936281\nonline: true\nratio: 0.5");
        let labels = as_metric_labels(&yaml).unwrap();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels.get("server"), Some("test-tls"));
        assert_eq!(labels.get("stat_id"), Some("406995395936281"));
        assert_eq!(labels.get("online"), Some("true"));
        assert_eq!(labels.get("ratio"), Some("0.5"));

        let yaml = yaml_doc!("{}");
        assert!(as_metric_labels(&yaml).unwrap().is_empty());
    }

    #[test]
    fn labels_err() {
        let yaml = yaml_doc!("- a\n- b");
        assert!(as_metric_labels(&yaml).is_err());

        let yaml = yaml_doc!("k:\n  - a");
        assert!(as_metric_labels(&yaml).is_err());

        let yaml = yaml_doc!("1: a");
        assert!(as_metric_labels(&yaml).is_err());
    }

    #[test]
    fn labels_duplicated_key() {
        assert!(yaml_rust::YamlLoader::load_from_str("k: a\nk: b").is_err());
    }

    #[test]
    fn name_str() {
        let yaml = yaml_doc!("io.latency:p99");
        let name = as_metric_name(&yaml).unwrap();
        assert_eq!(name.namespace(), "io.latency");
        assert_eq!(name.name(), "p99");
        assert!(name.labels().is_empty());

        assert!(as_metric_name(&yaml_doc!("p99")).is_err());
        assert!(as_metric_name(&yaml_doc!("':p99'")).is_err());
        assert!(as_metric_name(&yaml_doc!("1")).is_err());
    }

    #[test]
    fn name_map() {
        let yaml = yaml_doc!(
            r#"
namespace: io.latency
name: p99
labels:
  daemon_group: test
  online: y
"#
        );
        let name = as_metric_name(&yaml).unwrap();
        assert_eq!(name.to_string(), "io.latency:p99");
        assert_eq!(name.labels().len(), 2);
        assert_eq!(name.labels().get("daemon_group"), Some("test"));

        let yaml = yaml_doc!("namespace: io.latency\nname: p99");
        let name = as_metric_name(&yaml).unwrap();
        assert_eq!(name, MetricName::new("io.latency", "p99").unwrap());
    }

    #[test]
    fn name_map_err() {
        assert!(as_metric_name(&yaml_doc!("name: p99")).is_err());
        assert!(as_metric_name(&yaml_doc!("namespace: io")).is_err());
        assert!(as_metric_name(&yaml_doc!("namespace: ''\nname: p99")).is_err());
        assert!(as_metric_name(&yaml_doc!("namespace: io\nname: ''")).is_err());
        assert!(as_metric_name(&yaml_doc!("namespace: 1\nname: p99")).is_err());
        assert!(as_metric_name(&yaml_doc!("namespace: io\nname: p99\nlabels: a")).is_err());
        assert!(as_metric_name(&yaml_doc!("namespace: io\nname: p99\nunit: ms")).is_err());
    }
}
