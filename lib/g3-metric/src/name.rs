/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{MetricLabels, MetricNameError, check_non_empty};

/// The name of a metric.
///
/// It consists of a namespace and a name. The namespace groups related metrics
/// together and also prevents collisions between metrics with the same name.
/// Optional labels are part of the identity but not of the `namespace:name`
/// display form.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMetricName")]
pub struct MetricName {
    namespace: SmolStr,
    name: SmolStr,
    labels: MetricLabels,
    #[serde(skip)]
    display: OnceCell<String>,
}

impl MetricName {
    pub fn new(namespace: &str, name: &str) -> Result<Self, MetricNameError> {
        check_non_empty(namespace, name)?;
        Ok(MetricName::build(namespace, name, MetricLabels::default()))
    }

    /// Create a metric name with labels copied from `labels`.
    ///
    /// Later changes to the source map have no effect on the returned value.
    pub fn with_labels<I, K, V>(
        namespace: &str,
        name: &str,
        labels: I,
    ) -> Result<Self, MetricNameError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        check_non_empty(namespace, name)?;
        Ok(MetricName::build(namespace, name, MetricLabels::from_iter(labels)))
    }

    /// Create a metric name using the fully qualified path of `T` as namespace
    ///
    /// The path comes from [`std::any::type_name`], whose output is not
    /// guaranteed to be stable across compiler versions, e.g. generic types
    /// render like `alloc::vec::Vec<u8>`.
    pub fn for_type<T: ?Sized>(name: &str) -> Result<Self, MetricNameError> {
        MetricName::new(std::any::type_name::<T>(), name)
    }

    pub fn for_type_with_labels<T, I, K, V>(name: &str, labels: I) -> Result<Self, MetricNameError>
    where
        T: ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        MetricName::with_labels(std::any::type_name::<T>(), name, labels)
    }

    fn build(namespace: &str, name: &str, labels: MetricLabels) -> Self {
        MetricName {
            namespace: SmolStr::new(namespace),
            name: SmolStr::new(name),
            labels,
            display: OnceCell::new(),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn labels(&self) -> &MetricLabels {
        &self.labels
    }

    /// The `namespace:name` form, built on first use
    pub fn as_str(&self) -> &str {
        self.display
            .get_or_init(|| {
                let mut s = String::with_capacity(self.namespace.len() + 1 + self.name.len());
                s.push_str(&self.namespace);
                s.push(':');
                s.push_str(&self.name);
                s
            })
            .as_str()
    }
}

impl PartialEq for MetricName {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
            && self.name == other.name
            && self.labels == other.labels
    }
}

impl Eq for MetricName {}

impl Hash for MetricName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.name.hash(state);
        self.labels.hash(state);
    }
}

impl PartialOrd for MetricName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetricName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.namespace
            .cmp(&other.namespace)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.labels.cmp(&other.labels))
    }
}

impl fmt::Debug for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricName")
            .field("namespace", &self.namespace.as_str())
            .field("name", &self.name.as_str())
            .field("labels", &self.labels)
            .finish()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for MetricName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for MetricName {
    type Err = MetricNameError;

    /// Parse the `namespace:name` form, splitting at the first ':'
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, name) = s.split_once(':').ok_or(MetricNameError::MissingSeparator)?;
        MetricName::new(namespace, name)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMetricName {
    namespace: String,
    name: String,
    #[serde(default)]
    labels: MetricLabels,
}

impl TryFrom<RawMetricName> for MetricName {
    type Error = MetricNameError;

    fn try_from(raw: RawMetricName) -> Result<Self, Self::Error> {
        check_non_empty(&raw.namespace, &raw.name)?;
        Ok(MetricName::build(&raw.namespace, &raw.name, raw.labels))
    }
}
