/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::{BTreeMap, btree_map};
use std::fmt::{self, Write};

use log::debug;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Read-only label set attached to a [`crate::MetricName`].
///
/// There is no mutating API. A new set is built from any iterator of key/value
/// pairs, which always copies the input.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricLabels {
    inner: BTreeMap<SmolStr, SmolStr>,
}

impl MetricLabels {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(|v| v.as_str())
    }

    /// Iterate over all labels in key order
    #[inline]
    pub fn iter(&self) -> LabelIter<'_> {
        LabelIter {
            inner: self.inner.iter(),
        }
    }
}

pub struct LabelIter<'a> {
    inner: btree_map::Iter<'a, SmolStr, SmolStr>,
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for LabelIter<'_> {}

impl<K, V> FromIterator<(K, V)> for MetricLabels
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut inner = BTreeMap::new();
        for (k, v) in iter {
            let key = SmolStr::new(k.as_ref());
            let value = SmolStr::new(v.as_ref());
            if let Some(old) = inner.insert(key, value) {
                debug!(
                    "metric label {} redefined, old value {old} dropped",
                    k.as_ref()
                );
            }
        }
        MetricLabels { inner }
    }
}

impl<'a> IntoIterator for &'a MetricLabels {
    type Item = (&'a str, &'a str);
    type IntoIter = LabelIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MetricLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        let mut iter = self.inner.iter();
        if let Some((name, value)) = iter.next() {
            f.write_str(name)?;
            f.write_char('=')?;
            f.write_str(value)?;

            for (name, value) in iter {
                f.write_char(',')?;
                f.write_str(name)?;
                f.write_char('=')?;
                f.write_str(value)?;
            }
        }
        f.write_char('}')
    }
}
