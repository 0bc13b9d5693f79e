/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

mod labels;
pub use labels::{LabelIter, MetricLabels};

mod name;
pub use name::MetricName;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MetricNameError {
    #[error("metric namespace must be non-empty")]
    EmptyNamespace,
    #[error("metric name must be non-empty")]
    EmptyName,
    #[error("no ':' found between metric namespace and name")]
    MissingSeparator,
}

fn check_non_empty(namespace: &str, name: &str) -> Result<(), MetricNameError> {
    if namespace.is_empty() {
        return Err(MetricNameError::EmptyNamespace);
    }
    if name.is_empty() {
        return Err(MetricNameError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_order() {
        assert_eq!(check_non_empty("a", "b"), Ok(()));
        assert_eq!(check_non_empty("", "b"), Err(MetricNameError::EmptyNamespace));
        assert_eq!(check_non_empty("a", ""), Err(MetricNameError::EmptyName));
        // namespace is checked first
        assert_eq!(check_non_empty("", ""), Err(MetricNameError::EmptyNamespace));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            MetricNameError::EmptyNamespace.to_string(),
            "metric namespace must be non-empty"
        );
        assert_eq!(
            MetricNameError::EmptyName.to_string(),
            "metric name must be non-empty"
        );
    }
}
