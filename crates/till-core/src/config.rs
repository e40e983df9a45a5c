//! Engine configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                        | Values                              | Default            |
//! |---------------------------------|-------------------------------------|--------------------|
//! | `TILL_BUNDLE_QUANTITY_POLICY`   | `round_to_nearest`, `whole_units_only` | `round_to_nearest` |

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the [`BundleQuantityPolicy`].
pub const BUNDLE_QUANTITY_POLICY_VAR: &str = "TILL_BUNDLE_QUANTITY_POLICY";

/// How bundle offers treat a fractional aggregated quantity.
///
/// Bundle offers count whole units. A fractional quantity only reaches them
/// when a bundle offer is registered on a product sold by weight, or a
/// caller adds fractional amounts of a countable product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleQuantityPolicy {
    /// Round to the nearest whole unit (half away from zero) and apply the
    /// bundle arithmetic to that count.
    #[default]
    RoundToNearest,
    /// Apply bundle offers only to whole quantities; a fractional quantity
    /// pays the naive price.
    WholeUnitsOnly,
}

impl BundleQuantityPolicy {
    fn as_str(&self) -> &'static str {
        match self {
            BundleQuantityPolicy::RoundToNearest => "round_to_nearest",
            BundleQuantityPolicy::WholeUnitsOnly => "whole_units_only",
        }
    }
}

impl fmt::Display for BundleQuantityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleQuantityPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "round_to_nearest" => Ok(BundleQuantityPolicy::RoundToNearest),
            "whole_units_only" => Ok(BundleQuantityPolicy::WholeUnitsOnly),
            _ => Err(ConfigError::InvalidValue {
                key: BUNDLE_QUANTITY_POLICY_VAR.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// Offer engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Treatment of fractional quantities under bundle offers
    pub bundle_quantity_policy: BundleQuantityPolicy,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bundle_quantity_policy = match lookup(BUNDLE_QUANTITY_POLICY_VAR) {
            Some(value) => value.parse()?,
            None => BundleQuantityPolicy::default(),
        };

        Ok(EngineConfig {
            bundle_quantity_policy,
        })
    }

    /// Same config with a different bundle policy.
    pub fn with_bundle_quantity_policy(mut self, policy: BundleQuantityPolicy) -> Self {
        self.bundle_quantity_policy = policy;
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::load_from(lookup_in(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(
            config.bundle_quantity_policy,
            BundleQuantityPolicy::RoundToNearest
        );
    }

    #[test]
    fn test_reads_policy() {
        let config =
            EngineConfig::load_from(lookup_in(&[(BUNDLE_QUANTITY_POLICY_VAR, "Whole_Units_Only ")]))
                .unwrap();
        assert_eq!(
            config.bundle_quantity_policy,
            BundleQuantityPolicy::WholeUnitsOnly
        );
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = EngineConfig::load_from(lookup_in(&[(BUNDLE_QUANTITY_POLICY_VAR, "truncate")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for TILL_BUNDLE_QUANTITY_POLICY: \"truncate\""
        );
    }

    #[test]
    fn test_policy_display_parses_back() {
        for policy in [
            BundleQuantityPolicy::RoundToNearest,
            BundleQuantityPolicy::WholeUnitsOnly,
        ] {
            assert_eq!(policy.to_string().parse::<BundleQuantityPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_serde_names() {
        let config = EngineConfig::default()
            .with_bundle_quantity_policy(BundleQuantityPolicy::WholeUnitsOnly);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"bundleQuantityPolicy":"whole_units_only"}"#);
    }
}
