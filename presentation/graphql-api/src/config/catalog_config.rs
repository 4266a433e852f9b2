use std::env;

use anyhow::anyhow;
use business::domain::product::value_objects::UpdatePolicy;

/// Catalog behaviour switches
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub seed: bool,
    pub update_policy: UpdatePolicy,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - SEED_CATALOG: "true"/"false", load the default products at startup (default: "true")
    /// - PRODUCT_UPDATE_POLICY: "truthy" or "presence" (default: "truthy")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("SEED_CATALOG").ok().as_deref(),
            env::var("PRODUCT_UPDATE_POLICY").ok().as_deref(),
        )
    }

    fn from_values(seed: Option<&str>, update_policy: Option<&str>) -> anyhow::Result<Self> {
        let seed = match seed.map(|value| value.trim().to_ascii_lowercase()) {
            None => true,
            Some(value) => match value.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(anyhow!("SEED_CATALOG must be true or false, got {}", value)),
            },
        };
        let update_policy = match update_policy {
            None => UpdatePolicy::default(),
            Some(value) => value.parse::<UpdatePolicy>().map_err(|e| anyhow!(e))?,
        };

        Ok(Self {
            seed,
            update_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_seeded_truthy_catalog() {
        let config = CatalogConfig::from_values(None, None).unwrap();

        assert!(config.seed);
        assert_eq!(config.update_policy, UpdatePolicy::Truthy);
    }

    #[test]
    fn should_read_explicit_values() {
        let config = CatalogConfig::from_values(Some("False"), Some("presence")).unwrap();

        assert!(!config.seed);
        assert_eq!(config.update_policy, UpdatePolicy::Presence);
    }

    #[test]
    fn should_reject_unknown_values() {
        assert!(CatalogConfig::from_values(Some("maybe"), None).is_err());
        assert!(CatalogConfig::from_values(None, Some("strict")).is_err());
    }
}
