//! Configuration schema definitions.
//!
//! This module defines the raw configuration structure exactly as it appears
//! in the site config file. All types derive Serde traits for
//! deserialization; semantic checks live in `validation` and the validated
//! form is [`SiteConfig`](crate::config::SiteConfig).

use serde::{Deserialize, Serialize};

/// Root raw configuration for a site build.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RawSiteConfig {
    /// Canonical deployed origin (e.g., "https://nharu.dev"). Required.
    pub site: Option<String>,

    /// URL path prefix under which all generated routes are rooted.
    pub base: String,

    /// Output generation strategy ("static", "server", or "hybrid").
    pub output: String,

    /// Ordered integration activations. Order is significant: later
    /// integrations observe registrations made by earlier ones.
    pub integrations: Vec<IntegrationConfig>,
}

impl Default for RawSiteConfig {
    fn default() -> Self {
        Self {
            site: None,
            base: "/".to_string(),
            output: "static".to_string(),
            integrations: Vec::new(),
        }
    }
}

/// A single integration activation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct IntegrationConfig {
    /// Registry name of the integration (e.g., "mdx", "sitemap").
    pub name: String,

    /// Integration-specific options, forwarded opaquely to the factory.
    #[serde(default)]
    pub options: toml::Table,
}

impl IntegrationConfig {
    /// Activation with no options, as most config files write it.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: toml::Table::new(),
        }
    }
}
