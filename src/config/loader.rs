//! Configuration loading and resolution.
//!
//! # Responsibilities
//! - Read and deserialize the site config file
//! - Run semantic validation before anything else observes the config
//! - Invoke extension factories in declared order
//!
//! # Design Decisions
//! - Resolution happens once, synchronously, before any build work
//! - Factory failures are propagated unchanged, never retried

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::resolved::SiteConfig;
use crate::config::schema::RawSiteConfig;
use crate::config::validation::{self, ValidationError};
use crate::extensions::{registry, ExtensionError};

/// Error type for configuration loading and resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),

    /// An extension factory failed during its own setup; propagated
    /// unchanged from the factory.
    #[error("Integration setup failed: {0}")]
    Extension(#[from] ExtensionError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, validate, and resolve a site configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let raw: RawSiteConfig = toml::from_str(&content)?;
    resolve_config(&raw)
}

/// Resolve a raw configuration into an immutable [`SiteConfig`].
///
/// Validation collects every semantic defect before failing; extension
/// factories run only for configurations that validated cleanly, in
/// declared order.
pub fn resolve_config(raw: &RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    let fields = validation::validate(raw).map_err(ConfigError::Validation)?;

    let mut extensions = Vec::with_capacity(raw.integrations.len());
    for integration in &raw.integrations {
        let extension = registry::instantiate(&integration.name, &integration.options)?;
        extensions.push(extension);
    }

    tracing::debug!(
        site = %fields.site_origin,
        base = %fields.base_path,
        output = %fields.output_mode,
        integrations = extensions.len(),
        "configuration resolved"
    );

    Ok(SiteConfig::new(
        fields.site_origin,
        fields.base_path,
        fields.output_mode,
        extensions,
    ))
}
