//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check `site` is a well-formed absolute URL with a host
//! - Check `output` is a recognized mode
//! - Check and normalize the `base` path prefix
//! - Check integration names against the extension registry
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: `RawSiteConfig → Result<_, Vec<ValidationError>>`
//! - Runs before any extension factory is invoked

use thiserror::Error;
use url::Url;

use crate::config::resolved::OutputMode;
use crate::config::schema::RawSiteConfig;
use crate::extensions::registry;

/// A single semantic defect found in a raw configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("`site` is required and must be an absolute URL")]
    MissingSiteOrigin,

    #[error("`site` is not a valid absolute URL: {value:?} ({reason})")]
    InvalidSiteOrigin { value: String, reason: String },

    #[error("`output` must be one of `static`, `server`, `hybrid`, got {value:?}")]
    UnknownOutputMode { value: String },

    #[error("`base` must be a path prefix starting with '/', got {value:?}")]
    InvalidBasePath { value: String },

    #[error("unknown integration {name:?} (recognized: {recognized})")]
    UnknownIntegration { name: String, recognized: String },
}

/// Scalar fields of a configuration that passed validation, in their
/// resolved representations.
#[derive(Debug)]
pub(crate) struct ValidatedFields {
    pub site_origin: Url,
    pub base_path: String,
    pub output_mode: OutputMode,
}

/// Validate a raw configuration, collecting every defect.
pub(crate) fn validate(raw: &RawSiteConfig) -> Result<ValidatedFields, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let site_origin = match &raw.site {
        None => {
            errors.push(ValidationError::MissingSiteOrigin);
            None
        }
        Some(value) => match parse_site_origin(value) {
            Ok(url) => Some(url),
            Err(err) => {
                errors.push(err);
                None
            }
        },
    };

    let output_mode = match OutputMode::parse(&raw.output) {
        Some(mode) => Some(mode),
        None => {
            errors.push(ValidationError::UnknownOutputMode {
                value: raw.output.clone(),
            });
            None
        }
    };

    let base_path = match normalize_base_path(&raw.base) {
        Ok(base) => Some(base),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    for integration in &raw.integrations {
        if !registry::is_recognized(&integration.name) {
            errors.push(ValidationError::UnknownIntegration {
                name: integration.name.clone(),
                recognized: registry::recognized_names().join(", "),
            });
        }
    }

    // Every None above recorded an error, so all three are Some here.
    match (site_origin, base_path, output_mode) {
        (Some(site_origin), Some(base_path), Some(output_mode)) if errors.is_empty() => {
            Ok(ValidatedFields {
                site_origin,
                base_path,
                output_mode,
            })
        }
        _ => Err(errors),
    }
}

fn parse_site_origin(value: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(value).map_err(|e| ValidationError::InvalidSiteOrigin {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if !url.has_host() {
        return Err(ValidationError::InvalidSiteOrigin {
            value: value.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

/// Normalize a base path: a single trailing slash is dropped except for the
/// root `/` itself.
fn normalize_base_path(value: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidBasePath {
        value: value.to_string(),
    };

    if !value.starts_with('/') || value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    if value.contains("//") {
        return Err(invalid());
    }

    if value.len() > 1 && value.ends_with('/') {
        Ok(value[..value.len() - 1].to_string())
    } else {
        Ok(value.to_string())
    }
}
