//! Validated site configuration.
//!
//! # Design Decisions
//! - `SiteConfig` fields are private: the value is immutable after
//!   construction and handed to the pipeline by ownership transfer
//! - Extensions are stored as trait objects in declared order and never
//!   inspected beyond their registry name

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::extensions::BuildExtension;

/// Output generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Fixed set of output files emitted at build time.
    #[default]
    Static,
    /// Every page rendered per request by a server runtime.
    Server,
    /// Static by default with per-page server opt-in.
    Hybrid,
}

impl OutputMode {
    /// All recognized config-file spellings.
    pub const NAMES: [&'static str; 3] = ["static", "server", "hybrid"];

    /// Parse the config-file spelling of a mode.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "static" => Some(Self::Static),
            "server" => Some(Self::Server),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Server => "server",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, immutable site configuration.
///
/// Produced once by [`resolve_config`](crate::config::loader::resolve_config)
/// and consumed exactly once by the build pipeline entry point.
#[derive(Debug)]
pub struct SiteConfig {
    site_origin: Url,
    base_path: String,
    output_mode: OutputMode,
    extensions: Vec<Box<dyn BuildExtension>>,
}

impl SiteConfig {
    pub(crate) fn new(
        site_origin: Url,
        base_path: String,
        output_mode: OutputMode,
        extensions: Vec<Box<dyn BuildExtension>>,
    ) -> Self {
        Self {
            site_origin,
            base_path,
            output_mode,
            extensions,
        }
    }

    /// Canonical deployed origin of the site.
    pub fn site_origin(&self) -> &Url {
        &self.site_origin
    }

    /// Normalized URL path prefix under which all routes are rooted.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Output generation strategy, fixed at configuration time.
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Activated build extensions, in declared order.
    pub fn extensions(&self) -> &[Box<dyn BuildExtension>] {
        &self.extensions
    }

    /// Serializable summary for reporting (the extension objects themselves
    /// stay opaque; only their registry names are exposed).
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            site_origin: self.site_origin.origin().ascii_serialization(),
            base_path: self.base_path.clone(),
            output_mode: self.output_mode,
            integrations: self.extensions.iter().map(|e| e.name()).collect(),
        }
    }
}

/// Machine-readable view of a resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSummary {
    pub site_origin: String,
    pub base_path: String,
    pub output_mode: OutputMode,
    pub integrations: Vec<&'static str>,
}
