//! Build context assembled for extension application.

use serde::Serialize;
use url::Url;

use crate::config::{OutputMode, SiteConfig};

/// A content format registered by an extension (e.g., MDX).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentFormat {
    /// Format identifier, unique within a build.
    pub name: String,
    /// File extensions handled as this format.
    pub file_extensions: Vec<String>,
}

/// An additional output file an extension asks the generator to emit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmitArtifact {
    /// Output path, relative to the routes root; unique within a build.
    pub path: String,
    /// Name of the extension that requested the artifact.
    pub producer: String,
}

/// Mutable context handed to each extension during configure-and-build.
///
/// Extensions run in activation order, so later ones observe registrations
/// made by earlier ones.
#[derive(Debug)]
pub struct BuildContext {
    site_origin: Url,
    base_path: String,
    output_mode: OutputMode,
    content_formats: Vec<ContentFormat>,
    artifacts: Vec<EmitArtifact>,
}

impl BuildContext {
    pub(crate) fn new(config: &SiteConfig) -> Self {
        Self {
            site_origin: config.site_origin().clone(),
            base_path: config.base_path().to_string(),
            output_mode: config.output_mode(),
            content_formats: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    /// Canonical deployed origin of the site being built.
    pub fn site_origin(&self) -> &Url {
        &self.site_origin
    }

    /// URL path prefix under which all routes are rooted.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Register a content format. Returns false if a format with the same
    /// name is already registered; the context is left unchanged.
    pub fn register_content_format(&mut self, format: ContentFormat) -> bool {
        if self.content_formats.iter().any(|f| f.name == format.name) {
            return false;
        }
        self.content_formats.push(format);
        true
    }

    /// Register an emit artifact. Returns false if the path is already
    /// claimed; the context is left unchanged.
    pub fn register_artifact(&mut self, artifact: EmitArtifact) -> bool {
        if self.artifacts.iter().any(|a| a.path == artifact.path) {
            return false;
        }
        self.artifacts.push(artifact);
        true
    }

    /// Content formats registered so far, in registration order.
    pub fn content_formats(&self) -> &[ContentFormat] {
        &self.content_formats
    }

    /// Emit artifacts registered so far, in registration order.
    pub fn artifacts(&self) -> &[EmitArtifact] {
        &self.artifacts
    }

    pub(crate) fn into_parts(self) -> (Url, String, OutputMode, Vec<ContentFormat>, Vec<EmitArtifact>) {
        (
            self.site_origin,
            self.base_path,
            self.output_mode,
            self.content_formats,
            self.artifacts,
        )
    }

    #[cfg(test)]
    pub(crate) fn for_tests(origin: &str, base: &str) -> Self {
        Self {
            site_origin: Url::parse(origin).unwrap(),
            base_path: base.to_string(),
            output_mode: OutputMode::Static,
            content_formats: Vec::new(),
            artifacts: Vec::new(),
        }
    }
}
