//! Configure-and-build entry point.
//!
//! # Responsibilities
//! - Assemble the build context from the resolved configuration
//! - Apply extensions in declared order
//! - Produce the plan the external generator executes

use serde::Serialize;
use thiserror::Error;

use crate::config::{OutputMode, SiteConfig};
use crate::extensions::ExtensionError;
use crate::pipeline::context::{BuildContext, ContentFormat, EmitArtifact};

/// Error type for the configure-and-build phase.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// An extension failed while registering its capabilities; propagated
    /// unchanged.
    #[error(transparent)]
    Extension(#[from] ExtensionError),
}

/// The plan handed to the external static-site generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPlan {
    /// Canonical origin used for absolute URLs (scheme + host).
    pub site_origin: String,
    /// Path prefix under which all routes are rooted.
    pub routes_root: String,
    pub output_mode: OutputMode,
    /// Content formats registered by extensions, in registration order.
    pub content_formats: Vec<ContentFormat>,
    /// Additional output files requested by extensions, in registration order.
    pub artifacts: Vec<EmitArtifact>,
}

/// Apply all configured extensions and produce the build plan.
///
/// Consumes the configuration: it is resolved once and handed off once.
/// The first extension failure aborts the build.
pub fn run(config: SiteConfig) -> Result<BuildPlan, PipelineError> {
    let mut ctx = BuildContext::new(&config);

    for extension in config.extensions() {
        tracing::debug!(extension = extension.name(), "applying build extension");
        extension.apply(&mut ctx)?;
    }

    let (site_origin, routes_root, output_mode, content_formats, artifacts) = ctx.into_parts();

    tracing::info!(
        site = %site_origin,
        routes_root = %routes_root,
        output = %output_mode,
        content_formats = content_formats.len(),
        artifacts = artifacts.len(),
        "build configured"
    );

    Ok(BuildPlan {
        site_origin: site_origin.origin().ascii_serialization(),
        routes_root,
        output_mode,
        content_formats,
        artifacts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_config;
    use crate::config::schema::{IntegrationConfig, RawSiteConfig};

    fn blog_config() -> RawSiteConfig {
        RawSiteConfig {
            site: Some("https://nharu.dev".to_string()),
            base: "/blog".to_string(),
            output: "static".to_string(),
            integrations: vec![
                IntegrationConfig::named("mdx"),
                IntegrationConfig::named("sitemap"),
            ],
        }
    }

    #[test]
    fn test_run_produces_plan_for_blog_config() {
        let config = resolve_config(&blog_config()).unwrap();
        let plan = run(config).unwrap();

        assert_eq!(plan.site_origin, "https://nharu.dev");
        assert_eq!(plan.routes_root, "/blog");
        assert_eq!(plan.output_mode, OutputMode::Static);
        assert_eq!(plan.content_formats.len(), 1);
        assert_eq!(plan.content_formats[0].name, "mdx");
        assert_eq!(plan.artifacts.len(), 1);
        assert_eq!(plan.artifacts[0].path, "sitemap-index.xml");
    }

    #[test]
    fn test_run_with_no_extensions() {
        let mut raw = blog_config();
        raw.integrations.clear();

        let plan = run(resolve_config(&raw).unwrap()).unwrap();
        assert!(plan.content_formats.is_empty());
        assert!(plan.artifacts.is_empty());
    }

    #[test]
    fn test_duplicate_activation_aborts_build() {
        let mut raw = blog_config();
        raw.integrations = vec![
            IntegrationConfig::named("sitemap"),
            IntegrationConfig::named("sitemap"),
        ];

        // Both factories succeed; the second apply collides on the
        // sitemap index path and aborts the run.
        let config = resolve_config(&raw).unwrap();
        let err = run(config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Extension(ExtensionError::Apply { name: "sitemap", .. })
        ));
    }

    #[test]
    fn test_plan_is_serializable() {
        let config = resolve_config(&blog_config()).unwrap();
        let plan = run(config).unwrap();

        let json: serde_json::Value = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["site_origin"], "https://nharu.dev");
        assert_eq!(json["output_mode"], "static");
        assert_eq!(json["artifacts"][0]["producer"], "sitemap");
    }
}
