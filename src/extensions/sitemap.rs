//! Sitemap emission.
//!
//! Registers a sitemap index artifact with the build context; the generator
//! emits the XML once routes are known.

use serde::Deserialize;

use super::{BuildExtension, ExtensionError};
use crate::pipeline::{BuildContext, EmitArtifact};

const NAME: &str = "sitemap";

/// Output path of the sitemap index, relative to the routes root.
const INDEX_PATH: &str = "sitemap-index.xml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SitemapOptions {
    /// Maximum URL entries per emitted sitemap file.
    entry_limit: u32,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        // The sitemaps.org protocol caps a single file at 50k entries;
        // stay under it by default.
        Self { entry_limit: 45_000 }
    }
}

/// Build extension emitting a sitemap for all generated routes.
#[derive(Debug, Clone)]
pub struct SitemapExtension {
    entry_limit: u32,
}

impl SitemapExtension {
    /// Factory invoked by the registry with the activation's options table.
    pub fn from_options(options: &toml::Table) -> Result<Self, ExtensionError> {
        let options: SitemapOptions = toml::Value::Table(options.clone())
            .try_into()
            .map_err(|e: toml::de::Error| ExtensionError::Init {
                name: NAME,
                reason: e.to_string(),
            })?;

        if options.entry_limit == 0 {
            return Err(ExtensionError::Init {
                name: NAME,
                reason: "`entry_limit` must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            entry_limit: options.entry_limit,
        })
    }

    pub fn entry_limit(&self) -> u32 {
        self.entry_limit
    }
}

impl BuildExtension for SitemapExtension {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, ctx: &mut BuildContext) -> Result<(), ExtensionError> {
        let artifact = EmitArtifact {
            path: INDEX_PATH.to_string(),
            producer: NAME.to_string(),
        };
        if !ctx.register_artifact(artifact) {
            return Err(ExtensionError::Apply {
                name: NAME,
                reason: format!("artifact `{INDEX_PATH}` is already registered"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::BuildContext;

    #[test]
    fn test_default_entry_limit() {
        let ext = SitemapExtension::from_options(&toml::Table::new()).unwrap();
        assert_eq!(ext.entry_limit(), 45_000);
    }

    #[test]
    fn test_custom_entry_limit() {
        let table: toml::Table = toml::from_str("entry_limit = 1000").unwrap();
        let ext = SitemapExtension::from_options(&table).unwrap();
        assert_eq!(ext.entry_limit(), 1000);
    }

    #[test]
    fn test_zero_entry_limit_is_rejected() {
        let table: toml::Table = toml::from_str("entry_limit = 0").unwrap();
        let err = SitemapExtension::from_options(&table).unwrap_err();
        assert!(matches!(err, ExtensionError::Init { name: "sitemap", .. }));
    }

    #[test]
    fn test_apply_registers_index_artifact() {
        let ext = SitemapExtension::from_options(&toml::Table::new()).unwrap();
        let mut ctx = BuildContext::for_tests("https://example.com", "/blog");

        ext.apply(&mut ctx).unwrap();
        assert_eq!(ctx.artifacts().len(), 1);
        assert_eq!(ctx.artifacts()[0].path, "sitemap-index.xml");
        assert_eq!(ctx.artifacts()[0].producer, "sitemap");
    }
}
