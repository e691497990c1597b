//! MDX content-format support.
//!
//! Registers the `mdx` content format with the build context so the
//! generator treats matching files as pages. The actual MDX compilation is
//! owned by the generator.

use serde::Deserialize;

use super::{BuildExtension, ExtensionError};
use crate::pipeline::{BuildContext, ContentFormat};

const NAME: &str = "mdx";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MdxOptions {
    /// File extensions handled as MDX content.
    file_extensions: Vec<String>,
}

impl Default for MdxOptions {
    fn default() -> Self {
        Self {
            file_extensions: vec![".mdx".to_string()],
        }
    }
}

/// Build extension enabling MDX pages.
#[derive(Debug, Clone)]
pub struct MdxExtension {
    file_extensions: Vec<String>,
}

impl MdxExtension {
    /// Factory invoked by the registry with the activation's options table.
    pub fn from_options(options: &toml::Table) -> Result<Self, ExtensionError> {
        let options: MdxOptions = toml::Value::Table(options.clone())
            .try_into()
            .map_err(|e: toml::de::Error| ExtensionError::Init {
                name: NAME,
                reason: e.to_string(),
            })?;

        if options.file_extensions.is_empty() {
            return Err(ExtensionError::Init {
                name: NAME,
                reason: "`file_extensions` must not be empty".to_string(),
            });
        }
        for ext in &options.file_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ExtensionError::Init {
                    name: NAME,
                    reason: format!("invalid file extension {ext:?}"),
                });
            }
        }

        Ok(Self {
            file_extensions: options.file_extensions,
        })
    }
}

impl BuildExtension for MdxExtension {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, ctx: &mut BuildContext) -> Result<(), ExtensionError> {
        let format = ContentFormat {
            name: NAME.to_string(),
            file_extensions: self.file_extensions.clone(),
        };
        if !ctx.register_content_format(format) {
            return Err(ExtensionError::Apply {
                name: NAME,
                reason: "content format `mdx` is already registered".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::BuildContext;

    fn context() -> BuildContext {
        BuildContext::for_tests("https://example.com", "/")
    }

    #[test]
    fn test_default_options() {
        let ext = MdxExtension::from_options(&toml::Table::new()).unwrap();
        assert_eq!(ext.file_extensions, [".mdx"]);
    }

    #[test]
    fn test_custom_file_extensions() {
        let table: toml::Table = toml::from_str(r#"file_extensions = [".mdx", ".markdown"]"#)
            .unwrap();
        let ext = MdxExtension::from_options(&table).unwrap();
        assert_eq!(ext.file_extensions, [".mdx", ".markdown"]);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let table: toml::Table = toml::from_str("remark = true").unwrap();
        let err = MdxExtension::from_options(&table).unwrap_err();
        assert!(matches!(err, ExtensionError::Init { name: "mdx", .. }));
    }

    #[test]
    fn test_dotless_extension_is_rejected() {
        let table: toml::Table = toml::from_str(r#"file_extensions = ["mdx"]"#).unwrap();
        let err = MdxExtension::from_options(&table).unwrap_err();
        assert!(matches!(err, ExtensionError::Init { name: "mdx", .. }));
    }

    #[test]
    fn test_apply_registers_content_format() {
        let ext = MdxExtension::from_options(&toml::Table::new()).unwrap();
        let mut ctx = context();

        ext.apply(&mut ctx).unwrap();
        assert_eq!(ctx.content_formats().len(), 1);
        assert_eq!(ctx.content_formats()[0].name, "mdx");
    }

    #[test]
    fn test_duplicate_apply_fails() {
        let ext = MdxExtension::from_options(&toml::Table::new()).unwrap();
        let mut ctx = context();

        ext.apply(&mut ctx).unwrap();
        let err = ext.apply(&mut ctx).unwrap_err();
        assert!(matches!(err, ExtensionError::Apply { name: "mdx", .. }));
    }
}
