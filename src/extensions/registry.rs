//! Name → factory registry for build extensions.
//!
//! The recognized set is closed at compile time; validation checks names
//! against it before any factory runs.

use super::{mdx, sitemap, BuildExtension, ExtensionError};

type Factory = fn(&toml::Table) -> Result<Box<dyn BuildExtension>, ExtensionError>;

const REGISTRY: &[(&str, Factory)] = &[("mdx", make_mdx), ("sitemap", make_sitemap)];

fn make_mdx(options: &toml::Table) -> Result<Box<dyn BuildExtension>, ExtensionError> {
    Ok(Box::new(mdx::MdxExtension::from_options(options)?))
}

fn make_sitemap(options: &toml::Table) -> Result<Box<dyn BuildExtension>, ExtensionError> {
    Ok(Box::new(sitemap::SitemapExtension::from_options(options)?))
}

/// Whether `name` maps to a registered factory.
pub fn is_recognized(name: &str) -> bool {
    REGISTRY.iter().any(|(known, _)| *known == name)
}

/// Names of all registered factories, in registry order.
pub fn recognized_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Invoke the factory registered under `name` with its options table.
///
/// Factory errors are propagated unchanged.
pub fn instantiate(
    name: &str,
    options: &toml::Table,
) -> Result<Box<dyn BuildExtension>, ExtensionError> {
    let factory = REGISTRY
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, factory)| factory)
        .ok_or_else(|| ExtensionError::Unknown {
            name: name.to_string(),
            recognized: recognized_names().join(", "),
        })?;

    factory(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_names() {
        assert_eq!(recognized_names(), ["mdx", "sitemap"]);
        assert!(is_recognized("mdx"));
        assert!(is_recognized("sitemap"));
        assert!(!is_recognized("rss"));
    }

    #[test]
    fn test_instantiate_unknown_name() {
        let err = instantiate("rss", &toml::Table::new()).unwrap_err();
        assert!(matches!(err, ExtensionError::Unknown { name, .. } if name == "rss"));
    }

    #[test]
    fn test_instantiate_known_names() {
        let mdx = instantiate("mdx", &toml::Table::new()).unwrap();
        assert_eq!(mdx.name(), "mdx");

        let sitemap = instantiate("sitemap", &toml::Table::new()).unwrap();
        assert_eq!(sitemap.name(), "sitemap");
    }
}
