//! Build extensions (integrations).
//!
//! # Data Flow
//! ```text
//! config `integrations` list
//!     → registry.rs (name → factory)
//!     → Box<dyn BuildExtension> (opaque capability object)
//!     → stored in SiteConfig in declared order
//!     → applied to the BuildContext by the pipeline runner
//! ```
//!
//! # Design Decisions
//! - Extensions are opaque to the loader: stored and forwarded, never inspected
//! - Activation order is significant and preserved verbatim
//! - A factory failure aborts resolution; no retry, no partial activation

pub mod mdx;
pub mod registry;
pub mod sitemap;

use thiserror::Error;

use crate::pipeline::BuildContext;

/// Error raised by an extension factory or during extension application.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtensionError {
    #[error("unknown integration {name:?} (recognized: {recognized})")]
    Unknown { name: String, recognized: String },

    /// The factory rejected its options during setup.
    #[error("integration `{name}` failed to initialize: {reason}")]
    Init { name: &'static str, reason: String },

    /// The extension could not register its capabilities on the context.
    #[error("integration `{name}` failed to apply: {reason}")]
    Apply { name: &'static str, reason: String },
}

/// A build-pipeline extension activated from the site configuration.
///
/// Concrete variants register capabilities on the [`BuildContext`]; the
/// configuration loader stores them as an ordered sequence of this trait
/// without inspecting concrete identity.
pub trait BuildExtension: Send + Sync + std::fmt::Debug {
    /// Registry name this extension was activated under.
    fn name(&self) -> &'static str;

    /// Register this extension's capabilities on the build context.
    ///
    /// Runs in activation order; later extensions observe registrations
    /// made by earlier ones.
    fn apply(&self, ctx: &mut BuildContext) -> Result<(), ExtensionError>;
}
