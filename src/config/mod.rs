//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! site config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors collected)
//!     → extension registry (ordered factory invocation)
//!     → SiteConfig (validated, immutable)
//!     → moved into the build pipeline entry point
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved and consumed exactly once
//! - `base` and `output` have defaults to allow minimal configs; `site` is required
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod resolved;
pub mod schema;
pub mod validation;

pub use loader::resolve_config;
pub use loader::ConfigError;
pub use resolved::OutputMode;
pub use resolved::SiteConfig;
pub use schema::IntegrationConfig;
pub use schema::RawSiteConfig;
pub use validation::ValidationError;
