//! Static-Site Build Configuration Resolver
//!
//! Resolves a declarative site configuration into an immutable [`SiteConfig`]
//! and hands it to the build pipeline entry point.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │            SITE BUILD FRONT-END               │
//!                    │                                               │
//!   site.toml        │  ┌─────────┐    ┌────────────┐               │
//!   ─────────────────┼─▶│ config  │───▶│ extensions │               │
//!                    │  │ loader  │    │  registry  │               │
//!                    │  └────┬────┘    └─────┬──────┘               │
//!                    │       │               │                       │
//!                    │       ▼               ▼                       │
//!                    │  ┌──────────────────────────┐                │
//!                    │  │  SiteConfig (immutable)  │                │
//!                    │  └────────────┬─────────────┘                │
//!                    │               │ moved once                    │
//!                    │               ▼                               │
//!   BuildPlan        │  ┌──────────────────────────┐                │
//!   ◀────────────────┼──│   pipeline (configure-   │───▶ external   │
//!                    │  │   and-build entry point) │     generator  │
//!                    │  └──────────────────────────┘                │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Rendering, bundling, sitemap XML emission, and serving belong to the
//! external generator; this crate owns configuration resolution and the
//! handoff boundary only.

// Core subsystems
pub mod config;
pub mod extensions;
pub mod pipeline;

// Cross-cutting concerns
pub mod observability;

pub use config::loader::{load_config, resolve_config};
pub use config::{ConfigError, OutputMode, RawSiteConfig, SiteConfig, ValidationError};
pub use extensions::{BuildExtension, ExtensionError};
pub use pipeline::{BuildContext, BuildPlan, PipelineError};
