//! Build pipeline boundary.
//!
//! # Data Flow
//! ```text
//! SiteConfig (moved in)
//!     → context.rs (BuildContext assembled from config)
//!     → extensions applied in declared order
//!     → runner.rs produces the BuildPlan
//!     → plan handed to the external generator
//! ```
//!
//! # Design Decisions
//! - Fail fast: the first extension failure aborts the build
//! - Extensions run in order, not concurrently
//! - Rendering, bundling, and serving belong to the external generator

pub mod context;
pub mod runner;

pub use context::{BuildContext, ContentFormat, EmitArtifact};
pub use runner::{run, BuildPlan, PipelineError};
