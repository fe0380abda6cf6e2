//! # pomsync-core
//!
//! Core data model and rewrite-decision logic for pomsync.
//!
//! Holds the coordinate/descriptor model, the single-pass version resolver,
//! the last-write-wins inventory, and the per-dependency rewrite planner.
//! Everything here is pure data and pure functions; reading and rewriting
//! actual `pom.xml` files lives in `pomsync-maven`.

pub mod config;
pub mod coordinate;
pub mod descriptor;
pub mod inventory;
pub mod planner;
pub mod report;
pub mod resolver;

// Re-exports for downstream crates
pub use config::Config;
pub use coordinate::ArtifactCoordinate;
pub use descriptor::{Dependency, DependencyNode, Descriptor, Parent};
pub use inventory::{Inventory, build_inventory};
pub use planner::{RewriteDecision, plan};
pub use report::{RewriteEntry, RunReport, SkipEntry, SkipReason};
pub use resolver::{property_name, resolve_version};
