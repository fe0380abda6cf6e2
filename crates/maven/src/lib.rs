//! # pomsync-maven
//!
//! Maven `pom.xml` support for pomsync.
//!
//! Parses descriptors into the core data model using quick-xml and applies
//! planned version rewrites as a streaming event copy, so every byte the
//! planner did not touch comes back out unchanged. Saves go through a temp
//! file in the target directory and a rename, never a direct overwrite.

pub mod document;
pub mod error;
mod reader;
mod rewriter;
mod writer;

pub use document::PomDocument;
pub use error::PomError;
