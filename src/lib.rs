//! stackscout - repository introspection engine
//!
//! This library scans the root of an arbitrary software project and produces
//! a structured discovery report describing which technology stacks,
//! frameworks, test tools, infrastructure descriptors, CI systems, and
//! monorepo conventions are present. Detection uses only static evidence
//! (file presence, dependency manifests, file extensions) under bounded
//! resource consumption; no ecosystem build tool is ever invoked.
//!
//! # Core Concepts
//!
//! - **Detectors**: declarative rules describing how to recognize one
//!   technology, framework, or tool, evaluated by one generic matcher
//! - **Evidence**: a read-once cache of dependency names and raw manifest
//!   text, built a single time per run and shared by every detector
//! - **Report**: the assembled discovery result, a plain serializable value
//!
//! # Example Usage
//!
//! ```no_run
//! use stackscout::{run_discover, DiscoverOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() {
//! let root = PathBuf::from("/path/to/repo");
//! let opts = DiscoverOptions {
//!     toolkit_root: root.join(".stackscout"),
//!     project_root: root,
//! };
//!
//! let report = run_discover(&opts).await;
//! println!("primary stack: {:?}", report.primary_stack);
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`discovery`]: bounded walker, manifest readers, detector catalogs,
//!   and report assembly
//! - [`output`]: report serialization (YAML, JSON, markdown)
//! - [`cli`]: command-line surface

// Public modules
pub mod cli;
pub mod discovery;
pub mod output;

// Re-export key types for convenient access
pub use discovery::report::Report;
pub use discovery::{run_discover, DiscoverOptions};
pub use output::{FormatError, OutputFormat, ReportFormatter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
