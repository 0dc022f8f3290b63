//! Data models for the folder tree scan.
//!
//! - [`ScanConfig`]: The explicit configuration value passed into the scan entry point
//! - [`TraversalNode`]: A directory being visited, handed straight to the renderer
//! - [`ScanSummary`]: Directory and file counters reported once the walk finishes
//!
//! None of these outlive a single invocation.

pub mod config;
pub mod tree;

pub use config::{
    DEFAULT_IGNORE_FILE_NAME, DEFAULT_OUTPUT_FILE_NAME, ScanConfig, VCS_DIR_NAME, resolve_root,
};
pub use tree::{ScanSummary, TraversalNode};
