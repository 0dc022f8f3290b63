//! Services module - the scan pipeline.
//!
//! # Components
//!
//! - [`IgnoreRules`]: Loads the ignore-rule file at the scan root and decides
//!   whether a path is excluded (gitignore semantics, `.git` always excluded)
//! - [`TreeWalker`]: Depth-first, top-down walk that prunes excluded
//!   directories before descending
//! - [`render`]: Tree line and relative-age formatting
//! - [`ReportWriter`]: Streams the header and tree lines to the report file
//!
//! [`generate_folder_tree`] wires them together for one scan.

pub mod ignore_rules;
pub mod render;
pub mod report;
pub mod walker;

pub use ignore_rules::{IgnorePattern, IgnoreRuleSet, IgnoreRules};
pub use report::{ReportWriter, generate_folder_tree};
pub use walker::TreeWalker;
