// FolderTree - Gitignore-aware folder tree report generator
//
// This is the library crate containing the scan pipeline and its data structures.
// The binary crate (main.rs) provides the zero-argument entry point.

pub mod clock;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::{Clock, SystemClock};
pub use error::TreeError;
pub use models::{ScanConfig, ScanSummary, TraversalNode};
pub use services::{IgnoreRules, ReportWriter, TreeWalker, generate_folder_tree};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
