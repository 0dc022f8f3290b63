use crate::error::TreeError;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::Path;

/// Name of the ignore-rule file looked up at the scan root.
pub const DEFAULT_IGNORE_FILE_NAME: &str = ".gitignore";

/// Name of the report written inside the scan root.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "folder_tree.txt";

/// Version-control metadata directory, excluded from every scan.
pub const VCS_DIR_NAME: &str = ".git";

/// Configuration for a single scan.
///
/// Built with consuming setters:
///
/// ```ignore
/// let config = ScanConfig::new("/projects/site").use_gitignore(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory to scan (absolute)
    pub root: Utf8PathBuf,
    /// Honor the ignore-rule file; when false only `.git` is excluded
    pub use_gitignore: bool,
    /// Ignore-rule file name, resolved against `root`
    pub ignore_file_name: String,
    /// Report file name, resolved against `root`
    pub output_file_name: String,
}

impl ScanConfig {
    pub fn new<P: AsRef<Utf8Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            use_gitignore: true,
            ignore_file_name: DEFAULT_IGNORE_FILE_NAME.to_string(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }

    /// Set whether the ignore-rule file is honored (default: true).
    pub fn use_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = use_gitignore;
        self
    }

    /// Override the ignore-rule file name (default: `.gitignore`).
    pub fn ignore_file_name(mut self, name: impl Into<String>) -> Self {
        self.ignore_file_name = name.into();
        self
    }

    /// Override the report file name (default: `folder_tree.txt`).
    pub fn output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    pub fn ignore_file_path(&self) -> Utf8PathBuf {
        self.root.join(&self.ignore_file_name)
    }

    pub fn output_path(&self) -> Utf8PathBuf {
        self.root.join(&self.output_file_name)
    }
}

/// Canonicalize a scan root and require it to be UTF-8.
pub fn resolve_root(path: &Path) -> Result<Utf8PathBuf, TreeError> {
    let canonical = path
        .canonicalize()
        .map_err(|source| TreeError::RootUnavailable {
            path: Utf8PathBuf::from(path.to_string_lossy().into_owned()),
            source,
        })?;

    Utf8PathBuf::from_path_buf(canonical)
        .map_err(|p| TreeError::NonUtf8Root(p.to_string_lossy().into_owned()))
}
