use camino::Utf8PathBuf;
use std::time::SystemTime;

/// A directory visited by the walker.
///
/// Created when the walker enters a directory and consumed immediately by the
/// renderer; nothing keeps it afterwards.
#[derive(Debug, Clone)]
pub struct TraversalNode {
    pub path: Utf8PathBuf,
    /// Root is depth 0
    pub depth: usize,
    /// None when the directory's timestamp could not be read
    pub modified: Option<SystemTime>,
    /// Retained file names, sorted ordinally
    pub files: Vec<String>,
}

impl TraversalNode {
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Final path component, empty for a bare root such as `/`.
    pub fn name(&self) -> &str {
        self.path.file_name().unwrap_or_default()
    }
}

/// Counters collected during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub directories: usize,
    pub files: usize,
}

impl ScanSummary {
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = ScanSummary::default();
        summary.record_directory();
        summary.record_file();
        summary.record_file();

        assert_eq!(summary, ScanSummary { directories: 1, files: 2 });
    }

    #[test]
    fn test_node_name_and_root() {
        let node = TraversalNode {
            path: Utf8PathBuf::from("/projects/site/src"),
            depth: 1,
            modified: None,
            files: Vec::new(),
        };
        assert_eq!(node.name(), "src");
        assert!(!node.is_root());
    }
}
