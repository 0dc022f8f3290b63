//! Depth-first, top-down directory walker.
//!
//! Each directory is handed to the visitor before any of its subdirectories,
//! so the report can be written while the walk is still in progress.
//! Excluded subdirectories are pruned before recursion and their contents are
//! never listed.

use crate::error::TreeError;
use crate::models::TraversalNode;
use crate::services::ignore_rules::IgnoreRules;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;

/// Immediate children of one directory, split by kind.
#[derive(Debug, Default)]
struct Listing {
    dirs: Vec<String>,
    files: Vec<String>,
}

/// Walks a directory tree, filtering entries through [`IgnoreRules`].
pub struct TreeWalker<'a> {
    rules: &'a IgnoreRules,
}

impl<'a> TreeWalker<'a> {
    pub fn new(rules: &'a IgnoreRules) -> Self {
        Self { rules }
    }

    /// Walk from the rules' root, calling `visit` once per retained directory.
    ///
    /// # Errors
    ///
    /// Fails if the root itself cannot be listed, or if `visit` fails.
    /// Unreadable entries below the root are logged and skipped.
    pub fn walk<F>(&self, mut visit: F) -> Result<(), TreeError>
    where
        F: FnMut(TraversalNode) -> Result<(), TreeError>,
    {
        let root = self.rules.root();
        let listing = list_directory(root).map_err(|source| TreeError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;

        self.visit_directory(root.to_path_buf(), 0, listing, &mut visit)
    }

    fn walk_directory<F>(&self, dir: Utf8PathBuf, depth: usize, visit: &mut F) -> Result<(), TreeError>
    where
        F: FnMut(TraversalNode) -> Result<(), TreeError>,
    {
        match list_directory(&dir) {
            Ok(listing) => self.visit_directory(dir, depth, listing, visit),
            Err(e) => {
                tracing::warn!("Error reading directory {}: {}", dir, e);
                Ok(())
            }
        }
    }

    fn visit_directory<F>(
        &self,
        dir: Utf8PathBuf,
        depth: usize,
        listing: Listing,
        visit: &mut F,
    ) -> Result<(), TreeError>
    where
        F: FnMut(TraversalNode) -> Result<(), TreeError>,
    {
        let Listing { mut dirs, mut files } = listing;

        dirs.sort();
        dirs.retain(|name| {
            let excluded = self.rules.is_excluded(&dir.join(name), true);
            if excluded {
                tracing::debug!("Pruned directory {}", dir.join(name));
            }
            !excluded
        });

        files.sort();
        files.retain(|name| !self.rules.is_excluded(&dir.join(name), false));

        let modified = if depth > 0 {
            match fs::metadata(&dir).and_then(|m| m.modified()) {
                Ok(time) => Some(time),
                Err(e) => {
                    tracing::warn!("Error processing directory {}: {}", dir, e);
                    None
                }
            }
        } else {
            None
        };

        visit(TraversalNode {
            path: dir.clone(),
            depth,
            modified,
            files,
        })?;

        for name in dirs {
            self.walk_directory(dir.join(name), depth + 1, visit)?;
        }

        Ok(())
    }
}

/// List a directory's immediate children.
///
/// Symlinks are not followed: a link to a directory is left out entirely,
/// any other link is listed as a file.
fn list_directory(dir: &Utf8Path) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for entry in dir.read_dir_utf8()? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Error reading entry in {}: {}", dir, e);
                continue;
            }
        };

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::warn!("Error processing {}: {}", entry.path(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string();
        if file_type.is_dir() {
            listing.dirs.push(name);
        } else if file_type.is_symlink() && entry.path().is_dir() {
            tracing::debug!("Not following directory symlink {}", entry.path());
        } else {
            listing.files.push(name);
        }
    }

    Ok(listing)
}
