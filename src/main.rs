//! FolderTree - Gitignore-aware folder tree report generator
//!
//! Main entry point. Takes no arguments.
//!
//! # Execution Flow
//!
//! 1. Initialize logging (stderr)
//! 2. Resolve the scan root (current working directory)
//! 3. Load `.gitignore` from the root, unless [`USE_GITIGNORE`] is off
//! 4. Walk the tree and stream the report to `folder_tree.txt` in the root
//! 5. Print the directory/file counts and the report path
//!
//! Any failure outside the per-entry tier ends the process with a non-zero
//! exit status.

use anyhow::Result;
use foldertree::models::resolve_root;
use foldertree::{APP_NAME, ScanConfig, SystemClock, VERSION, generate_folder_tree};

/// Honor `.gitignore` at the scan root. When false only `.git` is excluded.
const USE_GITIGNORE: bool = true;

fn main() -> Result<()> {
    let _guard = foldertree::logging::setup_logging(false)?;

    println!("Starting folder tree generation...");
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    run().map_err(|e| {
        tracing::error!("An error occurred: {:#}", e);
        e
    })
}

fn run() -> Result<()> {
    let root = resolve_root(&std::env::current_dir()?)?;
    let config = ScanConfig::new(root).use_gitignore(USE_GITIGNORE);

    println!("Scanning directory: {}", config.root);
    if config.use_gitignore {
        println!("Using gitignore patterns");
    } else {
        println!("Only ignoring .git folder");
    }

    let summary = generate_folder_tree(&config, &SystemClock)?;

    println!("\nScan complete!");
    println!(
        "Found {} directories and {} files",
        summary.directories, summary.files
    );
    println!("Results saved to: {}", config.output_path());

    Ok(())
}
