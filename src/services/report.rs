//! Report writing.
//!
//! The report is streamed: the header goes out first, then each directory's
//! lines as the walker reaches it.

use crate::clock::Clock;
use crate::error::TreeError;
use crate::models::{ScanConfig, ScanSummary, TraversalNode};
use crate::services::ignore_rules::IgnoreRules;
use crate::services::render::{format_relative_age, render_directory_line, render_file_line};
use crate::services::walker::TreeWalker;
use anyhow::Result;
use camino::Utf8Path;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::time::SystemTime;

/// Width of the `=` rules around the ignore-file block
const SEPARATOR_WIDTH: usize = 40;

/// Writes the header and tree lines of a report, counting what it renders.
pub struct ReportWriter<W: Write> {
    out: W,
    started: DateTime<Local>,
    now: SystemTime,
    summary: ScanSummary,
}

impl<W: Write> ReportWriter<W> {
    /// `started` is the scan start time; every age is measured against it.
    pub fn new(out: W, started: DateTime<Local>) -> Self {
        Self {
            out,
            now: SystemTime::from(started),
            started,
            summary: ScanSummary::default(),
        }
    }

    pub fn write_header(
        &mut self,
        root: &Utf8Path,
        use_gitignore: bool,
        ignore_file_name: &str,
        ignore_lines: &[String],
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "Folder tree generated on: {}",
            self.started.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(self.out, "Root: {}", root)?;
        writeln!(self.out, "Using gitignore: {}", use_gitignore)?;

        if !ignore_lines.is_empty() {
            let separator = "=".repeat(SEPARATOR_WIDTH);
            writeln!(self.out)?;
            writeln!(self.out, "{} contents:", ignore_file_name)?;
            writeln!(self.out, "{}", separator)?;
            for line in ignore_lines {
                writeln!(self.out, "{}", line)?;
            }
            writeln!(self.out, "{}", separator)?;
        }

        writeln!(self.out)
    }

    /// Render one visited directory: its own line (unless it is the root),
    /// then one line per retained file.
    ///
    /// Entries whose timestamp was unavailable are skipped and not counted.
    pub fn write_node(&mut self, node: &TraversalNode) -> io::Result<()> {
        if !node.is_root() {
            if let Some(modified) = node.modified {
                let age = format_relative_age(modified, self.now);
                writeln!(self.out, "{}", render_directory_line(node.depth, node.name(), &age))?;
                self.summary.record_directory();
            }
        }

        let last = node.files.len().saturating_sub(1);
        for (index, name) in node.files.iter().enumerate() {
            let path = node.path.join(name);
            let modified = match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(time) => time,
                Err(e) => {
                    tracing::warn!("Error processing file {}: {}", path, e);
                    continue;
                }
            };

            let age = format_relative_age(modified, self.now);
            writeln!(
                self.out,
                "{}",
                render_file_line(node.depth, name, index == last, &age)
            )?;
            self.summary.record_file();
        }

        Ok(())
    }

    /// Flush the output and return the final counts.
    pub fn finish(mut self) -> io::Result<ScanSummary> {
        self.out.flush()?;
        Ok(self.summary)
    }
}

/// Run a complete scan and write the report to `config.output_path()`.
///
/// The output file is created before the walk starts, so unless an ignore
/// rule excludes it, it lists itself.
///
/// # Errors
///
/// Fails if the ignore file cannot be read or compiled, the root cannot be
/// listed, or the report cannot be written. Unreadable entries inside the
/// tree are logged and skipped instead.
pub fn generate_folder_tree(config: &ScanConfig, clock: &impl Clock) -> Result<ScanSummary> {
    let started = clock.now();
    let rules = IgnoreRules::load(config)?;

    let output_path = config.output_path();
    let write_error = |source: io::Error| TreeError::ReportWrite {
        path: output_path.clone(),
        source,
    };

    let file = File::create(&output_path).map_err(write_error)?;
    let mut writer = ReportWriter::new(BufWriter::new(file), started);

    writer
        .write_header(
            &config.root,
            config.use_gitignore,
            &config.ignore_file_name,
            rules.display_lines(),
        )
        .map_err(write_error)?;

    TreeWalker::new(&rules).walk(|node| writer.write_node(&node).map_err(write_error))?;

    let summary = writer.finish().map_err(write_error)?;
    tracing::info!(
        "Scan of {} complete: {} directories, {} files",
        config.root,
        summary.directories,
        summary.files
    );

    Ok(summary)
}
