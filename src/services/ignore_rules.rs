//! Ignore-rule loading and matching.
//!
//! Rules come from a gitignore-format file at the scan root. Every rule set
//! also carries an implicit `.git/` exclusion that the file cannot override.
//! Matching is delegated to [`ignore::gitignore::Gitignore`], which implements
//! the gitignore contract: later patterns win, `!` re-includes, a trailing `/`
//! restricts a pattern to directories, `**` spans segments, and patterns
//! without a `/` match at any depth.

use crate::error::TreeError;
use crate::models::{ScanConfig, VCS_DIR_NAME};
use camino::{Utf8Path, Utf8PathBuf};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::Path;

/// A single matchable pattern and the ignore-file line it came from.
///
/// Line 0 marks the implicit `.git/` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern {
    pub line: usize,
    pub glob: String,
}

/// Parsed contents of an ignore-rule file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRuleSet {
    /// Patterns in file order, always starting with the `.git/` rule
    pub patterns: Vec<IgnorePattern>,
    /// Every raw line of the file, comments and blanks included
    pub display_lines: Vec<String>,
}

impl IgnoreRuleSet {
    /// Rule set that excludes only the version-control directory.
    pub fn vcs_only() -> Self {
        Self {
            patterns: vec![IgnorePattern {
                line: 0,
                glob: format!("{}/", VCS_DIR_NAME),
            }],
            display_lines: Vec::new(),
        }
    }

    /// Parse ignore-file text.
    ///
    /// Lines are kept verbatim for display. Stripped lines that are empty or
    /// start with `#` are not fed to the matcher.
    pub fn parse(contents: &str) -> Self {
        let mut rule_set = Self::vcs_only();

        for (index, line) in contents.lines().enumerate() {
            rule_set.display_lines.push(line.to_string());

            let stripped = line.trim();
            if !stripped.is_empty() && !stripped.starts_with('#') {
                rule_set.patterns.push(IgnorePattern {
                    line: index + 1,
                    glob: stripped.to_string(),
                });
            }
        }

        rule_set
    }
}

/// Compiled ignore rules bound to a scan root.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    root: Utf8PathBuf,
    matcher: Gitignore,
    rule_set: IgnoreRuleSet,
}

impl IgnoreRules {
    /// Load the rules for a scan.
    ///
    /// A missing ignore file is not an error; it simply contributes no
    /// patterns. With `use_gitignore` off the file is not read at all.
    pub fn load(config: &ScanConfig) -> Result<Self, TreeError> {
        if !config.use_gitignore {
            tracing::info!("Ignore rules disabled, excluding only {}", VCS_DIR_NAME);
            return Self::compile(&config.root, IgnoreRuleSet::vcs_only());
        }

        let ignore_path = config.ignore_file_path();
        if !ignore_path.exists() {
            tracing::info!("No ignore file at {}, excluding only {}", ignore_path, VCS_DIR_NAME);
            return Self::compile(&config.root, IgnoreRuleSet::vcs_only());
        }

        let contents =
            fs::read_to_string(&ignore_path).map_err(|source| TreeError::IgnoreFileRead {
                path: ignore_path.clone(),
                source,
            })?;

        let rule_set = IgnoreRuleSet::parse(&contents);
        tracing::info!(
            "Loaded {} ignore patterns from {}",
            rule_set.patterns.len() - 1,
            ignore_path
        );

        Self::compile(&config.root, rule_set)
    }

    /// Compile a parsed rule set against `root`.
    pub fn compile(root: &Utf8Path, rule_set: IgnoreRuleSet) -> Result<Self, TreeError> {
        let mut builder = GitignoreBuilder::new(root.as_std_path());

        for pattern in &rule_set.patterns {
            builder
                .add_line(None, &pattern.glob)
                .map_err(|source| TreeError::InvalidPattern {
                    line: pattern.line,
                    pattern: pattern.glob.clone(),
                    source,
                })?;
        }

        Ok(Self {
            root: root.to_path_buf(),
            matcher: builder.build()?,
            rule_set,
        })
    }

    /// Decide whether `path` is excluded from the scan.
    ///
    /// Any `.git` segment below the root excludes outright. Otherwise the path
    /// relative to the root, with `/` separators, is matched against the
    /// patterns; a path under an excluded directory is excluded as well.
    pub fn is_excluded(&self, path: &Utf8Path, is_dir: bool) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };

        if relative.components().any(|c| c.as_str() == VCS_DIR_NAME) {
            return true;
        }

        let normalized = relative.as_str().replace('\\', "/");
        if normalized.is_empty() {
            return false;
        }

        self.matcher
            .matched_path_or_any_parents(Path::new(&normalized), is_dir)
            .is_ignore()
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Raw ignore-file lines for the report header. Empty when rules are off.
    pub fn display_lines(&self) -> &[String] {
        &self.rule_set.display_lines
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.rule_set.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rules(contents: &str) -> IgnoreRules {
        IgnoreRules::compile(Utf8Path::new("/project"), IgnoreRuleSet::parse(contents)).unwrap()
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let rule_set = IgnoreRuleSet::parse("# build output\n\ndist/\n  *.log  \n");

        let globs: Vec<&str> = rule_set.patterns.iter().map(|p| p.glob.as_str()).collect();
        assert_eq!(globs, vec![".git/", "dist/", "*.log"]);
        assert_eq!(rule_set.patterns[2].line, 4);
        assert_eq!(
            rule_set.display_lines,
            vec!["# build output", "", "dist/", "  *.log  "]
        );
    }

    #[test]
    fn test_parse_handles_crlf() {
        let rule_set = IgnoreRuleSet::parse("node_modules\r\n*.tmp\r\n");
        assert_eq!(rule_set.display_lines, vec!["node_modules", "*.tmp"]);
        assert_eq!(rule_set.patterns.len(), 3);
    }

    #[test]
    fn test_vcs_dir_always_excluded() {
        let rules = rules("");
        assert!(rules.is_excluded(Utf8Path::new("/project/.git"), true));
        assert!(rules.is_excluded(Utf8Path::new("/project/.git/HEAD"), false));
        assert!(rules.is_excluded(Utf8Path::new("/project/vendor/.git/config"), false));
        assert!(!rules.is_excluded(Utf8Path::new("/project/.gitignore"), false));
    }

    #[test]
    fn test_negation_reincludes() {
        let rules = rules("*.log\n!keep.log\n");
        assert!(rules.is_excluded(Utf8Path::new("/project/debug.log"), false));
        assert!(rules.is_excluded(Utf8Path::new("/project/src/trace.log"), false));
        assert!(!rules.is_excluded(Utf8Path::new("/project/keep.log"), false));
    }

    #[test]
    fn test_later_pattern_wins() {
        let rules = rules("!keep.log\n*.log\n");
        assert!(rules.is_excluded(Utf8Path::new("/project/keep.log"), false));
    }

    #[test]
    fn test_trailing_slash_matches_directories_only() {
        let rules = rules("build/\n");
        assert!(rules.is_excluded(Utf8Path::new("/project/build"), true));
        assert!(!rules.is_excluded(Utf8Path::new("/project/build"), false));
        assert!(rules.is_excluded(Utf8Path::new("/project/build/out.bin"), false));
    }

    #[test]
    fn test_slash_anchors_pattern() {
        let rules = rules("docs/*.md\n");
        assert!(rules.is_excluded(Utf8Path::new("/project/docs/intro.md"), false));
        assert!(!rules.is_excluded(Utf8Path::new("/project/src/docs/intro.md"), false));
        assert!(!rules.is_excluded(Utf8Path::new("/project/docs/nested/intro.md"), false));
    }

    #[test]
    fn test_double_star_spans_segments() {
        let rules = rules("assets/**/*.png\n");
        assert!(rules.is_excluded(Utf8Path::new("/project/assets/a/b/logo.png"), false));
        assert!(rules.is_excluded(Utf8Path::new("/project/assets/logo.png"), false));
        assert!(!rules.is_excluded(Utf8Path::new("/project/logo.png"), false));
    }

    #[test]
    fn test_character_class_and_question_mark() {
        let rules = rules("file?.[ch]\n");
        assert!(rules.is_excluded(Utf8Path::new("/project/file1.c"), false));
        assert!(rules.is_excluded(Utf8Path::new("/project/lib/fileA.h"), false));
        assert!(!rules.is_excluded(Utf8Path::new("/project/file10.c"), false));
        assert!(!rules.is_excluded(Utf8Path::new("/project/file1.rs"), false));
    }

    #[test]
    fn test_path_outside_root_is_kept() {
        let rules = rules("*\n");
        assert!(!rules.is_excluded(Utf8Path::new("/elsewhere/file.txt"), false));
    }

    #[test]
    fn test_invalid_pattern_reports_line() {
        let result =
            IgnoreRules::compile(Utf8Path::new("/project"), IgnoreRuleSet::parse("ok\nsrc/[abc\n"));
        match result {
            Err(TreeError::InvalidPattern { line, pattern, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(pattern, "src/[abc");
            }
            other => panic!("expected invalid pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reads_configured_ignore_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        fs::write(root.join(".treeignore"), "# local\ndist/\n").unwrap();
        fs::write(root.join(".gitignore"), "*.rs\n").unwrap();

        let config = ScanConfig::new(&root).ignore_file_name(".treeignore");
        let rules = IgnoreRules::load(&config).unwrap();

        let globs: Vec<(usize, &str)> = rules
            .patterns()
            .iter()
            .map(|p| (p.line, p.glob.as_str()))
            .collect();
        assert_eq!(globs, vec![(0, ".git/"), (2, "dist/")]);
        assert_eq!(rules.display_lines(), ["# local", "dist/"]);
        assert!(!rules.is_excluded(&root.join("main.rs"), false));
    }

    #[test]
    fn test_load_disabled_skips_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        fs::write(root.join(".gitignore"), "*.rs\n").unwrap();

        let rules = IgnoreRules::load(&ScanConfig::new(&root).use_gitignore(false)).unwrap();

        assert_eq!(rules.patterns().len(), 1);
        assert!(rules.display_lines().is_empty());
        assert!(!rules.is_excluded(&root.join("main.rs"), false));
    }
}
