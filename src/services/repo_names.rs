//! Repo-name migration across the configured web asset files.
//!
//! The panel pages embed the GitHub repository name in several literal
//! forms (raw CDN URLs, a `REPO_NAME` constant, and `repo:` config keys).
//! This module applies the exact-text substitutions from the plan to each
//! listed file, rewriting a file only when its content actually changed.
//!
//! # Examples
//!
//! ```ignore
//! use panelfix::models::RepoNamesPlan;
//! use panelfix::services::repo_names;
//! use camino::Utf8Path;
//!
//! let plan = RepoNamesPlan::default();
//! let report = repo_names::fix_files(&plan, Utf8Path::new("."), false);
//! println!("{}", report.summary());
//! ```

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;

use crate::models::{FileStatus, LiteralRule, RepoNamesPlan, RunReport};

/// Applies every substitution rule to the text, in plan order.
///
/// Each rule replaces all occurrences of its `find` string. Text outside
/// the matched spans passes through byte for byte, so line endings and
/// indentation survive untouched.
///
/// # Arguments
///
/// * `text` - Full file content to transform
/// * `rules` - Substitutions to apply, earliest first
///
/// # Returns
///
/// The transformed text; equal to the input when no rule matched
pub fn apply_rules(text: &str, rules: &[LiteralRule]) -> String {
    let mut result = text.to_string();

    for rule in rules {
        result = result.replace(&rule.find, &rule.replace);
    }

    result
}

/// Applies the plan rules to a single file, rewriting it only on change.
///
/// # Arguments
///
/// * `path` - Resolved path of the target file
/// * `rules` - Substitutions to apply
/// * `dry_run` - When true, report the would-be status without writing
///
/// # Returns
///
/// [`FileStatus::Updated`] when at least one rule matched, otherwise
/// [`FileStatus::Unchanged`]
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 or written back
pub fn fix_file(path: &Utf8Path, rules: &[LiteralRule], dry_run: bool) -> Result<FileStatus> {
    let original = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;

    let updated = apply_rules(&original, rules);
    if updated == original {
        tracing::debug!("No changes needed: {}", path);
        return Ok(FileStatus::Unchanged);
    }

    if dry_run {
        tracing::info!("Would update repo names in {}", path);
        return Ok(FileStatus::Updated);
    }

    fs::write(path, &updated).with_context(|| format!("Failed to write {}", path))?;
    tracing::info!("Updated repo names in {}", path);
    Ok(FileStatus::Updated)
}

/// Runs the migration over every file named in the plan.
///
/// Files are processed in list order. A missing file or a per-file I/O
/// error is recorded in the report and never aborts the run; the
/// remaining files are still processed.
///
/// # Arguments
///
/// * `plan` - File list and substitution rules
/// * `base_dir` - Directory the file names are resolved against
/// * `dry_run` - When true, no file is written
pub fn fix_files(plan: &RepoNamesPlan, base_dir: &Utf8Path, dry_run: bool) -> RunReport {
    let mut report = RunReport::new();

    for name in &plan.files {
        let path = base_dir.join(name);

        if !path.exists() {
            tracing::warn!("File not found: {}", path);
            report.record(name, FileStatus::Missing);
            continue;
        }

        match fix_file(&path, &plan.rules, dry_run) {
            Ok(status) => report.record(name, status),
            Err(e) => {
                tracing::error!("Error processing {}: {:#}", path, e);
                report.record_failure(name, format!("{:#}", e));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn default_rules() -> Vec<LiteralRule> {
        RepoNamesPlan::default().rules
    }

    fn temp_base() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let base = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        (dir, base)
    }

    #[test]
    fn test_apply_rules_replaces_all_occurrences() {
        let rules = vec![LiteralRule::new("old", "new")];
        let result = apply_rules("old old old", &rules);
        assert_eq!(result, "new new new");
    }

    #[test]
    fn test_apply_rules_without_match_returns_input() {
        let text = "nothing relevant here";
        assert_eq!(apply_rules(text, &default_rules()), text);
    }

    #[test]
    fn test_apply_rules_is_idempotent() {
        let text = "src = 'cdn/gh/mustafasacar35/lipodem-takip-paneli/data.json'\n\
                    const REPO_NAME = 'lipodem-takip-paneli';\n";
        let once = apply_rules(text, &default_rules());
        let twice = apply_rules(&once, &default_rules());
        assert_eq!(once, twice);
        assert!(once.contains("lipodem-takip-paneli-2.2/"));
    }

    #[test]
    fn test_fix_file_preserves_crlf() {
        let (_dir, base) = temp_base();
        let path = base.join("page.html");
        fs::write(&path, "a\r\nREPO_NAME = 'lipodem-takip-paneli'\r\nb\r\n").unwrap();

        let status = fix_file(&path, &default_rules(), false).unwrap();

        assert_eq!(status, FileStatus::Updated);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a\r\nREPO_NAME = 'lipodem-takip-paneli-2.2'\r\nb\r\n"
        );
    }

    #[test]
    fn test_fix_file_dry_run_writes_nothing() {
        let (_dir, base) = temp_base();
        let path = base.join("page.html");
        let content = "repo: 'lipodem-takip-paneli'";
        fs::write(&path, content).unwrap();

        let status = fix_file(&path, &default_rules(), true).unwrap();

        assert_eq!(status, FileStatus::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_fix_files_records_missing() {
        let (_dir, base) = temp_base();
        let plan = RepoNamesPlan {
            files: vec!["absent.html".to_string()],
            rules: default_rules(),
        };

        let report = fix_files(&plan, &base, false);

        assert_eq!(report.counts(), (0, 0, 1, 0));
    }

    #[test]
    fn test_fix_files_continues_after_failure() {
        let (_dir, base) = temp_base();
        // A directory where a file is expected makes the read fail.
        fs::create_dir(base.join("broken.js")).unwrap();
        fs::write(base.join("good.js"), "repo: \"lipodem-takip-paneli\"").unwrap();

        let plan = RepoNamesPlan {
            files: vec!["broken.js".to_string(), "good.js".to_string()],
            rules: default_rules(),
        };
        let report = fix_files(&plan, &base, false);

        assert_eq!(report.counts(), (1, 0, 0, 1));
        assert!(
            fs::read_to_string(base.join("good.js"))
                .unwrap()
                .contains("lipodem-takip-paneli-2.2")
        );
    }
}
