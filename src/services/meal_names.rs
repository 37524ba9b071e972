use anyhow::{Context, Result};
use camino::Utf8Path;
use indexmap::IndexMap;
use regex::Regex;
use std::fs;
use thiserror::Error;

// Indentation matches the script section of patient_nutrition.html where
// the object literal lives.
const ENTRY_INDENT: &str = "                    ";
const CLOSE_INDENT: &str = "                ";

/// Errors that can occur during the mealNames replacement
#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("mealNames block not found")]
    BlockNotFound,
}

/// Service for replacing the `mealNames` object literal in the nutrition page
///
/// The page declares a JavaScript mapping from raw meal keys (as stored in
/// patient data) to display labels. Historic edits left the mapping with
/// drifting spellings, so this service swaps the whole declaration for a
/// canonical table rendered from the plan.
///
/// # Fields
///
/// The service pre-compiles its regex pattern at construction time:
///
/// - `block_pattern`: Matches the declaration from `const mealNames = {`
///   up to the first `};`
///   - Pattern: `(?s)const mealNames = \{.*?\};`
///   - Non-greedy, with `.` matching newlines, so only one declaration is
///     consumed no matter what follows it
pub struct MealNamesService {
    /// Regex locating the mealNames object literal
    block_pattern: Regex,
}

impl MealNamesService {
    /// Create a new MealNamesService with the compiled block pattern
    pub fn new() -> Self {
        Self {
            block_pattern: Regex::new(r"(?s)const mealNames = \{.*?\};")
                .expect("Invalid mealNames block regex"),
        }
    }

    /// Render the canonical `const mealNames = {...};` declaration.
    ///
    /// Entries appear in map order. Keys that are valid JavaScript
    /// identifiers stay bare; all others (spaces, escape sequences) are
    /// single-quoted. Values are always single-quoted.
    ///
    /// # Arguments
    /// * `entries` - Mapping from raw meal keys to display labels
    pub fn render_block(&self, entries: &IndexMap<String, String>) -> String {
        let mut lines = Vec::with_capacity(entries.len());

        for (key, label) in entries {
            let key = if is_js_identifier(key) {
                key.clone()
            } else {
                format!("'{}'", key)
            };
            lines.push(format!("{}{}: '{}'", ENTRY_INDENT, key, label));
        }

        format!(
            "const mealNames = {{\n{}\n{}}};",
            lines.join(",\n"),
            CLOSE_INDENT
        )
    }

    /// Replace the first mealNames declaration in the text.
    ///
    /// Only the earliest match is touched; any later declaration and all
    /// surrounding text pass through byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`ReplaceError::BlockNotFound`] when the text contains no
    /// mealNames declaration
    pub fn replace_block(
        &self,
        text: &str,
        entries: &IndexMap<String, String>,
    ) -> Result<String, ReplaceError> {
        let m = self.block_pattern.find(text).ok_or(ReplaceError::BlockNotFound)?;

        let mut result = String::with_capacity(text.len());
        result.push_str(&text[..m.start()]);
        result.push_str(&self.render_block(entries));
        result.push_str(&text[m.end()..]);

        Ok(result)
    }

    /// Replace the mealNames declaration in a file on disk.
    ///
    /// The file is read before anything is written, and a missing block
    /// aborts before the write, so a failed run leaves the file exactly as
    /// it was.
    ///
    /// # Arguments
    /// * `path` - Resolved path of the target page
    /// * `entries` - Mapping from raw meal keys to display labels
    /// * `dry_run` - When true, verify the block is present without writing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8, contains no
    /// mealNames declaration, or cannot be written back
    pub fn replace_in_file(
        &self,
        path: &Utf8Path,
        entries: &IndexMap<String, String>,
        dry_run: bool,
    ) -> Result<()> {
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;

        let updated = self
            .replace_block(&text, entries)
            .with_context(|| format!("Cannot update {}", path))?;

        if dry_run {
            tracing::info!("Dry run, mealNames block located in {}", path);
            return Ok(());
        }

        fs::write(path, updated).with_context(|| format!("Failed to write {}", path))?;
        tracing::info!("Replaced mealNames block in {}", path);

        Ok(())
    }
}

impl Default for MealNamesService {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether a key can appear unquoted in a JavaScript object literal.
///
/// ASCII-only on purpose; anything else gets quoted, which is always valid.
fn is_js_identifier(key: &str) -> bool {
    let mut chars = key.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
