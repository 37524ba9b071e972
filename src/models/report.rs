/// Outcome of processing one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Substitutions matched and the file was rewritten.
    Updated,
    /// No rule matched; the file was left untouched.
    Unchanged,
    /// The file was not present under the base directory.
    Missing,
    /// Reading or writing the file failed.
    Failed,
}

impl FileStatus {
    /// Lowercase label used in console report lines.
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Updated => "updated",
            FileStatus::Unchanged => "unchanged",
            FileStatus::Missing => "missing",
            FileStatus::Failed => "failed",
        }
    }
}

/// One row of the run report: a file, what happened to it, and the error
/// text when it failed.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub file: String,
    pub status: FileStatus,
    pub message: Option<String>,
}

impl FileOutcome {
    /// Console line for this outcome
    pub fn console_line(&self) -> String {
        match &self.message {
            Some(message) => format!("{} {}: {}", self.status.label(), self.file, message),
            None => format!("{} {}", self.status.label(), self.file),
        }
    }
}

/// Accumulated outcomes of a fixer run over the whole file list
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome without an error message
    pub fn record(&mut self, file: &str, status: FileStatus) {
        self.outcomes.push(FileOutcome {
            file: file.to_string(),
            status,
            message: None,
        });
    }

    /// Record a failed file along with the stringified error
    pub fn record_failure(&mut self, file: &str, message: String) {
        self.outcomes.push(FileOutcome {
            file: file.to_string(),
            status: FileStatus::Failed,
            message: Some(message),
        });
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Get counts as (updated, unchanged, missing, failed)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.count(FileStatus::Updated),
            self.count(FileStatus::Unchanged),
            self.count(FileStatus::Missing),
            self.count(FileStatus::Failed),
        )
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.status == FileStatus::Failed)
    }

    /// Get a summary string of the run
    pub fn summary(&self) -> String {
        let (updated, unchanged, missing, failed) = self.counts();
        let mut parts = Vec::new();

        if updated > 0 {
            parts.push(format!("{} updated", updated));
        }
        if unchanged > 0 {
            parts.push(format!("{} unchanged", unchanged));
        }
        if missing > 0 {
            parts.push(format!("{} missing", missing));
        }
        if failed > 0 {
            parts.push(format!("{} failed", failed));
        }

        if parts.is_empty() {
            "No files processed".to_string()
        } else {
            parts.join(", ")
        }
    }
}
