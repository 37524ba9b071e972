use crate::models::FixPlan;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Plan manager for loading and saving the YAML fix plan.
///
/// Manages a single file (default `panelfix.yaml`) describing the base
/// directory, the repo-name file list and rules, and the meal table. The
/// plan file is optional: when it does not exist, the compiled-in defaults
/// reproduce the original hard-coded behavior.
#[derive(Debug, Clone)]
pub struct PlanManager {
    plan_path: Utf8PathBuf,
}

impl PlanManager {
    /// Create a new PlanManager for the given plan file path.
    ///
    /// # Arguments
    /// * `plan_path` - Path of the YAML plan file (e.g., "panelfix.yaml")
    pub fn new<P: AsRef<Utf8Path>>(plan_path: P) -> Self {
        Self {
            plan_path: plan_path.as_ref().to_path_buf(),
        }
    }

    /// Load the fix plan.
    ///
    /// # Returns
    /// The loaded FixPlan, or the built-in defaults if the file doesn't exist
    pub fn load_plan(&self) -> Result<FixPlan> {
        if !self.plan_path.exists() {
            tracing::warn!(
                "Plan file not found at {}, using built-in defaults",
                self.plan_path
            );
            return Ok(FixPlan::default());
        }

        let file_contents = fs::read_to_string(&self.plan_path)
            .with_context(|| format!("Failed to read plan: {}", self.plan_path))?;

        let plan: FixPlan = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse plan: {}", self.plan_path))?;

        tracing::info!("Loaded fix plan from {}", self.plan_path);
        Ok(plan)
    }

    /// Save the fix plan.
    ///
    /// # Arguments
    /// * `plan` - The FixPlan to save
    pub fn save_plan(&self, plan: &FixPlan) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(plan).context("Failed to serialize plan to YAML")?;

        if let Some(parent) = self.plan_path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create plan directory: {}", parent))?;
            }
        }

        fs::write(&self.plan_path, yaml_string)
            .with_context(|| format!("Failed to write plan: {}", self.plan_path))?;

        tracing::info!("Saved fix plan to {}", self.plan_path);
        Ok(())
    }

    /// Get the plan file path.
    pub fn plan_path(&self) -> &Utf8Path {
        &self.plan_path
    }
}
