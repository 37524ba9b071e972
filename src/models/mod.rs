//! Data models for panelfix.
//!
//! This module contains the core data structures shared by both fixers:
//! - [`FixPlan`]: The full plan loaded from `panelfix.yaml`, with built-in defaults
//! - [`RepoNamesPlan`] / [`MealNamesPlan`]: Per-fixer sections of the plan
//! - [`LiteralRule`]: A single exact-text substitution
//! - [`RunReport`] / [`FileOutcome`] / [`FileStatus`]: Per-file outcomes of a run
//!
//! Plan structs derive `Serialize`/`Deserialize` for YAML persistence; the
//! report types are runtime-only and rendered to console lines.

pub mod plan;
pub mod report;

pub use plan::{FixPlan, LiteralRule, MealNamesPlan, RepoNamesPlan};
pub use report::{FileOutcome, FileStatus, RunReport};
