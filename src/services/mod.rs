//! Services module - Pure business logic for the panel text fixes.
//!
//! This module contains the core logic for both maintenance jobs. The
//! services are **framework-agnostic** and have no dependencies on the CLI
//! layer, making them testable and reusable.
//!
//! # Components
//!
//! - [`repo_names`]: Literal-substitution migration of the GitHub repository
//!   name across the listed panel files. Processes the whole list, records a
//!   per-file outcome, and keeps going past missing or unreadable files.
//!
//! - [`MealNamesService`]: Replaces the `const mealNames = {...};`
//!   declaration in the nutrition page with the canonical meal table.
//!   Fails hard, without writing, when the declaration is absent.
//!
//! # Design Philosophy
//!
//! The services layer is designed to be:
//! - **Pure**: No side effects beyond file I/O
//! - **Testable**: No hidden dependencies, all inputs are explicit parameters
//! - **Framework-agnostic**: No clap, no console printing, only business logic
//!
//! # Usage Example
//!
//! ```ignore
//! use panelfix::models::FixPlan;
//! use panelfix::services::{repo_names, MealNamesService};
//! use camino::Utf8Path;
//!
//! let plan = FixPlan::default();
//! let base = Utf8Path::new(&plan.base_dir);
//!
//! // Migrate repo names across the file list
//! let report = repo_names::fix_files(&plan.repo_names, base, false);
//! println!("{}", report.summary());
//!
//! // Replace the mealNames declaration
//! let service = MealNamesService::new();
//! service.replace_in_file(
//!     &base.join(&plan.meal_names.file),
//!     &plan.meal_names.entries,
//!     false,
//! )?;
//! ```

pub mod meal_names;
pub mod repo_names;

pub use meal_names::{MealNamesService, ReplaceError};
pub use repo_names::{apply_rules, fix_file, fix_files};
