// panelfix - Batch text fixes for the Lipodem Takip Paneli web assets
//
// This is the library crate containing the core business logic and data structures.
// The binary crate (main.rs) provides the CLI entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::PlanManager;
pub use models::{FileOutcome, FileStatus, FixPlan, LiteralRule, RunReport};
pub use services::MealNamesService;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
