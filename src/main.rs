//! panelfix - Batch text fixes for the Lipodem Takip Paneli web assets
//!
//! Main entry point for the command-line tool.
//!
//! # Overview
//!
//! This binary crate provides the CLI frontend for two maintenance jobs:
//! - `repo-names`: migrate the hard-coded GitHub repository name across the
//!   listed panel files
//! - `meal-names`: replace the `mealNames` object literal in the nutrition
//!   page with the canonical meal table
//! - `init-plan`: write the built-in default plan as an editable scaffold
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/ (daily rotation, stderr console layer)
//! 2. Load the YAML plan, or the built-in defaults when no plan file exists
//! 3. Run the selected fixer against the resolved base directory
//! 4. Print per-file report lines and a summary on stdout
//!
//! # Exit Status
//!
//! `repo-names` always completes the whole batch and exits 0; per-file
//! problems show up as `failed` report lines. `meal-names` exits non-zero
//! when the declaration is absent, leaving the target file untouched.

use anyhow::{Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use panelfix::services::{MealNamesService, repo_names};
use panelfix::{APP_NAME, FixPlan, PlanManager, VERSION};

const DEFAULT_PLAN_PATH: &str = "panelfix.yaml";

#[derive(Parser, Debug)]
#[command(
    name = "panelfix",
    version,
    about = "Batch text fixes for the Lipodem Takip Paneli web assets"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory the target files are resolved against (overrides the plan)"
    )]
    base_dir: Option<Utf8PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_PLAN_PATH,
        help = "Path of the YAML fix plan; a missing file means built-in defaults"
    )]
    plan: Utf8PathBuf,
    #[arg(
        long,
        global = true,
        default_value_t = false,
        help = "Report what would change without writing any file"
    )]
    dry_run: bool,
    #[arg(long, global = true, default_value_t = false, help = "Enable debug logging")]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Migrate hard-coded repository names across the listed panel files
    RepoNames,
    /// Replace the mealNames object literal with the canonical meal table
    MealNames,
    /// Write the built-in default plan to the plan path for editing
    InitPlan,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging with rotating file output and an stderr console layer
    let _guard = panelfix::logging::setup_logging("logs", "panelfix", cli.debug, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let manager = PlanManager::new(&cli.plan);

    match cli.command {
        Commands::RepoNames => {
            let plan = manager.load_plan()?;
            let base_dir = resolve_base_dir(&cli, &plan);
            run_repo_names(&plan, &base_dir, cli.dry_run);
        }
        Commands::MealNames => {
            let plan = manager.load_plan()?;
            let base_dir = resolve_base_dir(&cli, &plan);
            run_meal_names(&plan, &base_dir, cli.dry_run)?;
        }
        Commands::InitPlan => {
            run_init_plan(&manager)?;
        }
    }

    tracing::info!("Run finished");
    Ok(())
}

/// The --base-dir flag wins over the plan's base_dir.
fn resolve_base_dir(cli: &Cli, plan: &FixPlan) -> Utf8PathBuf {
    match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => Utf8PathBuf::from(&plan.base_dir),
    }
}

/// Run the repo-name migration and print the report.
///
/// Per-file problems are already part of the report; the batch itself never
/// fails, matching the fixer's fault-isolation contract.
fn run_repo_names(plan: &FixPlan, base_dir: &Utf8Path, dry_run: bool) {
    if dry_run {
        println!("Dry run, no files will be written");
    }

    let report = repo_names::fix_files(&plan.repo_names, base_dir, dry_run);

    for outcome in report.outcomes() {
        println!("{}", outcome.console_line());
    }
    println!("{}", report.summary());
    println!("Repo name updates complete");
}

/// Run the mealNames replacement; a missing declaration is a hard error.
fn run_meal_names(plan: &FixPlan, base_dir: &Utf8Path, dry_run: bool) -> Result<()> {
    let target = base_dir.join(&plan.meal_names.file);
    let service = MealNamesService::new();

    service.replace_in_file(&target, &plan.meal_names.entries, dry_run)?;

    if dry_run {
        println!("mealNames block found in {} (dry run, not written)", target);
    } else {
        println!("mealNames block updated in {}", target);
    }

    Ok(())
}

/// Write the default plan so it can be edited and reused via --plan.
fn run_init_plan(manager: &PlanManager) -> Result<()> {
    if manager.plan_path().exists() {
        return Err(anyhow!("Plan file already exists: {}", manager.plan_path()));
    }

    manager.save_plan(&FixPlan::default())?;
    println!("Wrote default plan to {}", manager.plan_path());

    Ok(())
}
