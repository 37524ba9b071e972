use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fix plan from panelfix.yaml
///
/// Describes where the web assets live and what each fixer should do to
/// them. Every field has a built-in default, so the tool runs without a
/// plan file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixPlan {
    /// Directory the target file names are resolved against.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    #[serde(default)]
    pub repo_names: RepoNamesPlan,

    #[serde(default)]
    pub meal_names: MealNamesPlan,
}

/// Target files and literal substitutions for the repo-name migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoNamesPlan {
    #[serde(default = "default_fix_files")]
    pub files: Vec<String>,

    #[serde(default = "default_rename_rules")]
    pub rules: Vec<LiteralRule>,
}

/// One exact-text substitution. Every occurrence of `find` becomes
/// `replace`; no pattern syntax is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralRule {
    pub find: String,
    pub replace: String,
}

impl LiteralRule {
    pub fn new(find: &str, replace: &str) -> Self {
        Self {
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }
}

/// Target file and canonical table for the mealNames replacement.
///
/// The entries map raw meal keys as they appear in patient data to their
/// display labels. Insertion order is the order the rendered JavaScript
/// object lists them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealNamesPlan {
    #[serde(default = "default_meal_file")]
    pub file: String,

    #[serde(default = "default_meal_entries")]
    pub entries: IndexMap<String, String>,
}

impl Default for FixPlan {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            repo_names: RepoNamesPlan::default(),
            meal_names: MealNamesPlan::default(),
        }
    }
}

impl Default for RepoNamesPlan {
    fn default() -> Self {
        Self {
            files: default_fix_files(),
            rules: default_rename_rules(),
        }
    }
}

impl Default for MealNamesPlan {
    fn default() -> Self {
        Self {
            file: default_meal_file(),
            entries: default_meal_entries(),
        }
    }
}

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_fix_files() -> Vec<String> {
    vec![
        "patient_nutrition.html".to_string(),
        "data-access-layer.js".to_string(),
        "device-manager.js".to_string(),
        "admin_patients.html".to_string(),
        "admin_settings.html".to_string(),
        "eslestirme.html".to_string(),
    ]
}

fn default_rename_rules() -> Vec<LiteralRule> {
    vec![
        LiteralRule::new(
            "mustafasacar35/lipodem-takip-paneli/",
            "mustafasacar35/lipodem-takip-paneli-2.2/",
        ),
        LiteralRule::new(
            "REPO_NAME = 'lipodem-takip-paneli'",
            "REPO_NAME = 'lipodem-takip-paneli-2.2'",
        ),
        LiteralRule::new(
            "repo: \"lipodem-takip-paneli\"",
            "repo: \"lipodem-takip-paneli-2.2\"",
        ),
        LiteralRule::new(
            "repo: 'lipodem-takip-paneli'",
            "repo: 'lipodem-takip-paneli-2.2'",
        ),
    ]
}

fn default_meal_file() -> String {
    "patient_nutrition.html".to_string()
}

// Keys cover the spelling variants seen in stored patient data, including
// the Turkish forms kept as JavaScript \uXXXX escapes so the rendered
// block stays pure ASCII.
fn default_meal_entries() -> IndexMap<String, String> {
    let mut entries = IndexMap::new();
    entries.insert("sabah".to_string(), "Sabah".to_string());
    entries.insert("ara ogun".to_string(), "Ara Ogun".to_string());
    entries.insert("ara ogun 1".to_string(), "Ara Ogun".to_string());
    entries.insert("ara ogun 2".to_string(), "Ara Ogun".to_string());
    entries.insert("ara \\u00f6\\u011f\\u00fcn".to_string(), "Ara Ogun".to_string());
    entries.insert("ara".to_string(), "Ara Ogun".to_string());
    entries.insert("ogle".to_string(), "Oglen".to_string());
    entries.insert("\\u00f6\\u011fle".to_string(), "Oglen".to_string());
    entries.insert("\\u00f6\\u011flen".to_string(), "Oglen".to_string());
    entries.insert("ikindi".to_string(), "Ikindi".to_string());
    entries.insert("\\u0131kindi".to_string(), "Ikindi".to_string());
    entries.insert("aksam".to_string(), "Aksam".to_string());
    entries.insert("ak\\u015fam".to_string(), "Aksam".to_string());
    entries.insert("gece".to_string(), "Gece".to_string());
    entries
}
