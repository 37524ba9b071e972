//! Integration tests for the mealNames block replacer
//!
//! These tests verify:
//! - Replacement of the declaration inside a realistic nutrition page
//! - Fail-fast behavior (no write) when the declaration is absent
//! - First-match-only semantics against multiple declarations
//! - Byte-exact canonical output including the escape sequences

use camino::Utf8PathBuf;
use panelfix::MealNamesService;
use panelfix::models::MealNamesPlan;
use std::fs;
use tempfile::TempDir;

/// The exact replacement text the original page receives.
const CANONICAL_BLOCK: &str = concat!(
    "const mealNames = {\n",
    "                    sabah: 'Sabah',\n",
    "                    'ara ogun': 'Ara Ogun',\n",
    "                    'ara ogun 1': 'Ara Ogun',\n",
    "                    'ara ogun 2': 'Ara Ogun',\n",
    "                    'ara \\u00f6\\u011f\\u00fcn': 'Ara Ogun',\n",
    "                    ara: 'Ara Ogun',\n",
    "                    ogle: 'Oglen',\n",
    "                    '\\u00f6\\u011fle': 'Oglen',\n",
    "                    '\\u00f6\\u011flen': 'Oglen',\n",
    "                    ikindi: 'Ikindi',\n",
    "                    '\\u0131kindi': 'Ikindi',\n",
    "                    aksam: 'Aksam',\n",
    "                    'ak\\u015fam': 'Aksam',\n",
    "                    gece: 'Gece'\n",
    "                };"
);

/// Nutrition page fragment with a drifted mealNames declaration.
const NUTRITION_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Beslenme Takibi</title></head>
<body>
<script>
    function renderMeals(entries) {
        const mealNames = {
            sabah: 'Sabah',
            ogle: 'Öğle',
            aksam: 'Akşam'
        };
        return entries.map(m => mealNames[m.key] || m.key);
    }
</script>
</body>
</html>
"#;

fn sandbox() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().unwrap();
    let base = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
    (dir, base)
}

#[test]
fn test_replaces_declaration_in_page() {
    let (_dir, base) = sandbox();
    let target = base.join("patient_nutrition.html");
    fs::write(&target, NUTRITION_PAGE).unwrap();

    let service = MealNamesService::new();
    service
        .replace_in_file(&target, &MealNamesPlan::default().entries, false)
        .unwrap();

    let updated = fs::read_to_string(&target).unwrap();
    assert!(updated.contains(CANONICAL_BLOCK));
    assert!(!updated.contains("Öğle"));
    // Everything around the declaration survives.
    assert!(updated.starts_with("<!DOCTYPE html>\n"));
    assert!(updated.contains("function renderMeals(entries) {"));
    assert!(updated.ends_with("</body>\n</html>\n"));
}

#[test]
fn test_missing_declaration_is_fatal_without_write() {
    let (_dir, base) = sandbox();
    let target = base.join("patient_nutrition.html");
    let content = "<html><body>no script here</body></html>\n";
    fs::write(&target, content).unwrap();

    let service = MealNamesService::new();
    let err = service
        .replace_in_file(&target, &MealNamesPlan::default().entries, false)
        .unwrap_err();

    assert!(format!("{:#}", err).contains("mealNames block not found"));
    // The hard failure happens before any write.
    assert_eq!(fs::read_to_string(&target).unwrap(), content);
}

#[test]
fn test_missing_file_is_fatal() {
    let (_dir, base) = sandbox();
    let service = MealNamesService::new();

    let result = service.replace_in_file(
        &base.join("not_on_disk.html"),
        &MealNamesPlan::default().entries,
        false,
    );

    assert!(result.is_err());
}

#[test]
fn test_first_declaration_only() {
    let (_dir, base) = sandbox();
    let target = base.join("page.html");
    fs::write(
        &target,
        "const mealNames = {a: 'A'};\nconst mealNames = {b: 'B'};\n",
    )
    .unwrap();

    let service = MealNamesService::new();
    service
        .replace_in_file(&target, &MealNamesPlan::default().entries, false)
        .unwrap();

    let updated = fs::read_to_string(&target).unwrap();
    assert!(updated.ends_with("const mealNames = {b: 'B'};\n"));
    assert_eq!(updated.matches("gece: 'Gece'").count(), 1);
}

#[test]
fn test_replacement_bytes_are_exact() {
    let (_dir, base) = sandbox();
    let target = base.join("page.html");
    // The whole file is one declaration, so afterwards the file must equal
    // the canonical block exactly.
    fs::write(&target, "const mealNames = {x: 'y'};").unwrap();

    let service = MealNamesService::new();
    service
        .replace_in_file(&target, &MealNamesPlan::default().entries, false)
        .unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), CANONICAL_BLOCK);
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let (_dir, base) = sandbox();
    let target = base.join("patient_nutrition.html");
    fs::write(&target, NUTRITION_PAGE).unwrap();

    let service = MealNamesService::new();
    service
        .replace_in_file(&target, &MealNamesPlan::default().entries, true)
        .unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), NUTRITION_PAGE);
}
