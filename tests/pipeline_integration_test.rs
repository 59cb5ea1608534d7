mod common;

use degree_audit::catalog::CatalogLoader;
use degree_audit::config::{AuditSettings, SettingsLoader};
use degree_audit::engine::{AnalysisOutcome, Analyzer, CreditSource};
use pretty_assertions::assert_eq;
use std::fs;

fn analyze(major: &str, minor: &str) -> degree_audit::engine::Analysis {
    let dir = common::catalog_dir();
    let settings = AuditSettings::default();
    let store = CatalogLoader::new()
        .load_store(dir.path(), &settings.catalogs)
        .unwrap();
    Analyzer::new(&store, &settings).analyze(major, minor)
}

fn flagged(analysis: &degree_audit::engine::Analysis, course: &str) -> Vec<String> {
    let table = analysis.table().unwrap();
    let (_, row) = table.rows().find(|(_, row)| row.course == course).unwrap();
    table
        .columns
        .iter()
        .filter(|tag| table.flag(row, tag) == Some(true))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_pipeline_row_order_and_sections() {
    let analysis = analyze("Computer Science", "Data Science");
    let table = analysis.table().unwrap();

    let courses: Vec<&str> = table.rows().map(|(_, row)| row.course.as_str()).collect();
    assert_eq!(
        courses,
        vec!["CSCI101", "STAT200", "MATH210", "DATA150ID", "PHIL220", "ARTS310", "HIST330"]
    );

    let labels: Vec<&str> = table.sub_sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "A. Mandatory Core Courses",
            "B. Conditional Core: Choose one methods course",
            "A. General Electives List",
            "B. Conditional Elective: Choose 1",
        ]
    );
    assert_eq!(table.section_boundaries(), vec![1, 3, 4]);
}

#[test]
fn test_full_pipeline_titles_and_credits() {
    let analysis = analyze("Computer Science", "Data Science");
    let table = analysis.table().unwrap();

    let titles: Vec<&str> = table.rows().map(|(_, row)| row.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Intro to Programming",
            "Mandatory",
            "Linear Algebra",
            "Data and Society",
            "Ethics of Information",
            "Visualization",
            "",
        ]
    );

    let credits: Vec<String> = table.rows().map(|(_, row)| row.credit_display()).collect();
    assert_eq!(credits, vec!["4", "3", "3", "1-3", "3", "3", "3"]);

    let (_, data) = table.rows().find(|(_, row)| row.course == "DATA150ID").unwrap();
    assert_eq!(
        data.credit_source,
        CreditSource::Inferred {
            key: "credit hours".to_string()
        }
    );
}

#[test]
fn test_full_pipeline_fulfillment_flags() {
    let analysis = analyze("Computer Science", "Data Science");

    assert_eq!(flagged(&analysis, "CSCI101"), vec!["MQR", "Major_Core"]);
    assert_eq!(flagged(&analysis, "MATH210"), vec!["Major_Core"]);
    assert_eq!(flagged(&analysis, "DATA150ID"), vec!["ID"]);
    assert_eq!(flagged(&analysis, "PHIL220"), vec!["EC", "Lib Art"]);
    assert_eq!(flagged(&analysis, "ARTS310"), vec!["Lib Art", "Adv Lib Art", "ID"]);
    assert_eq!(
        flagged(&analysis, "HIST330"),
        vec!["WCGI", "USED", "Lib Art", "Adv Lib Art"]
    );
}

#[test]
fn test_gened_lookup_is_case_sensitive() {
    // The gen-ed catalog lists "stat200", the minor lists "STAT200"
    let analysis = analyze("Computer Science", "Data Science");
    assert_eq!(flagged(&analysis, "STAT200"), vec!["Major_Elec"]);
}

#[test]
fn test_major_selection_changes_major_columns_only() {
    let analysis = analyze("History", "Data Science");

    assert_eq!(flagged(&analysis, "CSCI101"), vec!["MQR"]);
    assert_eq!(
        flagged(&analysis, "HIST330"),
        vec!["WCGI", "USED", "Lib Art", "Adv Lib Art", "Major_Core"]
    );
}

#[test]
fn test_empty_minor_is_no_courses() {
    let analysis = analyze("Computer Science", "Empty Minor");
    assert_eq!(analysis.outcome, AnalysisOutcome::NoCourses);
    assert!(analysis.table().is_none());
}

#[test]
fn test_unmaterializable_minor() {
    let analysis = analyze("Computer Science", "Capstone Only");
    assert_eq!(analysis.courses, vec!["CAP499"]);
    assert_eq!(analysis.outcome, AnalysisOutcome::Unprocessable);
}

#[test]
fn test_fulfillment_list_matches_extraction() {
    let analysis = analyze("Computer Science", "Data Science");
    let listed: Vec<&str> = analysis
        .fulfillment
        .entries()
        .iter()
        .map(|entry| entry.course.as_str())
        .collect();
    assert_eq!(listed, analysis.courses);
}

#[test]
fn test_settings_restrict_columns() {
    let dir = common::catalog_dir();
    fs::write(
        dir.path().join("degree-audit.yaml"),
        "area_columns: [ID, Major_Core]\nmarker: Y\n",
    )
    .unwrap();

    let settings = SettingsLoader::new().load(None, dir.path()).unwrap();
    let store = CatalogLoader::new()
        .load_store(dir.path(), &settings.catalogs)
        .unwrap();
    let analysis = Analyzer::new(&store, &settings).analyze("Computer Science", "Data Science");

    let table = analysis.table().unwrap();
    assert_eq!(table.columns.len(), 2);
    assert!(table.rows().all(|(_, row)| row.flags.len() == 2));
    assert!(analysis
        .diagnostics
        .iter()
        .any(|d| d.message.starts_with("Areas without a column are not shown")));
}

#[test]
fn test_renamed_catalog_files() {
    let dir = common::catalog_dir();
    fs::rename(dir.path().join("ID.json"), dir.path().join("interdisciplinary.json")).unwrap();
    fs::write(
        dir.path().join("degree-audit.yaml"),
        "catalogs:\n  ID_data: interdisciplinary.json\n",
    )
    .unwrap();

    let settings = SettingsLoader::new().load(None, dir.path()).unwrap();
    let store = CatalogLoader::new()
        .load_store(dir.path(), &settings.catalogs)
        .unwrap();
    assert!(store.interdisciplinary.contains("ARTS310"));
}

#[test]
fn test_reused_loader_tracks_catalog_changes() {
    let dir = common::catalog_dir();
    let settings = AuditSettings::default();
    let mut loader = CatalogLoader::new();

    let store = loader.load_store(dir.path(), &settings.catalogs).unwrap();
    assert_eq!(store.minor_names().len(), 3);
    assert_eq!(loader.cached(), 5);

    let mut minors = common::minors();
    minors["Lab Science"] = serde_json::json!({
        "Core": [{"Course": "CHEM101", "Credit": {"Min": 0.5, "Max": 1}}]
    });
    fs::write(
        dir.path().join("minors_v3.json"),
        serde_json::to_string_pretty(&minors).unwrap(),
    )
    .unwrap();

    let store = loader.load_store(dir.path(), &settings.catalogs).unwrap();
    assert_eq!(loader.cached(), 5);

    let analysis = Analyzer::new(&store, &settings).analyze("Computer Science", "Lab Science");
    let table = analysis.table().unwrap();
    let credits: Vec<String> = table.rows().map(|(_, row)| row.credit_display()).collect();
    assert_eq!(credits, vec!["0.5-1"]);
}
