//! Integration tests for the full manifest-to-report pipeline

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use roundabout::detector::{CycleDetector, DetectorOptions};
use roundabout::graph::ModuleGraphBuilder;
use roundabout::manifest::{ManifestSource, ModuleManifest};
use roundabout::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use tempfile::TempDir;

fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, content).unwrap();
    path
}

fn detect(
    manifest_path: &Path,
    options: DetectorOptions,
    allow_async_cycles: bool,
) -> CycleDetector {
    let manifest = ModuleManifest::parse_file(manifest_path).unwrap();
    let source = ManifestSource::new(&manifest);

    let mut builder = ModuleGraphBuilder::new(allow_async_cycles);
    builder.build_module_graph(&source).unwrap();

    let mut detector = CycleDetector::new(options);
    detector.detect_cycles(builder.graph()).unwrap();
    detector
}

#[test]
fn test_acyclic_manifest_produces_clean_report() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        r#"
{
  "modules": [
    { "id": "a", "path": "/src/a.js", "dependencies": [{ "target": "b" }] },
    { "id": "b", "path": "/src/b.js", "dependencies": [{ "target": "c" }] },
    { "id": "c", "path": "/src/c.js" }
  ]
}
"#,
    );

    let detector = detect(&manifest, DetectorOptions::default(), false);
    assert!(!detector.has_cycles());

    let report = HumanReportGenerator::new(None)
        .generate_report(&detector)
        .unwrap();
    assert!(report.contains("No circular dependencies detected"));
}

#[test]
fn test_two_module_cycle_reports_both_directions() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        r#"
{
  "modules": [
    { "id": "a", "path": "/src/a.js", "dependencies": [{ "target": "b" }] },
    { "id": "b", "path": "/src/b.js", "dependencies": [{ "target": "a" }] }
  ]
}
"#,
    );

    let detector = detect(&manifest, DetectorOptions::default(), false);
    assert_eq!(detector.cycle_count(), 2);

    let paths: Vec<Vec<String>> = detector
        .cycles()
        .iter()
        .map(|c| c.path().to_vec())
        .collect();
    assert_eq!(
        paths,
        vec![
            vec!["/src/a.js", "/src/b.js", "/src/a.js"],
            vec!["/src/b.js", "/src/a.js", "/src/b.js"],
        ]
    );
}

#[test]
fn test_async_only_cycle_vanishes_when_allowed() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        r#"
{
  "modules": [
    { "id": "a", "path": "/src/a.js", "dependencies": [{ "target": "b", "kind": "async" }] },
    { "id": "b", "path": "/src/b.js", "dependencies": [{ "target": "a" }] }
  ]
}
"#,
    );

    let strict = detect(&manifest, DetectorOptions::default(), false);
    assert_eq!(strict.cycle_count(), 2);

    let relaxed = detect(&manifest, DetectorOptions::default(), true);
    assert!(!relaxed.has_cycles());
}

#[test]
fn test_malformed_records_are_skipped_not_fatal() {
    // Unresolved targets, self references, and resourceless modules all
    // survive parsing and simply never contribute edges
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        r#"
{
  "modules": [
    {
      "id": "a",
      "path": "/src/a.js",
      "dependencies": [
        { "kind": "normal" },
        { "target": "a", "kind": "self-reference" },
        { "target": "missing" },
        { "target": "ghost" }
      ]
    },
    { "id": "ghost" }
  ]
}
"#,
    );

    let detector = detect(&manifest, DetectorOptions::default(), false);
    assert!(!detector.has_cycles());
}

#[test]
fn test_exclude_pattern_silences_matching_starts() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        r#"
{
  "modules": [
    { "id": "app", "path": "/src/app.js", "dependencies": [{ "target": "vendored" }] },
    { "id": "vendored", "path": "/node_modules/lib.js", "dependencies": [{ "target": "app" }] }
  ]
}
"#,
    );

    let options = DetectorOptions::builder()
        .with_exclude_pattern(Some("/node_modules/**".to_string()))
        .build()
        .unwrap();
    let detector = detect(&manifest, options, false);

    // The vendored module still shows up on the surviving path
    assert_eq!(detector.cycle_count(), 1);
    assert_eq!(detector.cycles()[0].resource(), "/src/app.js");
    assert!(
        detector.cycles()[0]
            .path()
            .contains(&"/node_modules/lib.js".to_string())
    );
}

#[test]
fn test_base_directory_relativizes_report_paths() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        r#"
{
  "modules": [
    { "id": "a", "path": "/app/src/a.js", "dependencies": [{ "target": "b" }] },
    { "id": "b", "path": "/app/src/b.js", "dependencies": [{ "target": "a" }] }
  ]
}
"#,
    );

    let options = DetectorOptions::builder()
        .with_base_directory(Some(PathBuf::from("/app")))
        .build()
        .unwrap();
    let detector = detect(&manifest, options, false);

    assert_eq!(
        detector.cycles()[0].path(),
        &["src/a.js", "src/b.js", "src/a.js"]
    );
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        r#"
{
  "modules": [
    { "id": "a", "path": "/src/a.js", "dependencies": [{ "target": "b" }] },
    { "id": "b", "path": "/src/b.js", "dependencies": [{ "target": "a" }] }
  ]
}
"#,
    );

    let detector = detect(&manifest, DetectorOptions::default(), false);
    let report = JsonReportGenerator::new().generate_report(&detector).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["has_cycles"], true);
    assert_eq!(json["cycle_count"], 2);
    assert_eq!(json["cycles"][0]["module"], "a");
    assert_eq!(json["cycles"][0]["path"][1], "/src/b.js");
}

#[test]
fn test_report_order_is_stable_across_manifest_permutations() {
    let forwards = r#"
{
  "modules": [
    { "id": "a", "path": "/src/a.js", "dependencies": [{ "target": "b" }] },
    { "id": "b", "path": "/src/b.js", "dependencies": [{ "target": "c" }] },
    { "id": "c", "path": "/src/c.js", "dependencies": [{ "target": "a" }] }
  ]
}
"#;
    let backwards = r#"
{
  "modules": [
    { "id": "c", "path": "/src/c.js", "dependencies": [{ "target": "a" }] },
    { "id": "b", "path": "/src/b.js", "dependencies": [{ "target": "c" }] },
    { "id": "a", "path": "/src/a.js", "dependencies": [{ "target": "b" }] }
  ]
}
"#;

    let temp = TempDir::new().unwrap();
    let first_path = temp.path().join("first.json");
    fs::write(&first_path, forwards).unwrap();
    let second_path = temp.path().join("second.json");
    fs::write(&second_path, backwards).unwrap();

    let first = detect(&first_path, DetectorOptions::default(), false);
    let second = detect(&second_path, DetectorOptions::default(), false);

    assert_eq!(first.cycles(), second.cycles());
    assert_eq!(first.cycles()[0].resource(), "/src/a.js");
}

#[test]
fn test_invalid_json_surfaces_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), "{ \"modules\": oops }");

    let result = ModuleManifest::parse_file(&manifest);
    assert!(result.is_err());
}
