//! Output format tests for the discovery report.

mod support;

use stackscout::{OutputFormat, Report, ReportFormatter};
use support::{discover_at, Fixture};

fn sample_fixture() -> Fixture {
    let fixture = Fixture::new();
    fixture
        .file(
            "package.json",
            r#"{ "dependencies": { "react": "^18.2.0" }, "devDependencies": { "vitest": "^1.0.0" } }"#,
        )
        .file("src/App.tsx", "export {};")
        .file("Dockerfile", "FROM node:20")
        .file(".github/workflows/ci.yml", "on: push\n");
    fixture
}

#[test]
fn test_json_output_is_valid_and_camel_cased() {
    let fixture = sample_fixture();
    let report = discover_at(fixture.root());

    let output = ReportFormatter::new(OutputFormat::Json)
        .format(&report)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value.get("generatedAt").is_some());
    assert!(value.get("techStacks").is_some());
    assert_eq!(value["primaryStack"], serde_json::json!("node"));
    assert!(value["cicd"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("github-actions")));

    let parsed: Report = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_yaml_output_is_valid() {
    let fixture = sample_fixture();
    let report = discover_at(fixture.root());

    let output = ReportFormatter::new(OutputFormat::Yaml)
        .format(&report)
        .unwrap();

    assert!(output.contains("techStacks:"));
    assert!(output.contains("name: node"));

    let parsed: Report = serde_yaml::from_str(&output).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_markdown_output_sections() {
    let fixture = sample_fixture();
    let report = discover_at(fixture.root());

    let output = ReportFormatter::new(OutputFormat::Markdown)
        .format(&report)
        .unwrap();

    assert!(output.starts_with("# Discovery Report"));
    assert!(output.contains("## Tech Stacks"));
    assert!(output.contains("### Node.js / TypeScript"));
    assert!(output.contains("- **Frontend:** react"));
    assert!(output.contains("## Testing"));
    assert!(output.contains("- vitest"));
    assert!(output.contains("## Infrastructure"));
    assert!(output.contains("- docker"));
    assert!(output.contains("## CI/CD"));
    assert!(output.contains("## Project Structure"));
}

#[test]
fn test_markdown_empty_project() {
    let fixture = Fixture::new();
    let report = discover_at(fixture.root());

    let output = ReportFormatter::new(OutputFormat::Markdown)
        .format(&report)
        .unwrap();

    assert!(output.contains("**Primary Stack:** unknown"));
    assert!(output.contains("No recognised tech stacks detected."));
    assert!(output.contains("## Recommendations"));
}
