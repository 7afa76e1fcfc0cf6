//! Report serialization.
//!
//! Three encodings: YAML (the default block-style dump), pretty JSON, and a
//! human-oriented markdown report. All three are pure projections of the
//! report value.

use chrono::SecondsFormat;
use thiserror::Error;

use crate::discovery::report::Report;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to serialize report to JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize report to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Block-style structured dump (default).
    Yaml,
    /// Pretty-printed structural dump.
    Json,
    /// Human report with sections.
    Markdown,
}

pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &Report) -> Result<String, FormatError> {
        match self.format {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Markdown => Ok(format_markdown(report)),
        }
    }
}

fn format_markdown(report: &Report) -> String {
    let mut lines: Vec<String> = vec![
        "# Discovery Report".to_string(),
        String::new(),
        format!("**Repository:** {}", report.repository.name),
        format!(
            "**Generated:** {}",
            report
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        format!(
            "**Primary Stack:** {}",
            report.primary_stack.as_deref().unwrap_or("unknown")
        ),
        String::new(),
        "## Tech Stacks".to_string(),
        String::new(),
    ];

    if report.tech_stacks.is_empty() {
        lines.push("No recognised tech stacks detected.".to_string());
    } else {
        for stack in &report.tech_stacks {
            lines.push(format!("### {}", stack.label));
            lines.push(format!("- **Files:** ~{}", stack.file_count));
            if !stack.config_files.is_empty() {
                lines.push(format!("- **Config:** {}", stack.config_files.join(", ")));
            }
            lines.push(String::new());
        }
    }

    if report.frameworks.total() > 0 {
        lines.push("## Frameworks".to_string());
        lines.push(String::new());
        let categories: [(&str, &Vec<String>); 5] = [
            ("Frontend", &report.frameworks.frontend),
            ("Backend", &report.frameworks.backend),
            ("Css", &report.frameworks.css),
            ("Orm", &report.frameworks.orm),
            ("State Management", &report.frameworks.state_management),
        ];
        for (label, values) in categories {
            if !values.is_empty() {
                lines.push(format!("- **{}:** {}", label, values.join(", ")));
            }
        }
        lines.push(String::new());
    }

    if !report.testing.is_empty() {
        lines.push("## Testing".to_string());
        lines.push(String::new());
        lines.push(
            report
                .testing
                .iter()
                .map(|t| format!("- {t}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        lines.push(String::new());
    }

    if !report.documentation.is_empty() {
        lines.push("## Documentation".to_string());
        lines.push(String::new());
        for doc in &report.documentation {
            lines.push(format!("- **{}:** `{}`", doc.label, doc.path));
        }
        lines.push(String::new());
    }

    if !report.design_system.is_empty() {
        lines.push("## Design System".to_string());
        lines.push(String::new());
        lines.push(
            report
                .design_system
                .iter()
                .map(|d| format!("- {d}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        lines.push(String::new());
    }

    let cc = &report.crosscutting;
    let mut concerns: Vec<(&str, String)> = Vec::new();
    for (key, values) in [
        ("logging", &cc.logging),
        ("authentication", &cc.authentication),
        ("caching", &cc.caching),
        ("errorHandling", &cc.error_handling),
        ("apiPatterns", &cc.api_patterns),
        ("featureFlags", &cc.feature_flags),
    ] {
        if !values.is_empty() {
            concerns.push((key, values.join(", ")));
        }
    }
    if let Some(env) = &cc.env_config {
        concerns.push(("envConfig", env.clone()));
    }
    if !concerns.is_empty() {
        lines.push("## Cross-Cutting".to_string());
        lines.push(String::new());
        for (key, value) in concerns {
            lines.push(format!("- **{key}:** {value}"));
        }
        lines.push(String::new());
    }

    if report.monorepo.detected {
        lines.push("## Monorepo".to_string());
        lines.push(String::new());
        lines.push(format!("Tools: {}", report.monorepo.tools.join(", ")));
        lines.push(String::new());
    }

    if !report.infrastructure.is_empty() {
        lines.push("## Infrastructure".to_string());
        lines.push(String::new());
        lines.push(
            report
                .infrastructure
                .iter()
                .map(|i| format!("- {i}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        lines.push(String::new());
    }

    if !report.cicd.is_empty() {
        lines.push("## CI/CD".to_string());
        lines.push(String::new());
        lines.push(
            report
                .cicd
                .iter()
                .map(|c| format!("- {c}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        lines.push(String::new());
    }

    lines.push("## Project Structure".to_string());
    lines.push(String::new());
    lines.push("Top-level directories:".to_string());
    lines.push(String::new());
    for dir in &report.structure.top_level_dirs {
        lines.push(format!("- `{dir}/`"));
    }

    if !report.recommendations.is_empty() {
        lines.push(String::new());
        lines.push("## Recommendations".to_string());
        lines.push(String::new());
        for rec in &report.recommendations {
            lines.push(format!("- {rec}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::report::{DocArtifact, TechStack};
    use std::path::PathBuf;

    fn sample_report() -> Report {
        let mut report = Report::new(PathBuf::from("/tmp/sample"));
        report.repository.name = "sample".to_string();
        report.repository.is_git = true;
        report.tech_stacks.push(TechStack {
            name: "rust".to_string(),
            label: "Rust".to_string(),
            file_count: 12,
            config_files: vec!["Cargo.toml".to_string()],
        });
        report.primary_stack = Some("rust".to_string());
        report.frameworks.backend = vec!["axum".to_string()];
        report.testing = vec!["pytest".to_string()];
        report.documentation.push(DocArtifact {
            name: "adr".to_string(),
            label: "ADRs".to_string(),
            path: "docs/adr".to_string(),
        });
        report.crosscutting.logging = vec!["winston".to_string()];
        report.crosscutting.env_config = Some("env-vars".to_string());
        report.infrastructure = vec!["docker".to_string()];
        report.cicd = vec!["github-actions".to_string()];
        report.monorepo.detected = true;
        report.monorepo.tools = vec!["cargo-workspace".to_string()];
        report.structure.top_level_dirs = vec!["src".to_string(), "docs".to_string()];
        report
            .structure
            .estimated_file_count
            .insert("rust".to_string(), 12);
        report.recommendations = vec!["Add more tests.".to_string()];
        report
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = sample_report();
        let output = ReportFormatter::new(OutputFormat::Json)
            .format(&report)
            .unwrap();

        assert!(output.contains("\"techStacks\""));
        let parsed: Report = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_yaml_format_round_trips() {
        let report = sample_report();
        let output = ReportFormatter::new(OutputFormat::Yaml)
            .format(&report)
            .unwrap();

        assert!(output.contains("techStacks:"));
        let parsed: Report = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_markdown_sections() {
        let report = sample_report();
        let output = ReportFormatter::new(OutputFormat::Markdown)
            .format(&report)
            .unwrap();

        assert!(output.starts_with("# Discovery Report"));
        assert!(output.contains("**Primary Stack:** rust"));
        assert!(output.contains("## Tech Stacks"));
        assert!(output.contains("### Rust"));
        assert!(output.contains("- **Files:** ~12"));
        assert!(output.contains("- **Backend:** axum"));
        assert!(output.contains("## Testing"));
        assert!(output.contains("- **ADRs:** `docs/adr`"));
        assert!(output.contains("- **envConfig:** env-vars"));
        assert!(output.contains("Tools: cargo-workspace"));
        assert!(output.contains("## CI/CD"));
        assert!(output.contains("- `src/`"));
        assert!(output.contains("## Recommendations"));
    }

    #[test]
    fn test_markdown_empty_report_degrades() {
        let report = Report::new(PathBuf::from("/tmp/empty"));
        let output = ReportFormatter::new(OutputFormat::Markdown)
            .format(&report)
            .unwrap();

        assert!(output.contains("**Primary Stack:** unknown"));
        assert!(output.contains("No recognised tech stacks detected."));
        assert!(!output.contains("## Frameworks"));
        assert!(!output.contains("## Monorepo"));
    }
}
