//! Repository discovery.
//!
//! Orchestrates the bounded walker, the manifest readers, and the detector
//! catalogs into a single [`Report`]. Discovery is total: for any filesystem
//! state it returns a complete report, degrading to fewer detected facts
//! rather than failing. All I/O is synchronous; the entry point is `async`
//! only so callers inside an async runtime can compose it directly.

pub mod detectors;
pub mod evidence;
pub mod matcher;
pub mod report;
pub mod walker;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use self::evidence::DependencyContext;
use self::matcher::DetectorMatch;
use self::report::{DocArtifact, Report, RepositoryInfo, TechStack};

/// Single-line overlay marker written by the init flow at the project root.
const OVERLAY_MARKER: &str = ".stackscout-repo";

/// Inputs to a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Root of the tool's own overlay inside the repository.
    pub toolkit_root: PathBuf,
    /// Root of the project to scan.
    pub project_root: PathBuf,
}

/// Scans `opts.project_root` and assembles the discovery report.
///
/// Progress and summary lines go to the diagnostic stream via `tracing`;
/// they are observational only. Concurrent runs against different roots are
/// safe: each run builds its own evidence cache and report.
pub async fn run_discover(opts: &DiscoverOptions) -> Report {
    let project_root = opts.project_root.as_path();
    info!(root = %project_root.display(), "scanning repository");

    let mut report = Report::new(project_root.to_path_buf());
    report.repository = repository_info(project_root);

    for stack in detectors::STACK_DETECTORS {
        let marker_found = stack
            .markers
            .iter()
            .any(|m| walker::marker_exists(project_root, m));
        if !marker_found {
            continue;
        }
        let file_count = walker::count_by_extension(
            project_root,
            stack.file_patterns,
            walker::DEFAULT_MAX_DEPTH,
            walker::DEFAULT_MAX_FILES,
        );
        let config_files = stack
            .config_files
            .iter()
            .filter(|c| project_root.join(c).exists())
            .map(|c| c.to_string())
            .collect();
        report.tech_stacks.push(TechStack {
            name: stack.name.to_string(),
            label: stack.label.to_string(),
            file_count,
            config_files,
        });
    }

    report.primary_stack = primary_stack(&report.tech_stacks);

    // One pass over every manifest; every detector below reads this cache.
    let ctx = DependencyContext::load(project_root);

    report.frameworks.frontend = names(matcher::match_all(detectors::FRONTEND_DETECTORS, &ctx));
    report.frameworks.backend = names(matcher::match_all(detectors::BACKEND_DETECTORS, &ctx));
    report.frameworks.css = names(matcher::match_all(detectors::CSS_DETECTORS, &ctx));
    report.frameworks.orm = names(matcher::match_all(detectors::ORM_DETECTORS, &ctx));
    report.frameworks.state_management =
        names(matcher::match_all(detectors::STATE_MANAGEMENT_DETECTORS, &ctx));

    report.testing = names(matcher::match_all(detectors::TESTING_DETECTORS, &ctx));

    for artifact in detectors::DOC_DETECTORS {
        let found = artifact
            .dirs
            .iter()
            .chain(artifact.files)
            .find(|p| walker::marker_exists(project_root, p));
        if let Some(path) = found {
            report.documentation.push(DocArtifact {
                name: artifact.name.to_string(),
                label: artifact.label.to_string(),
                path: path.to_string(),
            });
        }
    }

    for artifact in detectors::DESIGN_SYSTEM_DETECTORS {
        let found = artifact
            .dirs
            .iter()
            .chain(artifact.files)
            .any(|p| walker::marker_exists(project_root, p));
        if found {
            report.design_system.push(artifact.name.to_string());
        }
    }

    report.crosscutting.logging = names(matcher::match_all(detectors::LOGGING_DETECTORS, &ctx));
    report.crosscutting.authentication =
        names(matcher::match_all(detectors::AUTHENTICATION_DETECTORS, &ctx));
    report.crosscutting.caching = names(matcher::match_all(detectors::CACHING_DETECTORS, &ctx));
    report.crosscutting.error_handling =
        names(matcher::match_all(detectors::ERROR_HANDLING_DETECTORS, &ctx));
    report.crosscutting.api_patterns =
        names(matcher::match_all(detectors::API_PATTERN_DETECTORS, &ctx));
    report.crosscutting.feature_flags =
        names(matcher::match_all(detectors::FEATURE_FLAG_DETECTORS, &ctx));
    report.crosscutting.env_config = env_config(project_root);

    report.infrastructure = names(matcher::match_all(detectors::INFRA_DETECTORS, &ctx));
    report.cicd = names(matcher::match_all(detectors::CI_DETECTORS, &ctx));

    let tools = detect_monorepo(project_root);
    report.monorepo.detected = !tools.is_empty();
    report.monorepo.tools = tools;

    report.structure.top_level_dirs = walker::top_level_dirs(project_root);
    for stack in &report.tech_stacks {
        report
            .structure
            .estimated_file_count
            .insert(stack.name.clone(), stack.file_count);
    }

    report.recommendations = recommendations(&report);

    info!(
        tech_stacks = report.tech_stacks.len(),
        frameworks = report.frameworks.total(),
        testing = report.testing.len(),
        infrastructure = report.infrastructure.len(),
        cicd = report.cicd.len(),
        "discovery complete"
    );

    report
}

fn names(found: Vec<DetectorMatch>) -> Vec<String> {
    found.into_iter().map(|m| m.name.to_string()).collect()
}

fn repository_info(project_root: &Path) -> RepositoryInfo {
    let name = project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let is_git = project_root.join(".git").exists();
    let overlay = fs::read_to_string(project_root.join(OVERLAY_MARKER))
        .ok()
        .map(|s| s.trim().to_string());
    RepositoryInfo {
        name,
        is_git,
        overlay,
    }
}

/// Stable left-fold over detected stacks: strictly larger counts win, ties
/// keep the earlier registry entry.
fn primary_stack(tech_stacks: &[TechStack]) -> Option<String> {
    let mut primary: Option<&TechStack> = None;
    for stack in tech_stacks {
        match primary {
            Some(current) if current.file_count >= stack.file_count => {}
            _ => primary = Some(stack),
        }
    }
    primary.map(|s| s.name.clone())
}

fn env_config(project_root: &Path) -> Option<String> {
    if walker::marker_exists(project_root, ".env.example") {
        Some("env-vars".to_string())
    } else if walker::marker_exists(project_root, "appsettings.json") {
        Some("config-files".to_string())
    } else {
        None
    }
}

/// Independent workspace checks; any subset may fire.
fn detect_monorepo(project_root: &Path) -> Vec<String> {
    let mut tools = Vec::new();

    if walker::marker_exists(project_root, "pnpm-workspace.yaml") {
        tools.push("pnpm-workspace");
    }
    if let Ok(raw) = fs::read_to_string(project_root.join("package.json")) {
        if let Ok(pkg) = serde_json::from_str::<serde_json::Value>(&raw) {
            if pkg.get("workspaces").is_some() {
                tools.push("npm-workspaces");
            }
        }
    }
    if walker::marker_exists(project_root, "nx.json") {
        tools.push("nx");
    }
    if walker::marker_exists(project_root, "turbo.json") {
        tools.push("turborepo");
    }
    if walker::marker_exists(project_root, "lerna.json") {
        tools.push("lerna");
    }
    if let Ok(cargo) = fs::read_to_string(project_root.join("Cargo.toml")) {
        if cargo.contains("[workspace]") {
            tools.push("cargo-workspace");
        }
    }

    tools.into_iter().map(String::from).collect()
}

/// Derived purely from already-populated report fields; no further I/O.
fn recommendations(report: &Report) -> Vec<String> {
    let mut recs = Vec::new();

    if report.tech_stacks.is_empty() {
        recs.push(
            "No recognised tech stacks detected. Add marker files (package.json, Cargo.toml, \
             etc.) or configure primaryStack manually."
                .to_string(),
        );
    }
    if report.cicd.is_empty() {
        recs.push(
            "No CI/CD configuration detected. Consider adding GitHub Actions or another CI \
             pipeline."
                .to_string(),
        );
    }
    if report.repository.overlay.is_none() {
        recs.push(format!(
            "No {OVERLAY_MARKER} marker found. Run \"stackscout init\" to set up an overlay."
        ));
    }
    if report.testing.is_empty() && !report.tech_stacks.is_empty() {
        recs.push(
            "No testing frameworks detected. Consider adding tests with vitest, jest, pytest, \
             or xUnit."
                .to_string(),
        );
    }

    recs
}
