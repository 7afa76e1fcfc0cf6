//! Discovery report data model.
//!
//! The report is a plain value: it is assembled in one pass, owns no
//! resources, and serialises to camelCase field names for consumers of the
//! JSON/YAML encodings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level discovery report returned by [`run_discover`](super::run_discover).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub project_root: PathBuf,
    pub repository: RepositoryInfo,
    pub tech_stacks: Vec<TechStack>,
    /// Name of the tech stack with the highest file count. Set iff
    /// `tech_stacks` is non-empty; ties go to the earlier registry entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_stack: Option<String>,
    pub frameworks: Frameworks,
    pub testing: Vec<String>,
    pub documentation: Vec<DocArtifact>,
    pub design_system: Vec<String>,
    pub crosscutting: Crosscutting,
    pub infrastructure: Vec<String>,
    pub cicd: Vec<String>,
    pub monorepo: Monorepo,
    pub structure: Structure,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub name: String,
    pub is_git: bool,
    /// Trimmed contents of the `.stackscout-repo` overlay marker, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub name: String,
    pub label: String,
    pub file_count: usize,
    pub config_files: Vec<String>,
}

/// Detected frameworks, one list per category. Lists hold detector names in
/// registry order, deduplicated by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Frameworks {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub css: Vec<String>,
    pub orm: Vec<String>,
    pub state_management: Vec<String>,
}

impl Frameworks {
    /// Total detections across every category.
    pub fn total(&self) -> usize {
        self.frontend.len()
            + self.backend.len()
            + self.css.len()
            + self.orm.len()
            + self.state_management.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocArtifact {
    pub name: String,
    pub label: String,
    /// First directory or file path that matched, relative to the project root.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Crosscutting {
    pub logging: Vec<String>,
    pub authentication: Vec<String>,
    pub caching: Vec<String>,
    pub error_handling: Vec<String>,
    pub api_patterns: Vec<String>,
    pub feature_flags: Vec<String>,
    /// `env-vars` when `.env.example` is present, else `config-files` when
    /// `appsettings.json` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_config: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Monorepo {
    pub detected: bool,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    pub top_level_dirs: Vec<String>,
    /// Keyed by detected tech-stack name; a BTreeMap keeps repeated runs
    /// byte-identical on the wire.
    pub estimated_file_count: BTreeMap<String, usize>,
}

impl Report {
    /// Empty report skeleton for a project root, stamped with the current time.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            generated_at: Utc::now(),
            project_root,
            repository: RepositoryInfo::default(),
            tech_stacks: Vec::new(),
            primary_stack: None,
            frameworks: Frameworks::default(),
            testing: Vec::new(),
            documentation: Vec::new(),
            design_system: Vec::new(),
            crosscutting: Crosscutting::default(),
            infrastructure: Vec::new(),
            cicd: Vec::new(),
            monorepo: Monorepo::default(),
            structure: Structure::default(),
            recommendations: Vec::new(),
        }
    }
}
