//! Manifest readers and the per-run dependency evidence cache.
//!
//! Each reader turns one ecosystem's manifest into normalized evidence: a
//! set of dependency names, or raw text for substring matching. Readers are
//! total functions of the filesystem; a missing or unparseable manifest
//! yields empty evidence for that reader alone and never an error.

use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::walker;

/// Nested project files are searched a few levels deep at most.
const PROJECT_FILE_MAX_DEPTH: usize = 3;

/// Read-once evidence cache, built a single time per discovery run and
/// consulted by every detector.
#[derive(Debug, Clone)]
pub struct DependencyContext {
    /// Union of `dependencies`, `devDependencies`, and `peerDependencies`
    /// names from the root `package.json`.
    pub node_deps: HashSet<String>,
    /// Concatenated text of every `.csproj` found in the top levels.
    pub csproj_text: String,
    /// Raw text of the root `Cargo.toml`.
    pub cargo_text: String,
    /// Raw text of the root `Gemfile`.
    pub gemfile_text: String,
    /// Raw text of the root `pom.xml`.
    pub pom_text: String,
    /// Lower-cased dependency names from `pyproject.toml` and
    /// `requirements.txt`.
    pub python_deps: HashSet<String>,
    pub project_root: PathBuf,
}

impl DependencyContext {
    pub fn load(project_root: &Path) -> Self {
        Self {
            node_deps: node_dependencies(project_root),
            csproj_text: csproj_text(project_root),
            cargo_text: read_or_empty(&project_root.join("Cargo.toml")),
            gemfile_text: read_or_empty(&project_root.join("Gemfile")),
            pom_text: read_or_empty(&project_root.join("pom.xml")),
            python_deps: python_dependencies(project_root),
            project_root: project_root.to_path_buf(),
        }
    }
}

fn read_or_empty(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Dependency names declared in the root `package.json`.
fn node_dependencies(project_root: &Path) -> HashSet<String> {
    let mut deps = HashSet::new();
    let raw = match fs::read_to_string(project_root.join("package.json")) {
        Ok(raw) => raw,
        Err(_) => return deps,
    };
    let pkg: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(pkg) => pkg,
        Err(_) => return deps,
    };
    for section in ["dependencies", "devDependencies", "peerDependencies"] {
        if let Some(table) = pkg.get(section).and_then(|v| v.as_object()) {
            deps.extend(table.keys().cloned());
        }
    }
    deps
}

/// Concatenated text of every `.csproj` within the top levels, for
/// substring matching against package references.
fn csproj_text(project_root: &Path) -> String {
    let mut text = String::new();
    for path in walker::collect_files_with_suffix(project_root, ".csproj", PROJECT_FILE_MAX_DEPTH) {
        if let Ok(content) = fs::read_to_string(&path) {
            text.push_str(&content);
            text.push('\n');
        }
    }
    text
}

/// States of the line scanner over `pyproject.toml`. Only the dependency
/// tables of the two manifest dialects are recognized; any other section
/// header drops back to `Outside`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PyprojectState {
    Outside,
    /// `[tool.poetry.dependencies]`: one `name = version` per line.
    PoetryDependencies,
    /// `[project]`: tracks whether a `dependencies = [...]` array is open.
    ProjectTable { in_deps_array: bool },
    /// `[project.optional-dependencies]`: `extra = ["pkg", ...]` per line.
    OptionalDependencies,
}

/// Lower-cased dependency names from `pyproject.toml` and `requirements.txt`.
fn python_dependencies(project_root: &Path) -> HashSet<String> {
    let mut deps = HashSet::new();
    if let Ok(content) = fs::read_to_string(project_root.join("pyproject.toml")) {
        scan_pyproject(&content, &mut deps);
    }
    if let Ok(content) = fs::read_to_string(project_root.join("requirements.txt")) {
        scan_requirements(&content, &mut deps);
    }
    deps
}

fn scan_pyproject(content: &str, deps: &mut HashSet<String>) {
    let section_re = Regex::new(r"^\[([^\]]+)\]").unwrap();
    let poetry_dep_re = Regex::new(r"^([A-Za-z0-9_-]+)\s*=").unwrap();
    let deps_array_open_re = Regex::new(r"^dependencies\s*=\s*\[").unwrap();
    let quoted_re = Regex::new(r#"["']([a-zA-Z0-9_-]+)["']"#).unwrap();

    let mut state = PyprojectState::Outside;
    for raw_line in content.lines() {
        let line = raw_line.trim();

        if let Some(caps) = section_re.captures(line) {
            state = match caps[1].trim() {
                "tool.poetry.dependencies" => PyprojectState::PoetryDependencies,
                "project" => PyprojectState::ProjectTable {
                    in_deps_array: false,
                },
                "project.optional-dependencies" => PyprojectState::OptionalDependencies,
                _ => PyprojectState::Outside,
            };
            continue;
        }

        match &mut state {
            PyprojectState::Outside => {}
            PyprojectState::PoetryDependencies => {
                if let Some(caps) = poetry_dep_re.captures(line) {
                    let name = caps[1].to_lowercase();
                    // The interpreter constraint is not a dependency.
                    if name != "python" {
                        deps.insert(name);
                    }
                }
            }
            PyprojectState::ProjectTable { in_deps_array } => {
                if *in_deps_array {
                    for caps in quoted_re.captures_iter(line) {
                        deps.insert(caps[1].to_lowercase());
                    }
                    if line.contains(']') {
                        *in_deps_array = false;
                    }
                } else if deps_array_open_re.is_match(line) {
                    let array_part = &line[line.find('[').unwrap_or(0)..];
                    for caps in quoted_re.captures_iter(array_part) {
                        deps.insert(caps[1].to_lowercase());
                    }
                    *in_deps_array = !line.contains(']');
                }
            }
            PyprojectState::OptionalDependencies => {
                let Some(eq) = line.find('=') else { continue };
                let after_eq = &line[eq + 1..];
                if !after_eq.contains('[') {
                    continue;
                }
                for caps in quoted_re.captures_iter(after_eq) {
                    deps.insert(caps[1].to_lowercase());
                }
            }
        }
    }
}

/// One specifier per line, with optional version, extras, environment
/// marker, or comment suffixes stripped.
fn scan_requirements(content: &str, deps: &mut HashSet<String>) {
    for line in content.lines() {
        let name = line
            .trim()
            .split(|c: char| matches!(c, '>' | '=' | '<' | '[' | '!' | ';' | '#'))
            .next()
            .unwrap_or("")
            .trim();
        if !name.is_empty() {
            deps.insert(name.to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_empty_root_yields_empty_context() {
        let dir = TempDir::new().unwrap();
        let ctx = DependencyContext::load(dir.path());

        assert!(ctx.node_deps.is_empty());
        assert!(ctx.csproj_text.is_empty());
        assert!(ctx.cargo_text.is_empty());
        assert!(ctx.gemfile_text.is_empty());
        assert!(ctx.pom_text.is_empty());
        assert!(ctx.python_deps.is_empty());
    }

    #[test]
    fn test_node_dependencies_union_of_sections() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "package.json",
            r#"{
              "dependencies": { "react": "^18.2.0" },
              "devDependencies": { "vitest": "^1.0.0" },
              "peerDependencies": { "react-dom": "^18.0.0" }
            }"#,
        );

        let deps = node_dependencies(dir.path());
        assert!(deps.contains("react"));
        assert!(deps.contains("vitest"));
        assert!(deps.contains("react-dom"));
        assert_eq!(deps.len(), 3);
    }

    #[test]
    fn test_malformed_package_json_is_empty_evidence() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "package.json", "{ not json ");
        assert!(node_dependencies(dir.path()).is_empty());
    }

    #[test]
    fn test_csproj_text_concatenates_nested_projects() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "Api/Api.csproj",
            r#"<PackageReference Include="Microsoft.AspNetCore" />"#,
        );
        write(
            dir.path(),
            "Tests/Tests.csproj",
            r#"<PackageReference Include="xunit" />"#,
        );

        let text = csproj_text(dir.path());
        assert!(text.contains("Microsoft.AspNetCore"));
        assert!(text.contains("xunit"));
    }

    #[test]
    fn test_poetry_dependencies_skip_interpreter() {
        let mut deps = HashSet::new();
        scan_pyproject(
            r#"
[tool.poetry]
name = "svc"

[tool.poetry.dependencies]
python = "^3.11"
fastapi = "^0.100"
SQLAlchemy = "^2.0"
"#,
            &mut deps,
        );

        assert!(deps.contains("fastapi"));
        assert!(deps.contains("sqlalchemy"));
        assert!(!deps.contains("python"));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_pep621_single_line_array() {
        let mut deps = HashSet::new();
        scan_pyproject(
            r#"
[project]
name = "svc"
dependencies = ["fastapi", "uvicorn"]
"#,
            &mut deps,
        );

        assert!(deps.contains("fastapi"));
        assert!(deps.contains("uvicorn"));
    }

    #[test]
    fn test_pep621_multi_line_array() {
        let mut deps = HashSet::new();
        scan_pyproject(
            r#"
[project]
dependencies = [
    "django",
    "celery",
]
requires-python = ">=3.11"
"#,
            &mut deps,
        );

        assert!(deps.contains("django"));
        assert!(deps.contains("celery"));
        // The array closed before requires-python; nothing past it leaks in.
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_optional_dependency_groups() {
        let mut deps = HashSet::new();
        scan_pyproject(
            r#"
[project.optional-dependencies]
test = ["pytest", "coverage"]
docs = ["sphinx"]
"#,
            &mut deps,
        );

        assert!(deps.contains("pytest"));
        assert!(deps.contains("coverage"));
        assert!(deps.contains("sphinx"));
    }

    #[test]
    fn test_unrelated_section_exits_dependency_state() {
        let mut deps = HashSet::new();
        scan_pyproject(
            r#"
[tool.poetry.dependencies]
flask = "^2.3"

[tool.black]
line-length = 100
"#,
            &mut deps,
        );

        assert!(deps.contains("flask"));
        assert!(!deps.contains("line-length"));
    }

    #[test]
    fn test_requirements_specifier_suffixes_stripped() {
        let mut deps = HashSet::new();
        scan_requirements(
            "Flask==2.3.0\nrequests >= 2.28\nuvicorn[standard]\npydantic ; python_version > '3.8'\n# comment\n\n",
            &mut deps,
        );

        assert!(deps.contains("flask"));
        assert!(deps.contains("requests"));
        assert!(deps.contains("uvicorn"));
        assert!(deps.contains("pydantic"));
        assert_eq!(deps.len(), 4);
    }

    #[test]
    fn test_python_dependencies_merge_both_dialects() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pyproject.toml",
            "[tool.poetry.dependencies]\nfastapi = \"^0.100\"\n",
        );
        write(dir.path(), "requirements.txt", "celery==5.3\n");

        let deps = python_dependencies(dir.path());
        assert!(deps.contains("fastapi"));
        assert!(deps.contains("celery"));
    }
}
