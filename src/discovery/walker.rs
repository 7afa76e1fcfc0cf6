//! Bounded filesystem traversal primitives.
//!
//! Every walk here is capped by a depth ceiling and, where files are counted,
//! a running file-count ceiling. Traversal uses an explicit work stack so the
//! call depth stays flat and iteration follows directory-listing order. IO
//! errors never propagate: a directory that cannot be read contributes
//! nothing and the walk carries on.

use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_DEPTH: usize = 4;
pub const DEFAULT_MAX_FILES: usize = 5000;

/// Dependency caches and build output would dwarf application sources in any
/// count, so these are never entered.
const SKIP_DIRS: &[&str] = &[".git", "node_modules", "dist", "build", ".next", ".nuxt"];

/// The tool's own home directory inside a consuming repository. Skipped at
/// the traversal root only; a nested project reusing the name is not exempt.
const TOOL_HOME: &str = ".stackscout";

fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || SKIP_DIRS.contains(&name)
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|e| e.to_str())
}

/// Counts files whose extension is in `extensions` (no leading dot),
/// descending at most `max_depth` levels and stopping once the running count
/// exceeds `max_files`.
pub fn count_by_extension(
    root: &Path,
    extensions: &[&str],
    max_depth: usize,
    max_files: usize,
) -> usize {
    let mut count = 0usize;
    let mut pending: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

    while let Some((dir, depth)) = pending.pop() {
        if depth > max_depth || count > max_files {
            continue;
        }
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            if count > max_files {
                break;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if is_skipped(&name) {
                continue;
            }
            if depth == 0 && name == TOOL_HOME {
                continue;
            }
            match entry.file_type() {
                Ok(kind) if kind.is_dir() => pending.push((entry.path(), depth + 1)),
                Ok(_) => {
                    if let Some(ext) = extension_of(&name) {
                        if extensions.contains(&ext) {
                            count += 1;
                        }
                    }
                }
                Err(_) => {}
            }
        }
    }

    count
}

/// Tests a marker pattern against the project root.
///
/// Three dialects: a trailing `/` asks for a directory, a leading `*` asks
/// whether any immediate child name ends with the given suffix, anything else
/// is an exact relative path.
pub fn marker_exists(root: &Path, pattern: &str) -> bool {
    if let Some(dir) = pattern.strip_suffix('/') {
        return root.join(dir).is_dir();
    }
    if let Some(suffix) = pattern.strip_prefix('*') {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(_) => return false,
        };
        return entries
            .flatten()
            .any(|e| e.file_name().to_string_lossy().ends_with(suffix));
    }
    root.join(pattern).exists()
}

/// Collects every file whose name ends with `suffix`, descending at most
/// `max_depth` levels under `root` with the usual skip set.
pub fn collect_files_with_suffix(root: &Path, suffix: &str, max_depth: usize) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

    while let Some((dir, depth)) = pending.pop() {
        if depth > max_depth {
            continue;
        }
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if is_skipped(&name) {
                continue;
            }
            match entry.file_type() {
                Ok(kind) if kind.is_dir() => pending.push((entry.path(), depth + 1)),
                Ok(_) if name.ends_with(suffix) => found.push(entry.path()),
                _ => {}
            }
        }
    }

    found
}

/// Immediate non-hidden subdirectories of the project root.
pub fn top_level_dirs(root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    entries
        .flatten()
        .filter(|e| e.file_type().map(|k| k.is_dir()).unwrap_or(false))
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            if is_skipped(&name) {
                None
            } else {
                Some(name)
            }
        })
        .collect()
}
