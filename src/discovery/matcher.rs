//! Evidence matching.
//!
//! One generic predicate serves every detector catalog. Criteria are tried
//! in a fixed order, cheapest first: in-memory set lookups and single-path
//! existence checks come before any directory walk. The order affects cost
//! only; criteria are OR-combined, so it cannot change the outcome.

use super::detectors::Detector;
use super::evidence::DependencyContext;
use super::walker;

/// Depth and file ceilings for the extension-probe fallback. Existence is
/// all that matters here, so the probe stays tiny.
const PROBE_MAX_DEPTH: usize = 2;
const PROBE_MAX_FILES: usize = 5;

/// A positive detection, carrying the detector's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorMatch {
    pub name: &'static str,
    pub label: &'static str,
}

/// Decides whether a single detector matches the cached evidence.
pub fn matches(detector: &Detector, ctx: &DependencyContext) -> bool {
    if !detector.deps.is_empty()
        && !ctx.node_deps.is_empty()
        && detector.deps.iter().any(|dep| ctx.node_deps.contains(*dep))
    {
        return true;
    }

    if !detector.config_files.is_empty()
        && detector
            .config_files
            .iter()
            .any(|c| walker::marker_exists(&ctx.project_root, c))
    {
        return true;
    }

    if !detector.markers.is_empty()
        && detector
            .markers
            .iter()
            .any(|m| walker::marker_exists(&ctx.project_root, m))
    {
        return true;
    }

    if !detector.csproj_refs.is_empty()
        && !ctx.csproj_text.is_empty()
        && detector.csproj_refs.iter().any(|r| ctx.csproj_text.contains(r))
    {
        return true;
    }

    if !detector.cargo_refs.is_empty()
        && !ctx.cargo_text.is_empty()
        && detector.cargo_refs.iter().any(|r| ctx.cargo_text.contains(r))
    {
        return true;
    }

    if !detector.gemfile_refs.is_empty()
        && !ctx.gemfile_text.is_empty()
        && detector.gemfile_refs.iter().any(|r| ctx.gemfile_text.contains(r))
    {
        return true;
    }

    if !detector.pom_refs.is_empty()
        && !ctx.pom_text.is_empty()
        && detector.pom_refs.iter().any(|r| ctx.pom_text.contains(r))
    {
        return true;
    }

    if !detector.deps.is_empty()
        && !ctx.python_deps.is_empty()
        && detector
            .deps
            .iter()
            .any(|dep| ctx.python_deps.contains(&dep.to_lowercase()))
    {
        return true;
    }

    if let Some(ext) = detector.file_ext {
        if walker::count_by_extension(&ctx.project_root, &[ext], PROBE_MAX_DEPTH, PROBE_MAX_FILES)
            > 0
        {
            return true;
        }
    }

    false
}

/// Runs every detector in `detectors` against the evidence, preserving
/// catalog order in the result.
pub fn match_all(detectors: &[Detector], ctx: &DependencyContext) -> Vec<DetectorMatch> {
    detectors
        .iter()
        .filter(|d| matches(d, ctx))
        .map(|d| DetectorMatch {
            name: d.name,
            label: d.label,
        })
        .collect()
}
