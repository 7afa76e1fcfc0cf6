//! Command handlers.

use anyhow::{Context, Result};
use tracing::error;

use super::commands::DiscoverArgs;
use crate::discovery::{run_discover, DiscoverOptions};
use crate::output::ReportFormatter;

/// Runs discovery against the requested root and prints the formatted
/// report to stdout. Returns a process exit code.
pub async fn handle_discover(args: &DiscoverArgs) -> i32 {
    match discover_to_stdout(args).await {
        Ok(()) => 0,
        Err(err) => {
            error!("discover failed: {err:#}");
            eprintln!("Error: {err:#}");
            1
        }
    }
}

async fn discover_to_stdout(args: &DiscoverArgs) -> Result<()> {
    let project_root = match &args.project_root {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("cannot resolve current directory")?,
    };
    let toolkit_root = args
        .toolkit_root
        .clone()
        .unwrap_or_else(|| project_root.join(".stackscout"));

    let opts = DiscoverOptions {
        toolkit_root,
        project_root,
    };
    let report = run_discover(&opts).await;

    let formatter = ReportFormatter::new(args.format.into());
    let output = formatter
        .format(&report)
        .context("failed to render discovery report")?;
    println!("{output}");

    Ok(())
}
