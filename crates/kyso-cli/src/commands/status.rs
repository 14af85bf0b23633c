//! Status command implementation
//!
//! Hashes the local report files and classifies them against the manifest
//! of the pushed version.

use std::path::Path;

use colored::Colorize;
use kyso_api::ApiClient;
use kyso_core::{DiffResult, ManifestEntry, ReportDir, discover_reports};
use serde_json::json;

use crate::context::Context;
use crate::error::Result;

/// Run the status command
pub fn run_status(context: &Context, path: &Path, version: Option<u32>, json: bool) -> Result<()> {
    let reports = discover_reports(&kyso_fs::io::canonicalize(path)?)?;
    let client = context.client()?;

    let mut results = Vec::with_capacity(reports.len());
    for report in &reports {
        let manifest = remote_manifest(&client, report, version)?;
        let diff = report_status(report, &manifest)?;
        results.push((report, diff));
    }

    if json {
        let output: Vec<_> = results
            .iter()
            .map(|(report, diff)| {
                json!({
                    "organization": report.organization(),
                    "team": report.team(),
                    "report": report.slug(),
                    "path": report.root.display().to_string(),
                    "clean": diff.is_clean(),
                    "diff": diff,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (report, diff) in &results {
            print_status(report, diff);
        }
    }
    Ok(())
}

/// Manifest of the pushed report; empty if it was never pushed.
pub(crate) fn remote_manifest(
    client: &ApiClient,
    report: &ReportDir,
    version: Option<u32>,
) -> Result<Vec<ManifestEntry>> {
    match client.report_files(report.organization(), report.team(), &report.slug(), version) {
        Ok(manifest) => Ok(manifest),
        Err(kyso_api::Error::NotFound { resource }) if version.is_none() => {
            tracing::debug!(%resource, "Report not pushed yet");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Collect and hash the report's files and diff them against `manifest`.
pub fn report_status(report: &ReportDir, manifest: &[ManifestEntry]) -> Result<DiffResult> {
    let local = kyso_fs::collect_files(&report.root)?;
    tracing::debug!(files = local.len(), remote = manifest.len(), "Diffing report");
    Ok(kyso_core::diff(&local, manifest))
}

fn print_status(report: &ReportDir, diff: &DiffResult) {
    println!(
        "{} {}/{}/{}",
        "Report".bold(),
        report.organization().cyan(),
        report.team().cyan(),
        report.slug().yellow()
    );

    if diff.is_clean() {
        println!(
            "  {} Up to date ({} files)",
            "OK".green().bold(),
            diff.unmodified.len()
        );
        println!();
        return;
    }

    for name in &diff.added {
        println!("  {} {}", "+".green(), name.green());
    }
    for name in &diff.modified {
        println!("  {} {}", "~".yellow(), name.yellow());
    }
    for name in &diff.deleted {
        println!("  {} {}", "-".red(), name.red());
    }
    println!(
        "  {} changes: {} added, {} modified, {} deleted, {} unmodified",
        diff.change_count(),
        diff.added.len(),
        diff.modified.len(),
        diff.deleted.len(),
        diff.unmodified.len()
    );
    println!();
}
