//! Push command implementation

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kyso_core::{ReportDir, discover_reports};
use kyso_fs::{archive, collector::relative_name};

use crate::context::Context;
use crate::error::{CliError, Result};

/// A report and the files that will be uploaded for it
#[derive(Debug)]
pub struct PushPlan {
    pub report: ReportDir,
    pub files: Vec<PathBuf>,
}

/// Resolve every report under `path` and list its uploadable files.
///
/// Fails if a report's `main` file is missing or ignored.
pub fn plan_push(path: &Path) -> Result<Vec<PushPlan>> {
    let mut plans = Vec::new();
    for report in discover_reports(&kyso_fs::io::canonicalize(path)?)? {
        let files = kyso_fs::list_files(&report.root)?;

        if let Some(main) = report.config.main_file.as_deref() {
            let main = main.trim_start_matches("./");
            if !files.iter().any(|f| relative_name(&report.root, f) == main) {
                return Err(CliError::user(format!(
                    "Main file '{}' of report '{}' not found (missing or ignored)",
                    main, report.config.title
                )));
            }
        }

        plans.push(PushPlan { report, files });
    }
    Ok(plans)
}

/// Run the push command
pub fn run_push(context: &Context, path: &Path, message: Option<&str>, dry_run: bool) -> Result<()> {
    let plans = plan_push(path)?;

    if dry_run {
        for plan in &plans {
            print_plan(plan);
        }
        println!("{}", "Dry run, nothing uploaded.".dimmed());
        return Ok(());
    }

    let client = context.client()?;
    for plan in &plans {
        let archive = archive::pack(&plan.report.root, &plan.files)?;
        let label = format!(
            "{}/{}/{}",
            plan.report.organization(),
            plan.report.team(),
            plan.report.slug()
        );

        let spinner = upload_spinner(&label, archive.len());
        let result = client.push_report(archive, message);
        spinner.finish_and_clear();
        let pushed = result?;

        println!(
            "{} Pushed {} ({} files{})",
            "OK".green().bold(),
            label.cyan(),
            plan.files.len(),
            pushed
                .last_version
                .map(|v| format!(", version {v}"))
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn upload_spinner(label: &str, bytes: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Uploading {label} ({} KiB)...", bytes.div_ceil(1024)));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_plan(plan: &PushPlan) {
    println!(
        "{} {}/{}/{}",
        "Would push".bold(),
        plan.report.organization().cyan(),
        plan.report.team().cyan(),
        plan.report.slug().yellow()
    );
    for file in &plan.files {
        println!("  {} {}", "+".green(), relative_name(&plan.report.root, file));
    }
    println!("  {} files", plan.files.len());
    println!();
}
