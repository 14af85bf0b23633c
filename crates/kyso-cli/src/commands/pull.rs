//! pull and clone

use std::path::{Path, PathBuf};

use colored::Colorize;
use kyso_core::discover_reports;
use kyso_fs::{archive, io};

use crate::context::Context;
use crate::error::{CliError, Result};

/// `ORGANIZATION/CHANNEL/REPORT` as given to `kyso clone`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAddress {
    pub organization: String,
    pub team: String,
    pub report: String,
}

impl ReportAddress {
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.trim().trim_matches('/').split('/').collect();
        match parts.as_slice() {
            [organization, team, report]
                if [organization, team, report].iter().all(|p| !p.is_empty()) =>
            {
                Ok(Self {
                    organization: organization.to_string(),
                    team: team.to_string(),
                    report: report.to_string(),
                })
            }
            _ => Err(CliError::user(format!(
                "Invalid report '{input}', expected ORGANIZATION/CHANNEL/REPORT"
            ))),
        }
    }
}

/// Run the pull command
pub fn run_pull(context: &Context, path: &Path, version: Option<u32>) -> Result<()> {
    let reports = discover_reports(&io::canonicalize(path)?)?;
    let client = context.client()?;

    for report in &reports {
        let bytes = client.pull_report(report.organization(), report.team(), &report.slug(), version)?;
        let written = archive::unpack(&bytes, &report.root)?;
        println!(
            "{} Pulled {}/{}/{} into {} ({} files)",
            "OK".green().bold(),
            report.organization().cyan(),
            report.team().cyan(),
            report.slug().yellow(),
            report.root.display(),
            written.len()
        );
    }
    Ok(())
}

/// Run the clone command
pub fn run_clone(
    context: &Context,
    address: &str,
    version: Option<u32>,
    path: Option<&Path>,
) -> Result<()> {
    let address = ReportAddress::parse(address)?;
    let target = clone_target(&address, path)?;

    let client = context.client()?;
    let bytes = client.pull_report(&address.organization, &address.team, &address.report, version)?;
    let written = archive::unpack(&bytes, &target)?;

    println!(
        "{} Cloned {}/{}/{} into {} ({} files)",
        "OK".green().bold(),
        address.organization.cyan(),
        address.team.cyan(),
        address.report.yellow(),
        target.display(),
        written.len()
    );
    Ok(())
}

/// Directory a clone writes into; must be missing or empty.
fn clone_target(address: &ReportAddress, path: Option<&Path>) -> Result<PathBuf> {
    let target = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&address.report));
    if !io::is_empty_dir(&target)? {
        return Err(CliError::user(format!(
            "Destination '{}' already exists and is not empty",
            target.display()
        )));
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_report_address() {
        let address = ReportAddress::parse("acme/data/q1-numbers").unwrap();
        assert_eq!(address.organization, "acme");
        assert_eq!(address.team, "data");
        assert_eq!(address.report, "q1-numbers");
    }

    #[test]
    fn parse_rejects_incomplete_address() {
        assert!(ReportAddress::parse("acme/data").is_err());
        assert!(ReportAddress::parse("acme//q1").is_err());
        assert!(ReportAddress::parse("a/b/c/d").is_err());
    }

    #[test]
    fn clone_target_defaults_to_report_slug() {
        let address = ReportAddress::parse("acme/data/q1-numbers-missing-dir").unwrap();
        let target = clone_target(&address, None).unwrap();
        assert_eq!(target, PathBuf::from("q1-numbers-missing-dir"));
    }

    #[test]
    fn clone_refuses_non_empty_target() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("existing.txt"), "x").unwrap();
        let address = ReportAddress::parse("acme/data/q1").unwrap();

        let err = clone_target(&address, Some(temp.path())).unwrap_err();
        assert!(err.to_string().contains("not empty"));
    }

    #[test]
    fn clone_accepts_empty_target() {
        let temp = TempDir::new().unwrap();
        let address = ReportAddress::parse("acme/data/q1").unwrap();
        assert!(clone_target(&address, Some(temp.path())).is_ok());
    }
}
