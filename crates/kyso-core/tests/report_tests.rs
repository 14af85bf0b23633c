use kyso_core::{Error, discover_reports};
use kyso_test_utils::TestReport;
use pretty_assertions::assert_eq;

#[test]
fn test_single_report() {
    let report = TestReport::new();
    report.write_json_config("acme", "data", "Quarterly Numbers");

    let reports = discover_reports(report.root()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].root, report.root());
    assert_eq!(reports[0].slug(), "quarterly-numbers");
    assert_eq!(reports[0].organization(), "acme");
    assert_eq!(reports[0].team(), "data");
}

#[test]
fn test_meta_report_expands_sub_reports_and_inherits() {
    let report = TestReport::new();
    report.write(
        "kyso.yaml",
        "organization: acme\nteam: data\ntitle: Bundle\ntype: meta\nreports:\n  - first\n  - second\n",
    );
    report.write("first/kyso.yaml", "title: First\n");
    report.write_yaml_config("second", "acme", "ops", "Second");

    let reports = discover_reports(report.root()).unwrap();
    let summary: Vec<_> = reports
        .iter()
        .map(|r| (r.slug(), r.organization().to_string(), r.team().to_string()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("first".to_string(), "acme".to_string(), "data".to_string()),
            ("second".to_string(), "acme".to_string(), "ops".to_string()),
        ]
    );
}

#[test]
fn test_missing_sub_report_config_fails() {
    let report = TestReport::new();
    report.write(
        "kyso.yaml",
        "organization: acme\nteam: data\ntitle: Bundle\ntype: meta\nreports:\n  - ghost\n",
    );

    let err = discover_reports(report.root()).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }), "got {err:?}");
}

#[test]
fn test_invalid_config_is_rejected() {
    let report = TestReport::new();
    report.write("kyso.json", r#"{"organization": "acme", "title": "No team"}"#);

    let err = discover_reports(report.root()).unwrap_err();
    assert!(matches!(err, Error::ConfigInvalid { .. }), "got {err:?}");
}

#[test]
fn test_nested_meta_is_rejected() {
    let report = TestReport::new();
    report.write(
        "kyso.yaml",
        "organization: acme\nteam: data\ntitle: Outer\ntype: meta\nreports:\n  - inner\n",
    );
    report.write(
        "inner/kyso.yaml",
        "title: Inner\ntype: meta\nreports:\n  - deeper\n",
    );

    let err = discover_reports(report.root()).unwrap_err();
    assert!(matches!(err, Error::ConfigInvalid { .. }), "got {err:?}");
}
