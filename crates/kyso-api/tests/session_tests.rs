//! Session persistence tests

use kyso_api::{DEFAULT_API_URL, Error, Session};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn load_returns_none_without_file() {
    let dir = TempDir::new().unwrap();
    let session = Session::load(&dir.path().join("auth.json")).unwrap();
    assert_eq!(session, None);
}

#[test]
fn save_then_load_keeps_url_and_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".kyso").join("auth.json");

    let mut session = Session::new("https://kyso.example/api/v1", "opaque-token");
    session.username = Some("jane".into());
    session.save(&path).unwrap();

    let loaded = Session::load(&path).unwrap().unwrap();
    assert_eq!(loaded, session);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"kysoInstallUrl\""));
}

#[test]
fn require_fails_when_logged_out() {
    let dir = TempDir::new().unwrap();
    let err = Session::require(&dir.path().join("auth.json")).unwrap_err();
    assert!(matches!(err, Error::NotLoggedIn));
}

#[test]
fn clear_removes_session_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.json");
    Session::new(DEFAULT_API_URL, "t").save(&path).unwrap();

    assert!(Session::clear(&path).unwrap());
    assert!(!path.exists());
    assert!(!Session::clear(&path).unwrap());
}

#[test]
fn corrupt_session_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Session::load(&path).is_err());
}
