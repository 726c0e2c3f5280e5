use ghprofile::util::config::Credentials;

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let creds = Credentials {
        access_token: "gho_testtoken123".into(),
    };
    creds.save(Some(&path)).unwrap();

    let loaded = Credentials::load(Some(&path)).unwrap();
    assert_eq!(loaded, Some(creds));
}

#[test]
fn test_missing_file_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    let loaded = Credentials::load(Some(&path)).unwrap();
    assert_eq!(loaded, None);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dir").join("config.json");

    let creds = Credentials {
        access_token: "gho_nested".into(),
    };
    creds.save(Some(&path)).unwrap();
    assert!(path.exists());
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(Credentials::load(Some(&path)).is_err());
}

#[cfg(unix)]
#[test]
fn test_credential_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let creds = Credentials {
        access_token: "gho_perms".into(),
    };
    creds.save(Some(&path)).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
