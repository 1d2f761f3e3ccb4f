use farmdash::session::{FileSessionStore, SessionStore, TOKEN_KEY, USER_KEY};

#[test]
fn test_file_store_survives_new_instance() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let store = FileSessionStore::new(path.clone());
    store.set(TOKEN_KEY, "abc").unwrap();
    store.set(USER_KEY, r#"{"name":"farmer"}"#).unwrap();

    let reopened = FileSessionStore::new(path);
    assert_eq!(reopened.token().unwrap().expose(), "abc");
    assert_eq!(reopened.get(USER_KEY).as_deref(), Some(r#"{"name":"farmer"}"#));
}

#[test]
fn test_instances_observe_each_others_writes() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let a = FileSessionStore::new(path.clone());
    let b = FileSessionStore::new(path);
    a.set(TOKEN_KEY, "abc").unwrap();
    assert!(b.token().is_some());

    b.clear(TOKEN_KEY).unwrap();
    assert!(a.token().is_none());
}

#[test]
fn test_corrupt_file_reads_as_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = FileSessionStore::new(path);
    assert!(store.token().is_none());

    store.set(TOKEN_KEY, "fresh").unwrap();
    assert_eq!(store.token().unwrap().expose(), "fresh");
}

#[test]
fn test_empty_token_is_no_token() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    store.set(TOKEN_KEY, "").unwrap();
    assert!(store.token().is_none());
}
