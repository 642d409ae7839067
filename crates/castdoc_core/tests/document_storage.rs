use castdoc_core::db::open_db_in_memory;
use castdoc_core::{DocumentEditor, FileStorage, SqliteStorage, Storage, StorageError};

#[test]
fn file_storage_writes_and_overwrites_the_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("document.txt");

    let mut storage = FileStorage::new(&path);
    storage.save("first payload").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first payload");

    storage.save("second payload").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second payload");
}

#[test]
fn file_storage_reports_unwritable_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-subdir").join("document.txt");

    let mut storage = FileStorage::new(&path);
    let err = storage.save("dropped payload").unwrap_err();

    match err {
        StorageError::Io { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn editor_over_file_storage_writes_the_joined_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("document.txt");

    let mut editor = DocumentEditor::new(FileStorage::new(&path));
    editor.add_text("Hello, world!");
    editor.add_new_line();
    editor.add_image("picture.jpg");
    editor.save_document().unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Hello, world!\n\n\n[Image: picture.jpg]"
    );
}

#[test]
fn sqlite_storage_persists_rows_with_previews() {
    let conn = open_db_in_memory().unwrap();

    let mut editor = DocumentEditor::new(SqliteStorage::new(&conn));
    editor.add_text("Hello, world!");
    editor.add_new_line();
    editor.add_tab_space();
    editor.add_text("Indented text.");
    editor.save_document().unwrap();

    let storage = editor.storage();
    assert_eq!(storage.saved_count().unwrap(), 1);

    let saved = storage.list_saved().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].content, "Hello, world!\n\n\n\t\nIndented text.");
    assert_eq!(saved[0].preview.as_deref(), Some("Hello, world! Indented text."));
    assert!(saved[0].saved_at > 0);
}

#[test]
fn sqlite_storage_stores_empty_payload_with_null_preview() {
    let conn = open_db_in_memory().unwrap();

    let mut editor = DocumentEditor::new(SqliteStorage::new(&conn));
    editor.save_document().unwrap();

    let saved = editor.storage().list_saved().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].content, "");
    assert_eq!(saved[0].preview, None);
}

#[test]
fn sqlite_storage_keeps_one_row_per_save() {
    let conn = open_db_in_memory().unwrap();

    let mut storage = SqliteStorage::new(&conn);
    storage.save("first").unwrap();
    storage.save("second").unwrap();

    assert_eq!(storage.saved_count().unwrap(), 2);
    let contents: Vec<String> = storage
        .list_saved()
        .unwrap()
        .into_iter()
        .map(|saved| saved.content)
        .collect();
    assert!(contents.contains(&"first".to_string()));
    assert!(contents.contains(&"second".to_string()));
}
