use docsearch::{DocumentStatus, SearchServer};
use docsearch_console::{input_files, load_documents, LoadReport};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_json_and_jsonl_from_a_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.jsonl"),
        concat!(
            r#"{"id": 0, "text": "white cat and collar", "ratings": [8, -3]}"#, "\n",
            "\n",
            r#"{"id": 1, "text": "fluffy cat fluffy tail", "status": "banned", "ratings": [7, 2, 7]}"#, "\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("b.json"),
        r#"[{"id": 2, "text": "groomed dog", "ratings": [1]}, {"id": 0, "text": "dup id", "ratings": [1]}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    assert_eq!(input_files(dir.path()).len(), 2);

    let mut server = SearchServer::new("and").unwrap();
    let report = load_documents(&mut server, dir.path()).unwrap();
    assert_eq!(report, LoadReport { added: 3, rejected: 1 });
    assert_eq!(server.document(1).unwrap().status, DocumentStatus::Banned);
    assert_eq!(server.document(0).unwrap().rating, 2);
    assert_eq!(server.find_top_documents("cat").unwrap().len(), 1);
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.jsonl");
    fs::write(&file, "{not json}\n").unwrap();
    let mut server = SearchServer::default();
    assert!(load_documents(&mut server, &file).is_err());
}
