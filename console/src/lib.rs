use anyhow::Result;
use docsearch::{DocId, DocumentStatus, SearchServer};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    pub ratings: Vec<i32>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub added: usize,
    pub rejected: usize,
}

/// Collect `.json` / `.jsonl` files under `input` (or `input` itself when it is a file).
pub fn input_files(input: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
        files.sort();
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}

/// Load every document found under `input`. Documents the engine rejects are logged and skipped;
/// unreadable files and malformed JSON abort the load.
pub fn load_documents(server: &mut SearchServer, input: &Path) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    for file in input_files(input) {
        let docs = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") { read_jsonl(&file)? } else { read_json(&file)? };
        for doc in docs {
            match server.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
                Ok(()) => report.added += 1,
                Err(e) => {
                    tracing::warn!(doc_id = doc.id, error = %e, file = %file.display(), "document rejected");
                    report.rejected += 1;
                }
            }
        }
    }
    tracing::info!(added = report.added, rejected = report.rejected, "loaded documents");
    Ok(report)
}

fn read_jsonl(file: &Path) -> Result<Vec<InputDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let mut docs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        docs.push(serde_json::from_str(&line)?);
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<InputDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr.into_iter().map(serde_json::from_value).collect::<Result<Vec<_>, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => Vec::new(),
    };
    Ok(docs)
}
