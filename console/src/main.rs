use anyhow::Result;
use clap::Parser;
use docsearch::{remove_duplicates, DocId, DocumentStatus, RequestQueue, SearchServer};
use docsearch_console::load_documents;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Rank documents against free-text queries with TF-IDF", long_about = None)]
struct Args {
    /// Input path (.json / .jsonl file or a directory of them)
    #[arg(long)]
    input: PathBuf,
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Only return documents with this status (actual, irrelevant, banned, removed)
    #[arg(long, default_value = "actual")]
    status: DocumentStatus,
    /// Remove documents whose term sets repeat a lower id before querying
    #[arg(long, default_value_t = false)]
    dedup: bool,
    /// Match queries against this document instead of ranking
    #[arg(long)]
    match_id: Option<DocId>,
    /// Print results as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Queries; a minus prefix excludes a word
    queries: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut server = SearchServer::new(&args.stop_words)?;
    load_documents(&mut server, &args.input)?;
    if args.dedup {
        let removed = remove_duplicates(&mut server);
        tracing::info!(removed = removed.len(), remaining = server.document_count(), "duplicates removed");
    }

    if let Some(doc_id) = args.match_id {
        for query in &args.queries {
            let (words, status) = server.match_document(query, doc_id)?;
            if args.json {
                println!("{}", serde_json::json!({ "query": query, "document_id": doc_id, "words": words, "status": status }));
            } else {
                println!("{query}: document_id = {doc_id}, status = {status:?}, words = [{}]", words.join(" "));
            }
        }
        return Ok(());
    }

    let mut queue = RequestQueue::new(&server);
    for query in &args.queries {
        let docs = match queue.add_find_request_by_status(query, args.status) {
            Ok(docs) => docs,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "query rejected");
                continue;
            }
        };
        if args.json {
            println!("{}", serde_json::json!({ "query": query, "results": docs }));
        } else {
            println!("{query}:");
            for doc in &docs {
                println!("  {doc}");
            }
        }
    }
    tracing::info!(no_result_requests = queue.no_result_requests(), "done");
    Ok(())
}
