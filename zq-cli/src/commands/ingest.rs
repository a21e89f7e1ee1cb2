use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use zq::{BulkRecord, ZincClient};

/// Source for documents to ingest
pub enum DocumentSource {
    FromFile(PathBuf),
    FromStdin,
}

impl DocumentSource {
    pub fn reader(&self) -> io::Result<Box<dyn BufRead + Send>> {
        match self {
            DocumentSource::FromFile(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
            DocumentSource::FromStdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Run ingest command
pub async fn run_ingest(
    url: &str,
    user: &str,
    password: &str,
    index: &str,
    input: Option<&str>,
    batch_size: usize,
) -> Result<()> {
    let source = match input {
        Some(path) => DocumentSource::FromFile(PathBuf::from(path)),
        None => DocumentSource::FromStdin,
    };
    let reader = source
        .reader()
        .with_context(|| format!("Failed to open input {}", input.unwrap_or("stdin")))?;

    let client = ZincClient::new(url, user, password)?;
    let mut batch = BulkRecord::new(index);
    let mut total = 0usize;

    for line_result in reader.lines() {
        let line = line_result.context("Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }

        let doc: serde_json::Value = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse JSON: {}", truncate(&line, 100)))?;
        let doc = doc
            .as_object()
            .context("Each line must be a JSON object")?
            .clone();
        batch.push(doc);

        if batch.len() >= batch_size {
            send_batch(&client, &batch).await?;
            total += batch.len();
            batch.records.clear();
        }
    }

    if !batch.is_empty() {
        send_batch(&client, &batch).await?;
        total += batch.len();
    }

    tracing::info!(docs = total, index, "ingest completed");
    println!("Ingested {} documents into {}", total, index);

    Ok(())
}

async fn send_batch(client: &ZincClient, batch: &BulkRecord) -> Result<()> {
    let resp = client.bulk(batch).await.context("Failed to send batch")?;
    if !resp.is_success() {
        anyhow::bail!("API returned error {}: {}", resp.status, resp.body);
    }
    Ok(())
}

/// Cut `s` to at most `max` bytes without splitting a UTF-8 character.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
