//! Bulk ingest payload types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload for `POST /api/_bulkv2`: a batch of flat JSON documents
/// destined for one index. The index name here is the bare name; the
/// client applies the monthly prefix when sending.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BulkRecord {
    pub index: String,
    pub records: Vec<Map<String, Value>>,
}

impl BulkRecord {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, doc: Map<String, Value>) {
        self.records.push(doc);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
