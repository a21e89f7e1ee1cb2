//! ZincSearch query DSL types
//!
//! These types model the v1 search request body
//! (`POST /api/{index}/_search`). The server owns validation of the
//! query grammar; this module only guarantees the JSON shape.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root search request body
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchRequest {
    /// Query-language mode understood by the server
    pub search_type: SearchType,

    /// The query to execute
    pub query: QueryParams,

    /// Sort order; a leading `-` on a field name means descending
    #[serde(default)]
    pub sort_fields: Vec<String>,

    /// Starting offset
    #[serde(default)]
    pub from: usize,

    /// Maximum number of results
    pub max_results: usize,

    /// Named aggregations, serialized in insertion order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aggs: IndexMap<String, Aggregation>,

    /// Fields to include in hits; an empty list suppresses `_source`
    #[serde(default, rename = "_source")]
    pub source: Vec<String>,
}

/// Query-language modes accepted by the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Lucene-style query string, e.g. `LzHouston:>100`
    QueryString,
    Match,
    MatchAll,
    MatchPhrase,
    Term,
    Prefix,
    Wildcard,
    Fuzzy,
    DateRange,
}

/// Parameters of the query itself
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QueryParams {
    /// Filter expression (or match text, depending on `search_type`)
    #[serde(default)]
    pub term: String,

    /// Field the term applies to, where the search type needs one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Lower bound on `@timestamp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// Upper bound on `@timestamp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// A single metric aggregation over a numeric field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Aggregation {
    pub agg_type: AggType,
    pub field: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggType {
    Max,
    Min,
    Avg,
    Sum,
    Count,
}

impl SearchRequest {
    /// A query-string search over the whole record, no aggregations,
    /// `_source` suppressed. Matches the service defaults for paging.
    pub fn query_string(term: impl Into<String>) -> Self {
        Self {
            search_type: SearchType::QueryString,
            query: QueryParams {
                term: term.into(),
                ..QueryParams::default()
            },
            sort_fields: Vec::new(),
            from: 0,
            max_results: 100,
            aggs: IndexMap::new(),
            source: Vec::new(),
        }
    }

    /// Append a sort field; prefix with `-` for descending
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_fields.push(field.into());
        self
    }

    /// Set the pagination window
    pub fn page(mut self, from: usize, max_results: usize) -> Self {
        self.from = from;
        self.max_results = max_results;
        self
    }

    /// Add a named metric aggregation
    pub fn agg(
        mut self,
        name: impl Into<String>,
        agg_type: AggType,
        field: impl Into<String>,
    ) -> Self {
        self.aggs.insert(
            name.into(),
            Aggregation {
                agg_type,
                field: field.into(),
            },
        );
        self
    }

    /// Restrict `_source` to the given fields
    pub fn source_fields(mut self, fields: Vec<String>) -> Self {
        self.source = fields;
        self
    }

    /// Constrain matches to a `@timestamp` range
    pub fn time_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.query.start_time = Some(start);
        self.query.end_time = Some(end);
        self
    }
}
