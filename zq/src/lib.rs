//! Client library for the ZincSearch HTTP API
//!
//! ZincSearch exposes a search endpoint per index
//! (`POST /api/{index}/_search`) and a bulk ingest endpoint
//! (`POST /api/_bulkv2`), both behind HTTP basic auth. This crate
//! provides a typed request DSL for the search body, a thin async
//! client over both endpoints, and helpers for the `YYYYMM-` monthly
//! index naming convention.
//!
//! # Example
//!
//! ```no_run
//! use zq::{SearchRequest, ZincClient};
//!
//! # async fn demo() -> zq::Result<()> {
//! let client = ZincClient::new("http://localhost:4080", "admin", "secret")?;
//! let request = SearchRequest::query_string("LzHouston:>100")
//!     .sort_by("-@timestamp")
//!     .page(0, 100);
//! let response = client.search("202212-ErcotSPP", &request).await?;
//! println!("{}", response.body);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod format;
pub mod index;
pub mod query;
pub mod record;

pub use client::{RawResponse, ZincClient};
pub use error::{Error, Result};
pub use index::{monthly_index, monthly_index_now};
pub use query::{AggType, Aggregation, QueryParams, SearchRequest, SearchType};
pub use record::BulkRecord;
