pub mod ingest;
pub mod search;

pub use ingest::run_ingest;
pub use search::{run_search, SearchOpts};
