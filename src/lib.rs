//! # Logquery
//!
//! Query translation for log search. Callers hand in field filters or a
//! free-text string; this crate turns them into a query document for an
//! Elasticsearch-compatible store and relays the hits back unmodified.
//!
//! The HTTP surface lives in the companion `logquery-http` crate and the
//! binary in `logquery-server`.
//!
//! ## Quick start
//!
//! ```rust
//! use logquery::query::translate_filters;
//! use logquery::Filter;
//! use serde_json::json;
//!
//! # fn main() -> logquery::Result<()> {
//! let filters = vec![
//!     Filter::text("level", "ERROR"),
//!     Filter::text("resourceId", ""), // empty values are ignored
//!     Filter::timestamp_range(Some("2023-09-10T00:00:00Z"), None),
//! ];
//! let query = translate_filters(&filters)?;
//! assert_eq!(
//!     query.to_body(),
//!     json!({"query": {"bool": {"must": [
//!         {"match_phrase": {"level": "ERROR"}},
//!         {"range": {"timestamp": {"gte": "2023-09-10T00:00:00Z"}}}
//!     ]}}})
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Dependencies | Use case |
//! |---------|-------------|----------|
//! | `axum-support` | axum | [`LogQueryError`] implements `IntoResponse` |

pub mod error;
pub mod query;
pub mod store;
pub mod types;

pub use error::{LogQueryError, Result};
pub use query::{translate_filters, translate_global, Predicate, SearchQuery};
pub use store::{ElasticsearchStore, LogStore};
pub use types::*;
