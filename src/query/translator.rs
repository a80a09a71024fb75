//! Converts caller filters and free-text strings into [`SearchQuery`] documents.
//!
//! Two independent modes:
//! - structured: every filter becomes one clause of a `bool.must` conjunction;
//! - global: a single `query_string` predicate over all fields.

use crate::error::{LogQueryError, Result};
use crate::types::{Filter, FilterValue};

use super::dsl::{Predicate, SearchQuery};

/// Structured mode. Filter order is kept in the emitted clause list but has
/// no effect on matching.
pub fn translate_filters(filters: &[Filter]) -> Result<SearchQuery> {
    let mut must = Vec::with_capacity(filters.len());
    for filter in filters {
        if let Some(clause) = translate_filter(filter)? {
            must.push(clause);
        }
    }

    let query = SearchQuery::new(Predicate::Bool { must });
    tracing::debug!(
        filters = filters.len(),
        query = %query.to_body(),
        "Translated structured search"
    );
    Ok(query)
}

/// Global mode. Returns `None` for an empty string: callers must skip the
/// store call and answer with no hits.
pub fn translate_global(text: &str) -> Option<SearchQuery> {
    if text.is_empty() {
        return None;
    }
    let query = SearchQuery::new(Predicate::QueryString {
        query: text.to_string(),
    });
    tracing::debug!(query = %query.to_body(), "Translated global search");
    Some(query)
}

/// One filter to at most one clause. Empty text values are inert.
fn translate_filter(filter: &Filter) -> Result<Option<Predicate>> {
    if !filter.is_valid() {
        return Err(LogQueryError::InvalidFilter(
            "filter field must not be empty".to_string(),
        ));
    }

    if filter.is_timestamp() {
        if !matches!(filter.value, FilterValue::List(_)) {
            return Err(LogQueryError::InvalidFilter(
                "timestamp filter value must be a [start, end] pair".to_string(),
            ));
        }
        // Both bounds empty still yields an unbounded range clause.
        return Ok(Some(Predicate::Range {
            field: filter.field.clone(),
            gte: filter.value.bound(0).cloned(),
            lte: filter.value.bound(1).cloned(),
        }));
    }

    let text = filter.value.as_text().ok_or_else(|| {
        LogQueryError::InvalidFilter(format!(
            "filter on '{}' must have a single string value",
            filter.field
        ))
    })?;
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(Predicate::MatchPhrase {
        field: filter.field.clone(),
        phrase: text.to_string(),
    }))
}
