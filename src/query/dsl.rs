use serde_json::{json, Map, Value};

/// Predicate tree understood by the log store's JSON query DSL.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Conjunction. An empty `must` list matches every document.
    Bool { must: Vec<Predicate> },
    /// Inclusive range; a `None` bound leaves that side open.
    Range {
        field: String,
        gte: Option<Value>,
        lte: Option<Value>,
    },
    /// Field text must contain `phrase` contiguously.
    MatchPhrase { field: String, phrase: String },
    /// Free text parsed by the backend's query-string syntax over all fields.
    QueryString { query: String },
}

impl Predicate {
    pub fn to_json(&self) -> Value {
        match self {
            Predicate::Bool { must } => {
                let clauses: Vec<Value> = must.iter().map(Predicate::to_json).collect();
                json!({ "bool": { "must": clauses } })
            }
            Predicate::Range { field, gte, lte } => {
                let mut bounds = Map::new();
                if let Some(v) = gte {
                    bounds.insert("gte".to_string(), v.clone());
                }
                if let Some(v) = lte {
                    bounds.insert("lte".to_string(), v.clone());
                }
                let mut range = Map::new();
                range.insert(field.clone(), Value::Object(bounds));
                json!({ "range": range })
            }
            Predicate::MatchPhrase { field, phrase } => {
                let mut clause = Map::new();
                clause.insert(field.clone(), Value::String(phrase.clone()));
                json!({ "match_phrase": clause })
            }
            Predicate::QueryString { query } => {
                json!({ "query_string": { "query": query } })
            }
        }
    }
}

/// A complete search request for one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: Predicate,
}

impl SearchQuery {
    pub fn new(query: Predicate) -> Self {
        SearchQuery { query }
    }

    /// Request body sent to the store's search endpoint.
    pub fn to_body(&self) -> Value {
        json!({ "query": self.query.to_json() })
    }
}
