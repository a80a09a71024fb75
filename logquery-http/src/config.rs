use logquery::error::{LogQueryError, Result};
use logquery::store::elasticsearch::{DEFAULT_NODE, DEFAULT_TIMEOUT};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_BODY_MB: usize = 10;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub elasticsearch_node: String,
    pub store_timeout: Duration,
    pub max_body_mb: usize,
    /// Built browser UI served at `/` when set.
    pub ui_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            elasticsearch_node: DEFAULT_NODE.to_string(),
            store_timeout: DEFAULT_TIMEOUT,
            max_body_mb: DEFAULT_MAX_BODY_MB,
            ui_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional: LOGQUERY_BIND_ADDR (defaults to 0.0.0.0:3000)
    /// Optional: ELASTICSEARCH_NODE (defaults to http://localhost:9200)
    /// Optional: LOGQUERY_STORE_TIMEOUT_SECS (defaults to 30)
    /// Optional: LOGQUERY_MAX_BODY_MB (defaults to 10)
    /// Optional: LOGQUERY_UI_DIR
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = non_empty_var("LOGQUERY_BIND_ADDR").unwrap_or(defaults.bind_addr);
        let elasticsearch_node =
            non_empty_var("ELASTICSEARCH_NODE").unwrap_or(defaults.elasticsearch_node);

        let store_timeout = match parse_var::<u64>("LOGQUERY_STORE_TIMEOUT_SECS")? {
            Some(0) => {
                return Err(LogQueryError::Config(
                    "LOGQUERY_STORE_TIMEOUT_SECS must be greater than zero".into(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.store_timeout,
        };

        let max_body_mb = parse_var::<usize>("LOGQUERY_MAX_BODY_MB")?.unwrap_or(defaults.max_body_mb);
        let ui_dir = non_empty_var("LOGQUERY_UI_DIR").map(PathBuf::from);

        Ok(Self {
            bind_addr,
            elasticsearch_node,
            store_timeout,
            max_body_mb,
            ui_dir,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match non_empty_var(name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| LogQueryError::Config(format!("Invalid {}: {}", name, raw))),
        None => Ok(None),
    }
}
