#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use clap::Parser;
use logquery_http::{serve, ServerConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Log ingestion and search service backed by Elasticsearch.
#[derive(Parser)]
#[command(name = "logquery", version)]
struct Cli {
    #[arg(long, env = "LOGQUERY_BIND_ADDR")]
    bind_addr: Option<String>,
    /// Elasticsearch node URL
    #[arg(long, env = "ELASTICSEARCH_NODE")]
    elasticsearch_node: Option<String>,
    /// Per-call timeout for log store requests
    #[arg(
        long,
        env = "LOGQUERY_STORE_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    store_timeout_secs: Option<u64>,
    /// Directory of a built browser UI to serve at /
    #[arg(long, env = "LOGQUERY_UI_DIR")]
    ui_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(addr) = self.bind_addr.filter(|a| !a.is_empty()) {
            config.bind_addr = addr;
        }
        if let Some(node) = self.elasticsearch_node.filter(|n| !n.is_empty()) {
            config.elasticsearch_node = node;
        }
        if let Some(secs) = self.store_timeout_secs {
            config.store_timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = self.ui_dir {
            config.ui_dir = Some(dir);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.apply(ServerConfig::from_env()?);
    serve(config).await
}
