use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Logquery API",
        version = "0.1.0",
        description = "Log ingestion plus structured and free-text log search over an Elasticsearch-compatible store.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::logs::ingest_log,
        crate::handlers::search::search,
        crate::handlers::search::global_search,
    ),
    components(schemas(
        crate::dto::SearchRequest,
        crate::dto::GlobalSearchRequest,
        crate::dto::SearchResponse,
        crate::dto::IngestResponse,
        crate::dto::HealthResponse,
    )),
    tags(
        (name = "logs", description = "Log ingestion"),
        (name = "search", description = "Structured and global log search"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
