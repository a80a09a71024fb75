use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware::Next,
    response::Response,
};

/// Bodies sent without a content type (plain `curl -d`) are read as JSON.
pub async fn default_json_content_type(mut request: Request, next: Next) -> Response {
    let has_body = request.method() == Method::POST || request.method() == Method::PUT;
    if has_body && !request.headers().contains_key(CONTENT_TYPE) {
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    next.run(request).await
}
