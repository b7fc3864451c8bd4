use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Extension type for the per-request correlation id.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Tags every request with a fresh id, exposed to handlers via extensions,
/// to logs via the current span, and to clients via the X-Request-ID header.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    tracing::Span::current().record("request_id", request_id.as_str());

    let mut response = next.run(request).await;

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("X-Request-ID", value);
    }

    response
}
