//! Request ID middleware for request tracing

use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Assigns a UUID v4 request ID when the client did not send one, and echoes
/// it back on the response.
pub fn request_id_layer() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    let header_name = HeaderName::from_static(X_REQUEST_ID);

    (
        SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid),
        PropagateRequestIdLayer::new(header_name),
    )
}

/// Per-request span carrying the request ID, so handler events can be
/// correlated with the `x-request-id` the client sees.
///
/// Must run inside `SetRequestIdLayer` for the ID to be present.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::get, Router};
    use tower::{ServiceBuilder, ServiceExt};

    #[tokio::test]
    async fn generated_id_is_echoed_back() {
        let (set, propagate) = request_id_layer();
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(ServiceBuilder::new().layer(set).layer(propagate));

        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = resp.headers().get(X_REQUEST_ID).unwrap().to_str().unwrap();
        assert_eq!(id.len(), 36);
    }

    #[tokio::test]
    async fn client_id_is_kept() {
        let (set, propagate) = request_id_layer();
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(ServiceBuilder::new().layer(set).layer(propagate));

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(X_REQUEST_ID, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.headers().get(X_REQUEST_ID).unwrap(), "abc-123");
    }
}
