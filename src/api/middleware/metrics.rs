//! HTTP metrics middleware feeding the analytics counter

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;

/// Record every completed request in the metrics counter
///
/// Responses with a status of 400 or above also count as errors.
pub async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    state.metrics.record_request(response.status().as_u16());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_requests_are_counted() {
        let state = AppState::default();
        let metrics = Arc::clone(&state.metrics);

        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(
                state.clone(),
                metrics_middleware,
            ))
            .with_state(state);

        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        app.oneshot(
            Request::builder()
                .uri("/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests, 2);
        assert_eq!(snapshot.errors, 1);
    }
}
