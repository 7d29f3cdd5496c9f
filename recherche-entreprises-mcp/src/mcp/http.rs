//! HTTP transport: one JSON-RPC message per POST.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{McpState, dispatch_bytes};

/// Build the HTTP router, with the MCP endpoint mounted at `mcp_path`
pub fn router(state: Arc<McpState>, mcp_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mcp_path = if mcp_path.starts_with('/') {
        mcp_path.to_string()
    } else {
        format!("/{}", mcp_path)
    };

    Router::new()
        .route("/health", get(health_handler))
        .route(&mcp_path, post(mcp_message_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// MCP message handler - handles JSON-RPC style requests
///
/// The body is taken raw so malformed JSON gets a JSON-RPC parse error
/// rather than an extractor rejection.
async fn mcp_message_handler(State(state): State<Arc<McpState>>, body: Bytes) -> Response {
    match dispatch_bytes(&state, &body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::super::test_support::state_for;
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(state_for("http://127.0.0.1:9")), "mcp")
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_tools_list_over_http() {
        let response = app()
            .oneshot(post_json(
                "/mcp",
                json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["result"]["tools"][0]["name"], "search_companies");
    }

    #[tokio::test]
    async fn test_notification_is_accepted_without_body() {
        let response = app()
            .oneshot(post_json(
                "/mcp",
                json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_invalid_json_gets_parse_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], serde_json::Value::Null);
        assert_eq!(body["error"]["code"], super::super::PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_still_served() {
        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .body(Body::from(r#"{"jsonrpc":"2.0","id":6,"method":"ping"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["id"], 6);
        assert_eq!(body["result"], json!({}));
    }

    #[tokio::test]
    async fn test_malformed_request_gets_jsonrpc_error() {
        let response = app()
            .oneshot(post_json("/mcp", json!({ "id": 4, "params": {} })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], 4);
        assert_eq!(body["error"]["code"], super::super::INVALID_REQUEST);
    }
}
