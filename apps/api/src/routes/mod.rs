pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/chat", post(handlers::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ResumeAnalyzer;
    use crate::config::Config;
    use crate::inference::{GenerationProfile, InferenceError, TextGenerator};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct CannedGenerator;

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _profile: &GenerationProfile,
        ) -> Result<String, InferenceError> {
            Ok(format!("canned: {}", prompt.lines().next().unwrap_or("")))
        }
    }

    fn test_router() -> Router {
        let state = AppState {
            analyzer: Arc::new(ResumeAnalyzer::new(Arc::new(CannedGenerator))),
            config: Config {
                inference_endpoint: "http://localhost:8080".to_string(),
                port: 8000,
                rust_log: "info".to_string(),
            },
        };
        build_router(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resumelens-api");
    }

    #[tokio::test]
    async fn test_analyze_missing_file_is_400() {
        let response = test_router()
            .oneshot(post_json(
                "/analyze",
                json!({"file_path": "/no/such/resume.pdf"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "FILE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_analyze_empty_path_is_400() {
        let response = test_router()
            .oneshot(post_json("/analyze", json!({"file_path": "  "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_unsupported_extension_is_422() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let response = test_router()
            .oneshot(post_json(
                "/analyze",
                json!({"file_path": file.path().to_str().unwrap()}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_chat_without_context() {
        let response = test_router()
            .oneshot(post_json(
                "/chat",
                json!({"prompt": "How is my skills section?"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], "canned: How is my skills section?");
    }

    #[tokio::test]
    async fn test_chat_empty_prompt_is_400() {
        let response = test_router()
            .oneshot(post_json("/chat", json!({"prompt": ""})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
