pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::relay::handlers as relay;
use crate::site::handlers as site;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public page
        .route("/", get(site::handle_page))
        .route("/go/:section", get(site::handle_go))
        // Profile API
        .route("/api/v1/profile", get(site::handle_profile))
        // Relay widgets
        .route("/api/v1/assistant/ask", post(relay::handle_ask))
        .route("/api/v1/fit-check", post(relay::handle_fit_check))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmError;
    use crate::profile::Profile;
    use crate::relay::prompts::CONNECTION_ERROR_FALLBACK;
    use crate::relay::testing::StubGenerator;

    fn app_with(generator: Arc<StubGenerator>) -> Router {
        build_router(AppState {
            profile: Arc::new(Profile::embedded().unwrap()),
            generator,
            config: Config::for_tests(),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(StubGenerator::answering("unused")));
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["relay_configured"], true);
    }

    #[tokio::test]
    async fn test_ask_returns_generated_text() {
        let generator = Arc::new(StubGenerator::answering("He ships React and ML."));
        let app = app_with(generator.clone());

        let response = app
            .oneshot(post_json("/api/v1/assistant/ask", json!({ "query": "Stack?" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "query": "Stack?", "response": "He ships React and ML." })
        );
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_ask_failure_still_answers_with_fallback() {
        let generator = Arc::new(StubGenerator::failing(|| LlmError::MissingApiKey));
        let app = app_with(generator);

        let response = app
            .oneshot(post_json("/api/v1/assistant/ask", json!({ "query": "hi" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["response"], CONNECTION_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_empty_inputs_are_rejected_without_calls() {
        let generator = Arc::new(StubGenerator::answering("unused"));

        let response = app_with(generator.clone())
            .oneshot(post_json("/api/v1/assistant/ask", json!({ "query": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");

        let response = app_with(generator.clone())
            .oneshot(post_json("/api/v1/fit-check", json!({ "jd_text": "   " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_fit_check_strips_fences() {
        let generator = Arc::new(StubGenerator::answering("```html<ul><li>React</li></ul>```"));
        let response = app_with(generator)
            .oneshot(post_json("/api/v1/fit-check", json!({ "jd_text": "React dev" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "analysis": "<ul><li>React</li></ul>" })
        );
    }

    #[tokio::test]
    async fn test_fit_check_failure_is_null_analysis() {
        let generator = Arc::new(StubGenerator::failing(|| LlmError::EmptyContent));
        let response = app_with(generator)
            .oneshot(post_json("/api/v1/fit-check", json!({ "jd_text": "React dev" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "analysis": null }));
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_client_error() {
        let generator = Arc::new(StubGenerator::answering("unused"));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assistant/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app_with(generator.clone()).oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_go_redirects() {
        let cases = [
            ("/go/experience", "/#experience"),
            ("/go/Contact", "/#contact"),
            ("/go/nowhere", "/"),
        ];
        for (uri, location) in cases {
            let app = app_with(Arc::new(StubGenerator::answering("unused")));
            let response = app.oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(response.headers()[header::LOCATION], location, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_go_resume_leaves_site() {
        let app = app_with(Arc::new(StubGenerator::answering("unused")));
        let response = app.oneshot(get("/go/resume")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with("https://drive.google.com/"));
    }

    #[tokio::test]
    async fn test_page_is_stable_across_requests() {
        let generator = Arc::new(StubGenerator::answering("unused"));
        let app = app_with(generator);

        let first = app.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert!(first.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let first = body_text(first).await;

        let second = body_text(app.oneshot(get("/")).await.unwrap()).await;
        assert_eq!(first, second);
        assert!(first.contains("Demand Forecasting AI"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = app_with(Arc::new(StubGenerator::answering("unused")));
        let response = app.oneshot(get("/api/v1/nothing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_profile_endpoint_matches_embedded_record() {
        let app = app_with(Arc::new(StubGenerator::answering("unused")));
        let response = app.oneshot(get("/api/v1/profile")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let expected = serde_json::to_value(Profile::embedded().unwrap()).unwrap();
        assert_eq!(body, expected);
    }
}
