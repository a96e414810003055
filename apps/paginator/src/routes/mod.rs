pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pagination API
        .route("/api/v1/pagination", post(handlers::handle_paginate))
        .route(
            "/api/v1/pagination/pages/:page_number",
            post(handlers::handle_page_content),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::layout::SkillMeasurerKind;

    fn app() -> Router {
        build_router(AppState::new(Config {
            skill_measurer: SkillMeasurerKind::FixedRow,
            ..Default::default()
        }))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn long_resume() -> Value {
        let experience: Vec<Value> = (0..12)
            .map(|i| {
                json!({
                    "id": format!("exp-{i}"),
                    "title": "Engineer",
                    "company": format!("Company {i}"),
                    "achievements": [
                        "Shipped a pagination engine that splits long skill lists across pages without losing order",
                        "Cut rendering time of multi-page documents by half through caching of font metrics"
                    ]
                })
            })
            .collect();
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "summary": "Engineer who likes well-behaved page breaks.",
            "skills": ["Rust", "Tokio", "Axum", "Serde", "SQL"],
            "experience": experience
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "paginator");
    }

    #[tokio::test]
    async fn test_paginate_returns_pages_and_assignments() {
        let request = post_json(
            "/api/v1/pagination",
            json!({ "resume": long_resume(), "template": { "id": "classic" } }),
        );
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        let total = body["pagination"]["total_pages"].as_u64().unwrap();
        assert!(total >= 2);
        assert_eq!(body["pagination"]["pages"].as_array().unwrap().len() as u64, total);
        assert_eq!(body["pagination"]["pages"][0]["layout"], "single-column");
        assert_eq!(body["assignments"]["header_page"], 1);
        assert_eq!(body["assignments"]["item_pages"]["experience"]["exp-0"], 1);
        assert_eq!(body["assignments"]["item_pages"]["experience"]["exp-11"], total);
    }

    #[tokio::test]
    async fn test_two_column_template() {
        let request = post_json(
            "/api/v1/pagination",
            json!({ "resume": long_resume(), "template": { "layout": "two-column" } }),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let first = &body["pagination"]["pages"][0];
        assert_eq!(first["layout"], "two-column");
        assert_eq!(first["sidebar"][0]["kind"], "skills");
        assert_eq!(first["main"][0]["kind"], "header");
    }

    #[tokio::test]
    async fn test_page_content_projects_one_page() {
        let request = post_json(
            "/api/v1/pagination/pages/2",
            json!({ "resume": long_resume() }),
        );
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page_number"], 2);
        assert_eq!(body["content"]["first_name"], "");
        assert!(!body["content"]["experience"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected() {
        let request = post_json("/api/v1/pagination/pages/0", json!({ "resume": {} }));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_page_beyond_total_is_not_found() {
        let request = post_json(
            "/api/v1/pagination/pages/3",
            json!({ "resume": { "first_name": "Ada" } }),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invalid_template_is_rejected() {
        let request = post_json(
            "/api/v1/pagination",
            json!({ "resume": {}, "template": { "column_gap_px": -4.0 } }),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("column_gap_px"));
    }
}
