//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{create_user, get_users, health, process_data, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/", get(health))
        // User endpoints
        .route("/api/users", get(get_users).post(create_user))
        // Data processing endpoint
        .route("/api/process-data", post(process_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json_body) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json_body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn app() -> Router {
        create_router(AppState::default())
    }

    #[tokio::test]
    async fn health_returns_200_with_status_fields() {
        let (status, body) = send(app(), Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["environment"], "development");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn health_ignores_query_string() {
        let (status, body) = send(app(), Method::GET, "/?probe=1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn users_listing_count_matches_length() {
        let (status, body) = send(app(), Method::GET, "/api/users", None).await;

        assert_eq!(status, StatusCode::OK);
        let users = body["users"].as_array().unwrap();
        assert_eq!(body["count"], users.len());
        assert_eq!(users[0]["name"], "John Doe");
        assert_eq!(users[1]["email"], "jane@example.com");
    }

    #[tokio::test]
    async fn create_user_returns_201_with_stub_id() {
        let payload = json!({"name": "Test User", "email": "test@example.com"});
        let (status, body) = send(app(), Method::POST, "/api/users", Some(payload)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["id"], 3);
        assert_eq!(body["user"]["name"], "Test User");
        assert_eq!(body["user"]["email"], "test@example.com");
    }

    #[tokio::test]
    async fn create_user_without_email_returns_400() {
        let payload = json!({"name": "Test"});
        let (status, body) = send(app(), Method::POST, "/api/users", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid user data");
    }

    #[tokio::test]
    async fn create_user_with_unparsable_body_returns_400() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn process_data_aggregates_values() {
        let payload = json!({"values": [1, 2, 3, 4, 5]});
        let (status, body) = send(app(), Method::POST, "/api/process-data", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        let result = &body["result"];
        assert_eq!(result["sum"].as_f64().unwrap(), 15.0);
        assert_eq!(result["average"].as_f64().unwrap(), 3.0);
        assert_eq!(result["min"].as_f64().unwrap(), 1.0);
        assert_eq!(result["max"].as_f64().unwrap(), 5.0);
        assert_eq!(result["count"], 5);
        assert_eq!(result["original_values"], json!([1, 2, 3, 4, 5]));
    }

    #[tokio::test]
    async fn process_data_empty_list_is_all_zeros() {
        let payload = json!({"values": []});
        let (status, body) = send(app(), Method::POST, "/api/process-data", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        let result = &body["result"];
        assert_eq!(result["sum"].as_f64().unwrap(), 0.0);
        assert_eq!(result["average"].as_f64().unwrap(), 0.0);
        assert_eq!(result["min"].as_f64().unwrap(), 0.0);
        assert_eq!(result["max"].as_f64().unwrap(), 0.0);
        assert_eq!(result["count"], 0);
    }

    #[tokio::test]
    async fn process_data_without_values_returns_400() {
        let payload = json!({"data": [1, 2, 3]});
        let (status, body) = send(app(), Method::POST, "/api/process-data", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No values provided");
    }

    #[tokio::test]
    async fn process_data_with_non_numeric_element_returns_400() {
        let payload = json!({"values": [1, "a", 3]});
        let (status, body) = send(app(), Method::POST, "/api/process-data", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Values must be a list of numbers");
    }

    #[tokio::test]
    async fn process_data_with_boolean_returns_400() {
        let payload = json!({"values": [1, true, 3]});
        let (status, body) = send(app(), Method::POST, "/api/process-data", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Values must be a list of numbers");
    }
}
