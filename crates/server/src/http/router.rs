use super::handlers::comments;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState, allowed_origins: &str) -> Router {
    Router::new()
        .route(
            "/posts/:post_id/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let any = || {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_origin(Any)
            .allow_headers(Any)
    };

    if allowed_origins == "*" {
        return any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS config is invalid or empty, falling back to allow ANY.");
        any()
    } else {
        tracing::info!("CORS enabled for origins: {:?}", origins);
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_origin(origins)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use domain::PostId;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use storage::Db;
    use tower::ServiceExt;

    async fn setup() -> (Router, PostId) {
        let db = Db::new("sqlite::memory:").await.unwrap();
        let post = db.create_post("Hello", "First post").await.unwrap();
        (build_router(AppState::new(db), "*"), post)
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp: Response = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn post_comment(post_id: i64, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/posts/{}/comments", post_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_comments(post_id: i64) -> Request<Body> {
        Request::builder()
            .uri(format!("/posts/{}/comments", post_id))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_list() {
        let (app, post) = setup().await;

        let (status, body) = send(
            &app,
            post_comment(post.0, json!({ "content": "Nice post!", "author": "alice" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body.as_i64().expect("comment id in body");

        let (status, body) = send(&app, get_comments(post.0)).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["id"], id);
        assert_eq!(list[0]["content"], "Nice post!");
        assert_eq!(list[0]["author"], "alice");
        assert!(list[0]["creationDate"].is_string());
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let (app, post) = setup().await;

        let mut ids = Vec::new();
        for content in ["first", "second", "third"] {
            let (_, body) = send(
                &app,
                post_comment(post.0, json!({ "content": content, "author": "bob" })),
            )
            .await;
            ids.push(body.as_i64().unwrap());
            // 保证时间戳互不相同
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let (_, body) = send(&app, get_comments(post.0)).await;
        let listed: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_i64().unwrap())
            .collect();
        ids.reverse();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn empty_post_lists_empty_array() {
        let (app, post) = setup().await;
        let (status, body) = send(&app, get_comments(post.0)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn missing_post_is_404() {
        let (app, _) = setup().await;

        let (status, body) = send(&app, get_comments(999)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Post not found with id 999");

        let (status, _) = send(
            &app,
            post_comment(999, json!({ "content": "x", "author": "y" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn overlong_content_is_400() {
        let (app, post) = setup().await;
        let (status, body) = send(
            &app,
            post_comment(post.0, json!({ "content": "a".repeat(4097), "author": "y" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");

        let (_, body) = send(&app, get_comments(post.0)).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn malformed_requests_are_rejected_before_the_workflow() {
        let (app, post) = setup().await;

        let (status, _) = send(
            &app,
            Request::builder()
                .uri("/posts/not-a-number/comments")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, post_comment(post.0, json!({ "content": "no author" }))).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn cors_allows_configured_origins() {
        let db = Db::new("sqlite::memory:").await.unwrap();
        let post = db.create_post("Hello", "").await.unwrap();
        let app = build_router(
            AppState::new(db),
            "https://blog.example, https://other.example",
        );

        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/posts/{}/comments", post.0))
                    .header(header::ORIGIN, "https://blog.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://blog.example"
        );
    }
}
