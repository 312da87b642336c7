//! HTTP test helpers: app construction and request/response plumbing
use super::memory_repo::InMemoryMovieRepository;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use movie_records::server::identity::USER_ID_HEADER;
use movie_records::server::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryMovieRepository>,
}

/// Router backed by a fresh in-memory repository
pub fn build_test_app() -> TestApp {
    let repo = Arc::new(InMemoryMovieRepository::new());
    let router = build_router(AppState::new(repo.clone(), None));
    TestApp { router, repo }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body")
            .to_vec();
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(empty_request(Method::GET, uri)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(empty_request(Method::DELETE, uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(json_request(Method::POST, uri, body, None)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(json_request(Method::PUT, uri, body, None)).await
    }

    /// POST a review as `user`
    pub async fn post_review(
        &self,
        movie_id: &str,
        user: Uuid,
        comment: &str,
        rate: f64,
    ) -> TestResponse {
        let body = serde_json::json!({ "comment": comment, "rate": rate });
        self.send(json_request(
            Method::POST,
            &format!("/movies/{}/reviews", movie_id),
            body,
            Some(user),
        ))
        .await
    }

    /// Create a movie and return its id
    pub async fn create_movie(&self, name: &str) -> String {
        let response = self
            .post_json(
                "/movies",
                serde_json::json!({
                    "name": name,
                    "category": "Drama",
                    "description": format!("About {}", name),
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()["data"]["id"]
            .as_str()
            .expect("created movie has an id")
            .to_string()
    }
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value, user: Option<Uuid>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
