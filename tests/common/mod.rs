#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movies_api::{
    app, AppState, InMemoryMovieStore, Movie, MoviePatch, MovieStore, NewMovie, StoreError,
    YearLimits,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// Wraps a store and counts every statement issued through it.
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryMovieStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MovieStore for CountingStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        self.hit();
        self.inner.list().await
    }

    async fn find(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        self.hit();
        self.inner.find(id).await
    }

    async fn insert(&self, movie: &NewMovie) -> Result<i64, StoreError> {
        self.hit();
        self.inner.insert(movie).await
    }

    async fn update(&self, id: i64, patch: &MoviePatch) -> Result<u64, StoreError> {
        self.hit();
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        self.hit();
        self.inner.delete(id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }
}

/// A store whose every call fails with the same message.
pub struct FailingStore(pub &'static str);

impl FailingStore {
    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Unavailable(self.0.to_string()))
    }
}

#[async_trait]
impl MovieStore for FailingStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        self.fail()
    }

    async fn find(&self, _id: i64) -> Result<Option<Movie>, StoreError> {
        self.fail()
    }

    async fn insert(&self, _movie: &NewMovie) -> Result<i64, StoreError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _patch: &MoviePatch) -> Result<u64, StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fail()
    }
}

/// Build the full application router over `store`, exactly as the server does.
pub fn build_app(store: Arc<dyn MovieStore>) -> Router {
    build_app_with_limit(store, TEST_BODY_LIMIT)
}

pub fn build_app_with_limit(store: Arc<dyn MovieStore>, body_limit: usize) -> Router {
    app(AppState::new(store, YearLimits::default()), body_limit)
}

/// Application over a fresh counting in-memory store; the store handle is returned for inspection.
pub fn counting_app() -> (Router, Arc<CountingStore>) {
    let store = Arc::new(CountingStore::default());
    (build_app(store.clone()), store)
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Body,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some("application/json"), Body::from(json.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some("application/json"), Body::from(json.to_string())).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Names of the fields listed in a validation error body.
pub fn error_fields(json: &serde_json::Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .expect("errors should be an array")
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}
