//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - An in-process app driven with `tower::ServiceExt::oneshot`
//! - Authentication helpers (signup, login, bearer headers)
//! - Postgres fixtures, active only when `TEST_DATABASE_URL` is set

#![allow(dead_code)]

pub mod database;

pub use auth_helpers::*;
pub use database::*;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use blog_api::backend::routes::create_router;
use blog_api::backend::server::{AppState, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Config with the cheapest bcrypt cost so tests stay fast
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::new(TEST_JWT_SECRET);
    config.bcrypt_cost = 4;
    config
}

/// Status and parsed JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// The full router over a fresh in-memory store
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_state(AppState::in_memory(&test_config()))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }
}
