//! Posts API integration tests
//!
//! Tests for listing, reading, creating, updating and deleting posts,
//! including the auth and ownership gates.

use axum::http::StatusCode;
use crate::common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

#[tokio::test]
async fn test_create_post() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app
        .post(
            "/api/posts",
            Some(&user.token),
            json!({ "title": "Hello", "content": "First post" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    let post = &response.body["post"];
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["content"], "First post");
    assert_eq!(post["author"]["id"], user.id.to_string());
    assert_eq!(post["author"]["email"], user.email);
    assert_eq!(post["author"]["name"], "Test User");
    assert!(post.get("createdAt").is_some());
    assert!(post.get("updatedAt").is_some());
}

#[tokio::test]
async fn test_create_post_ignores_supplied_author() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let other = create_unique_test_user(&app).await;

    let response = app
        .post(
            "/api/posts",
            Some(&user.token),
            json!({ "title": "Mine", "content": "text", "author": other.id }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["post"]["author"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_create_post_requires_auth() {
    let app = TestApp::new();

    let response = app
        .post("/api/posts", None, json!({ "title": "Hello", "content": "x" }))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let listing = app.get("/api/post", None).await;
    assert_eq!(listing.body["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_create_post_for_vanished_user_is_not_found() {
    let app = TestApp::new();
    let token = app.state.tokens.issue_session(Uuid::new_v4()).unwrap();

    let response = app
        .post(
            "/api/posts",
            Some(&token),
            json!({ "title": "t", "content": "c" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "User not found");

    let listing = app.get("/api/post", None).await;
    assert_eq!(listing.body["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_create_post_validation() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let cases = [
        (json!({ "content": "no title" }), "title"),
        (json!({ "title": "   ", "content": "blank title" }), "title"),
        (json!({ "title": "x".repeat(26), "content": "too long" }), "title"),
        (json!({ "title": "No content" }), "content"),
    ];
    for (body, field) in cases {
        let response = app.post("/api/posts", Some(&user.token), body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(response.body["field"], field);
    }

    let ok = app
        .post(
            "/api/posts",
            Some(&user.token),
            json!({ "title": "x".repeat(25), "content": "exactly 25" }),
        )
        .await;
    assert_eq!(ok.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_get_post() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let post_id = create_test_post(&app, &user, "Readable").await;

    let response = app.get(&format!("/api/post/{post_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["post"]["id"], post_id.to_string());
    assert_eq!(response.body["post"]["author"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = TestApp::new();

    let response = app.get(&format!("/api/post/{}", Uuid::new_v4()), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.get("/api/post/not-a-valid-id", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_list_posts_pagination() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    for i in 1..=25 {
        create_test_post(&app, &user, &format!("Post {i}")).await;
    }

    let first = app.get("/api/post?page=1&limit=10", None).await;
    let second = app.get("/api/post?page=2&limit=10", None).await;
    let third = app.get("/api/post?page=3&limit=10", None).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(
        second.body["pagination"],
        json!({ "page": 2, "limit": 10, "total": 25, "totalPages": 3 })
    );

    let titles = |body: &serde_json::Value| -> Vec<String> {
        body["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect()
    };

    // newest first: page 2 holds posts 15 down to 6
    let expected: Vec<String> = (6..=15).rev().map(|i| format!("Post {i}")).collect();
    assert_eq!(titles(&second.body), expected);
    assert_eq!(titles(&third.body).len(), 5);

    let first_titles: HashSet<String> = titles(&first.body).into_iter().collect();
    assert!(titles(&second.body).iter().all(|t| !first_titles.contains(t)));
}

#[tokio::test]
async fn test_list_posts_defaults_and_sort() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    for title in ["banana", "cherry", "apple"] {
        create_test_post(&app, &user, title).await;
    }

    let response = app.get("/api/post", None).await;
    assert_eq!(response.body["pagination"]["page"], 1);
    assert_eq!(response.body["pagination"]["limit"], 10);
    assert_eq!(response.body["posts"][0]["title"], "apple");

    let response = app.get("/api/post?sort=title", None).await;
    let titles: Vec<&str> = response.body["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["apple", "banana", "cherry"]);
}

#[tokio::test]
async fn test_list_posts_empty_page_beyond_end() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    create_test_post(&app, &user, "Only").await;

    let response = app.get("/api/post?page=5", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["posts"], json!([]));
    assert_eq!(response.body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_list_posts_rejects_bad_query() {
    let app = TestApp::new();
    for uri in [
        "/api/post?page=0",
        "/api/post?page=-1",
        "/api/post?page=abc",
        "/api/post?limit=0",
        "/api/post?limit=101",
        "/api/post?sort=author",
    ] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.body["success"], false);
    }
}

#[tokio::test]
async fn test_update_own_post() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let post_id = create_test_post(&app, &user, "Draft").await;

    let response = app
        .put(
            &format!("/api/posts/{post_id}"),
            Some(&user.token),
            json!({ "title": "Final" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["post"]["title"], "Final");
    assert_eq!(response.body["post"]["content"], "Content of Draft");
    assert_eq!(response.body["post"]["author"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_update_requires_some_field() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let post_id = create_test_post(&app, &user, "Draft").await;

    let response = app
        .put(&format!("/api/posts/{post_id}"), Some(&user.token), json!({}))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_cannot_reassign_author() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let other = create_unique_test_user(&app).await;
    let post_id = create_test_post(&app, &user, "Mine").await;

    let response = app
        .put(
            &format!("/api/posts/{post_id}"),
            Some(&user.token),
            json!({ "content": "still mine", "author": other.id }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["post"]["author"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_non_owner_cannot_update_or_delete() {
    let app = TestApp::new();
    let owner = create_unique_test_user(&app).await;
    let intruder = create_unique_test_user(&app).await;
    let post_id = create_test_post(&app, &owner, "Protected").await;
    let uri = format!("/api/posts/{post_id}");

    let response = app
        .put(&uri, Some(&intruder.token), json!({ "title": "Hacked" }))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["success"], false);

    let response = app.delete(&uri, Some(&intruder.token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.get(&format!("/api/post/{post_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["post"]["title"], "Protected");
}

#[tokio::test]
async fn test_mutations_require_auth() {
    let app = TestApp::new();
    let owner = create_unique_test_user(&app).await;
    let post_id = create_test_post(&app, &owner, "Protected").await;
    let uri = format!("/api/posts/{post_id}");

    let response = app.put(&uri, None, json!({ "title": "x" })).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.delete(&uri, Some("not.a.token")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_gate_runs_before_ownership_gate() {
    let app = TestApp::new();

    // Unknown post without a token: the auth gate answers first
    let response = app
        .delete(&format!("/api/posts/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutating_missing_post_is_not_found() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app
        .put(
            &format!("/api/posts/{}", Uuid::new_v4()),
            Some(&user.token),
            json!({ "title": "x" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.delete("/api/posts/12345", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_own_post() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let post_id = create_test_post(&app, &user, "Temporary").await;

    let response = app
        .delete(&format!("/api/posts/{post_id}"), Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["message"].as_str().is_some());

    let response = app.get(&format!("/api/post/{post_id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .delete(&format!("/api/posts/{post_id}"), Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
