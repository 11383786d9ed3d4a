//! Postgres store integration tests
//!
//! These run against a real database and are skipped unless
//! `TEST_DATABASE_URL` is set. Everything runs in one test so concurrent
//! test threads never truncate each other's data.

use assert_matches::assert_matches;
use blog_api::backend::store::{NewPost, NewUser, PostRepository, StoreError, UserRepository};
use blog_api::shared::{PageRequest, PostChanges, PostSort};
use crate::common::{cleanup_test_data, test_pg_store};
use uuid::Uuid;

fn new_user(email: &str, phone: &str) -> NewUser {
    NewUser {
        name: "Tester".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        password_hash: "$2b$04$hash".to_string(),
    }
}

#[tokio::test]
async fn test_postgres_store() {
    let Some(store) = test_pg_store().await else {
        return;
    };

    // users: uniqueness on email and phone
    let owner = store
        .create_user(new_user("owner@example.com", "+10000000001"))
        .await
        .unwrap();
    assert_matches!(
        store
            .create_user(new_user("owner@example.com", "+10000000002"))
            .await,
        Err(StoreError::Conflict { field: "email" })
    );
    assert_matches!(
        store
            .create_user(new_user("other@example.com", "+10000000001"))
            .await,
        Err(StoreError::Conflict { field: "phone" })
    );
    let other = store
        .create_user(new_user("other@example.com", "+10000000002"))
        .await
        .unwrap();

    let found = store
        .find_user_by_email("owner@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, owner.id);
    assert!(store.find_user_by_id(Uuid::new_v4()).await.unwrap().is_none());

    // posts: create, paginate, conditional update and delete
    assert_matches!(
        store
            .create_post(NewPost {
                title: "Orphan".to_string(),
                content: "content".to_string(),
                author_id: Uuid::new_v4(),
            })
            .await,
        Err(StoreError::AuthorNotFound)
    );

    let mut ids = Vec::new();
    for i in 0..12 {
        let post = store
            .create_post(NewPost {
                title: format!("Post {i:02}"),
                content: "content".to_string(),
                author_id: owner.id,
            })
            .await
            .unwrap();
        assert_eq!(post.author_email, "owner@example.com");
        ids.push(post.post.id);
    }

    let request = PageRequest::new(2, 5, "title".parse::<PostSort>().unwrap()).unwrap();
    let page = store.list_posts(&request).await.unwrap();
    assert_eq!(page.total, 12);
    let titles: Vec<_> = page.posts.iter().map(|p| p.post.title.as_str()).collect();
    assert_eq!(titles, ["Post 05", "Post 06", "Post 07", "Post 08", "Post 09"]);

    let changes = PostChanges {
        title: Some("Edited".to_string()),
        content: None,
    };
    assert!(store
        .update_post_by_author(ids[0], other.id, changes.clone())
        .await
        .unwrap()
        .is_none());
    let updated = store
        .update_post_by_author(ids[0], owner.id, changes)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.post.title, "Edited");
    assert_eq!(updated.post.content, "content");
    assert!(updated.post.updated_at >= updated.post.created_at);

    assert!(!store.delete_post_by_author(ids[1], other.id).await.unwrap());
    assert!(store.delete_post_by_author(ids[1], owner.id).await.unwrap());
    assert!(store.find_post(ids[1]).await.unwrap().is_none());

    cleanup_test_data(&store).await;
}
