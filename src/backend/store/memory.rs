/**
 * In-Memory Store
 *
 * A `MemoryStore` keeps users and posts in hash maps behind a single
 * `tokio::sync::RwLock`. Every write holds the write lock for its whole
 * check-and-mutate sequence, which gives the same guarantees as the unique
 * constraints and conditional statements of the Postgres store.
 *
 * Used when `DATABASE_URL` is not set and by the test suite.
 */
use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    NewPost, NewUser, Post, PostPage, PostRepository, PostWithAuthor, StoreError, User,
    UserRepository,
};
use crate::shared::{PageRequest, PostChanges, PostSort, SortDirection, SortField};

#[derive(Debug, Clone)]
struct StoredPost {
    post: Post,
    /// Insertion order, used as the tie-breaker when sort keys are equal
    seq: u64,
}

#[derive(Debug, Default)]
struct MemoryState {
    users: HashMap<Uuid, User>,
    posts: HashMap<Uuid, StoredPost>,
    next_seq: u64,
}

impl MemoryState {
    fn with_author(&self, post: &Post) -> Option<PostWithAuthor> {
        let author = self.users.get(&post.author_id)?;
        Some(PostWithAuthor {
            post: post.clone(),
            author_name: author.name.clone(),
            author_email: author.email.clone(),
        })
    }
}

/// Thread-safe in-memory user and post repositories
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare_posts(a: &StoredPost, b: &StoredPost, sort: PostSort) -> Ordering {
    let primary = match sort.field {
        SortField::CreatedAt => a.post.created_at.cmp(&b.post.created_at),
        SortField::UpdatedAt => a.post.updated_at.cmp(&b.post.updated_at),
        SortField::Title => a.post.title.cmp(&b.post.title),
    };
    let ordering = primary.then_with(|| a.seq.cmp(&b.seq));
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::Conflict { field: "email" });
        }
        if state.users.values().any(|u| u.phone == new_user.phone) {
            return Err(StoreError::Conflict { field: "phone" });
        }

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create_post(&self, new_post: NewPost) -> Result<PostWithAuthor, StoreError> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: new_post.title,
            content: new_post.content,
            author_id: new_post.author_id,
            created_at: now,
            updated_at: now,
        };
        let with_author = state
            .with_author(&post)
            .ok_or(StoreError::AuthorNotFound)?;

        state.next_seq += 1;
        let seq = state.next_seq;
        state.posts.insert(post.id, StoredPost { post, seq });
        Ok(with_author)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<PostWithAuthor>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .posts
            .get(&id)
            .and_then(|stored| state.with_author(&stored.post)))
    }

    async fn list_posts(&self, request: &PageRequest) -> Result<PostPage, StoreError> {
        let state = self.state.read().await;

        let mut stored: Vec<&StoredPost> = state.posts.values().collect();
        stored.sort_by(|a, b| compare_posts(a, b, request.sort));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let posts = stored
            .into_iter()
            .skip(offset)
            .take(request.limit as usize)
            .filter_map(|s| state.with_author(&s.post))
            .collect();

        Ok(PostPage {
            posts,
            total: state.posts.len() as u64,
        })
    }

    async fn update_post_by_author(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<PostWithAuthor>, StoreError> {
        let mut state = self.state.write().await;

        let Some(stored) = state
            .posts
            .get_mut(&id)
            .filter(|stored| stored.post.author_id == author_id)
        else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            stored.post.title = title;
        }
        if let Some(content) = changes.content {
            stored.post.content = content;
        }
        stored.post.updated_at = Utc::now();
        let post = stored.post.clone();

        Ok(state.with_author(&post))
    }

    async fn delete_post_by_author(&self, id: Uuid, author_id: Uuid) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let owned = state
            .posts
            .get(&id)
            .is_some_and(|stored| stored.post.author_id == author_id);
        if owned {
            state.posts.remove(&id);
        }
        Ok(owned)
    }
}
