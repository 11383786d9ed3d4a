/**
 * Postgres Store
 *
 * `PgStore` implements the repositories on a sqlx `PgPool`. Uniqueness of
 * email and phone is enforced by named unique constraints
 * (`users_email_key`, `users_phone_key`), and post mutations are single
 * statements filtered on both `id` and `author_id`.
 *
 * The schema lives in `migrations/` and is applied by `PgStore::migrate`.
 */
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    NewPost, NewUser, PostPage, PostRepository, PostWithAuthor, StoreError, User, UserRepository,
};
use crate::shared::{PageRequest, PostChanges, PostSort, SortDirection, SortField};

const MAX_CONNECTIONS: u32 = 10;

/// Columns selected for a post joined with its author. Expects the post
/// relation aliased as `p` and users as `u`.
const POST_WITH_AUTHOR_COLUMNS: &str = r#"
    p.id, p.title, p.content, p.author_id, p.created_at, p.updated_at,
    u.name AS author_name, u.email AS author_email
"#;

/// Postgres-backed user and post repositories
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool to `database_url`
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Run the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Translate a unique violation into `StoreError::Conflict`
fn map_user_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let field = match db_err.constraint() {
                Some("users_phone_key") => "phone",
                _ => "email",
            };
            return StoreError::Conflict { field };
        }
    }
    StoreError::Database(err)
}

/// Translate a missing author (foreign key violation) into `StoreError::AuthorNotFound`
fn map_post_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StoreError::AuthorNotFound
        }
        _ => StoreError::Database(err),
    }
}

fn order_by_clause(sort: PostSort) -> String {
    let column = match sort.field {
        SortField::CreatedAt => "p.created_at",
        SortField::UpdatedAt => "p.updated_at",
        SortField::Title => "p.title",
    };
    let direction = match sort.direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    format!("{column} {direction}, p.id {direction}")
}

#[async_trait]
impl UserRepository for PgStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, phone, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.phone)
        .bind(&new_user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_insert_error)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl PostRepository for PgStore {
    async fn create_post(&self, new_post: NewPost) -> Result<PostWithAuthor, StoreError> {
        let sql = format!(
            r#"
            WITH p AS (
                INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $5)
                RETURNING *
            )
            SELECT {POST_WITH_AUTHOR_COLUMNS}
            FROM p JOIN users u ON u.id = p.author_id
            "#
        );
        let post = sqlx::query_as::<_, PostWithAuthor>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new_post.title)
            .bind(&new_post.content)
            .bind(new_post.author_id)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(map_post_insert_error)?;

        Ok(post)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<PostWithAuthor>, StoreError> {
        let sql = format!(
            r#"
            SELECT {POST_WITH_AUTHOR_COLUMNS}
            FROM posts p JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#
        );
        let post = sqlx::query_as::<_, PostWithAuthor>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    async fn list_posts(&self, request: &PageRequest) -> Result<PostPage, StoreError> {
        let sql = format!(
            r#"
            SELECT {POST_WITH_AUTHOR_COLUMNS}
            FROM posts p JOIN users u ON u.id = p.author_id
            ORDER BY {}
            LIMIT $1 OFFSET $2
            "#,
            order_by_clause(request.sort)
        );
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let posts = sqlx::query_as::<_, PostWithAuthor>(&sql)
            .bind(i64::from(request.limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(PostPage {
            posts,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn update_post_by_author(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<PostWithAuthor>, StoreError> {
        let sql = format!(
            r#"
            WITH p AS (
                UPDATE posts
                SET title = COALESCE($3, title),
                    content = COALESCE($4, content),
                    updated_at = $5
                WHERE id = $1 AND author_id = $2
                RETURNING *
            )
            SELECT {POST_WITH_AUTHOR_COLUMNS}
            FROM p JOIN users u ON u.id = p.author_id
            "#
        );
        let post = sqlx::query_as::<_, PostWithAuthor>(&sql)
            .bind(id)
            .bind(author_id)
            .bind(changes.title)
            .bind(changes.content)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    async fn delete_post_by_author(&self, id: Uuid, author_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
            .bind(id)
            .bind(author_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
