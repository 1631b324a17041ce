//! Repository for the `posts` table.

use blogpad_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::post::{Post, PostDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, category, tags, created_at, updated_at";

const ENTITY: &str = "Post";

fn not_found(id: DbId) -> RepoError {
    RepoError::NotFound { entity: ENTITY, id }
}

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// List every post in id order. An empty table yields an empty `Vec`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY id");
        let posts = sqlx::query_as::<_, Post>(&query).fetch_all(pool).await?;
        Ok(posts)
    }

    /// Insert a new post, returning the created row.
    ///
    /// The store assigns `id`, `created_at` and `updated_at`; both timestamps
    /// come from the same `NOW()` so they are equal on a fresh row.
    pub async fn create(pool: &PgPool, input: &PostDraft) -> Result<Post, RepoError> {
        let query = format!(
            "INSERT INTO posts (title, content, category, tags)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.tags)
            .fetch_one(pool)
            .await?;
        Ok(post)
    }

    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Post, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replace the four mutable fields of a post, returning the new `updated_at`.
    ///
    /// The timestamp is computed by the store and always moves forward, even
    /// if the server clock steps back between writes. There is no version
    /// check: a concurrent writer between a caller's read and this write is
    /// silently overwritten.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PostDraft,
    ) -> Result<Timestamp, RepoError> {
        sqlx::query_scalar::<_, Timestamp>(
            "UPDATE posts SET
                title = $2,
                content = $3,
                category = $4,
                tags = $5,
                updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING updated_at",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.category)
        .bind(&input.tags)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Permanently delete a post by ID.
    ///
    /// Deleting an id that does not exist (including one already deleted)
    /// reports `NotFound`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
