//! SQLite pool, schema bootstrap, and the article queries.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::{Article, NewArticle};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `config.database_url`, creating the backing file if it
/// does not exist yet.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the articles table if it does not exist. Idempotent; called once at
/// startup before the router is built.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL
        )
        "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

/// Storage-access object handed to handlers through [`crate::state::AppState`].
/// Owns the row lifecycle; handlers keep no reference beyond a single request.
#[derive(Clone)]
pub struct ArticleStore {
    pool: SqlitePool,
}

impl ArticleStore {
    pub fn new(pool: SqlitePool) -> Self {
        ArticleStore { pool }
    }

    /// All articles in insertion (id) order. An empty table yields an empty vec.
    pub async fn list(&self) -> Result<Vec<Article>, AppError> {
        let sql = "SELECT id, title, content FROM articles ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Article>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Insert one article; the storage layer assigns the id. Returns the
    /// created row.
    pub async fn insert(&self, article: &NewArticle) -> Result<Article, AppError> {
        let sql = "INSERT INTO articles (title, content) VALUES (?1, ?2) RETURNING id, title, content";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Article>(sql)
            .bind(&article.title)
            .bind(&article.content)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}
