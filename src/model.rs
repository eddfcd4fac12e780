//! The article entity and its create payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One persisted article. `id` is assigned by the storage layer on insert,
/// immutable thereafter, and never reused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Create payload: both fields required, non-null.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
}
