//! Article list/create handlers.

use crate::error::AppError;
use crate::model::{Article, NewArticle};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(value_type = String, example = "Article created")]
    pub message: &'static str,
}

/// Get all articles, in insertion order.
#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "A list of articles", body = [Article])
    )
)]
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.store.list().await?;
    Ok(Json(articles))
}

/// Create a new article from a JSON body with `title` and `content`.
#[utoipa::path(
    post,
    path = "/articles",
    request_body = NewArticle,
    responses(
        (status = 201, description = "Article created", body = MessageBody),
        (status = 422, description = "Missing or non-string title/content")
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let article = parse_new_article(body)?;
    state.store.insert(&article).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Article created",
        }),
    ))
}

fn parse_new_article(body: Value) -> Result<NewArticle, AppError> {
    let map = match body {
        Value::Object(m) => m,
        _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
    };
    let title = require_string(&map, "title")?;
    let content = require_string(&map, "content")?;
    Ok(NewArticle { title, content })
}

/// Present, non-null string field or a validation error.
fn require_string(map: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(AppError::Validation(format!("{} is required", field))),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_accepts_both_fields() {
        let article = parse_new_article(json!({"title": "T", "content": "C"})).unwrap();
        assert_eq!(article.title, "T");
        assert_eq!(article.content, "C");
    }

    #[test]
    fn parse_ignores_extra_fields() {
        let article =
            parse_new_article(json!({"title": "T", "content": "C", "author": "x"})).unwrap();
        assert_eq!(article.title, "T");
    }

    #[test]
    fn missing_title_is_a_validation_error() {
        let err = parse_new_article(json!({"content": "C"})).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("title")));
    }

    #[test]
    fn missing_content_is_a_validation_error() {
        let err = parse_new_article(json!({"title": "T"})).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("content")));
    }

    #[test]
    fn null_field_counts_as_missing() {
        let err = parse_new_article(json!({"title": "T", "content": null})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn non_string_field_is_rejected() {
        let err = parse_new_article(json!({"title": 7, "content": "C"})).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("string")));
    }

    #[test]
    fn non_object_body_is_a_bad_request() {
        let err = parse_new_article(json!(["title", "content"])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
