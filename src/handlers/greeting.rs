//! Fixed greeting resource.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GreetingBody {
    #[schema(value_type = String, example = "Nahida")]
    pub author: &'static str,
}

/// A simple GET endpoint: always `{"author": "Nahida"}`. No side effects.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "A successful response", body = GreetingBody)
    )
)]
pub async fn greeting() -> Json<GreetingBody> {
    Json(GreetingBody { author: "Nahida" })
}
