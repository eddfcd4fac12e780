//! Article REST backend: SQLite-backed list/create API with generated docs.

pub mod apidoc;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use model::{Article, NewArticle};
pub use routes::router;
pub use state::AppState;
pub use store::{connect, ensure_schema, ArticleStore};
