//! Environment-driven settings: database URL and debug flag, as two named profiles.

/// Default file-based store, used when `DATABASE_URL` is absent.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:articles.db";

/// Runtime settings shared by the binary and tests. `database_url` points
/// sqlx at the backing store; `debug` selects log verbosity and whether a
/// file log is written.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub debug: bool,
}

impl AppConfig {
    /// Development profile: debug on.
    pub fn development() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            debug: true,
        }
    }

    /// Production profile: debug off.
    pub fn production() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            debug: false,
        }
    }

    /// Profile from `APP_ENV` ("production" or "development"; unrecognized
    /// values fall back to development), with `DATABASE_URL` overriding the
    /// default store location when set.
    pub fn from_env() -> Self {
        let mut config = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Self::production(),
            _ => Self::development(),
        };
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_profile_enables_debug() {
        let config = AppConfig::development();
        assert!(config.debug);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn production_profile_disables_debug() {
        let config = AppConfig::production();
        assert!(!config.debug);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn default_store_is_a_local_sqlite_file() {
        assert_eq!(DEFAULT_DATABASE_URL, "sqlite:articles.db");
    }
}
