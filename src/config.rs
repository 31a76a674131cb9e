use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Directory uploaded product images are written to and served from.
    pub media_root: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: var_or("DATABASE_URL", "app.db".to_string()),
            address: var_or("ADDRESS", "127.0.0.1".to_string()),
            port: var_or("PORT", 8080),
            media_root: var_or("MEDIA_ROOT", "media".to_string()),
        }
    }
}

fn var_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Invalid {key} value `{raw}`: {err}; using {default}");
                default
            }
        },
        Err(_) => {
            log::info!("{key} not set, using default: {default}");
            default
        }
    }
}
