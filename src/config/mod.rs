use std::env;

/// Process configuration, read from the environment once at startup and
/// passed down by value rather than held in a global.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_port: u16,
    pub store: StoreConfig,
}

/// Connection parameters for the document store. Credentials come from
/// STORE_USERNAME / STORE_PASSWORD; host, port and database have local
/// defaults so a dev instance works with just the credentials set.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Allow tests or deployments to override port via env
        let listen_port = env::var("LINKBOARD_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(5000);

        Self {
            listen_port,
            store: StoreConfig::from_env(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            // Missing credentials are not fatal here: the pool is created
            // lazily and the failure surfaces per request instead.
            username: env::var("STORE_USERNAME").unwrap_or_default(),
            password: env::var("STORE_PASSWORD").unwrap_or_default(),
            host: env::var("STORE_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("STORE_PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(5432),
            database: env::var("STORE_DATABASE").unwrap_or_else(|_| "linkboard".to_string()),
        }
    }
}
