use serde::Deserialize;
use std::net::SocketAddr;
use tokio::sync::RwLock;

use crate::store::ArticleStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub access_log_format: String,
    pub show_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ARTICLE_SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 10000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "article-server/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 10000,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: true,
                access_log_format: "common".to_string(),
                show_headers: false,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                server_name: "article-server/0.1".to_string(),
                enable_cors: false,
                max_body_size: 1_048_576,
            },
        }
    }
}

/// Shared application state.
///
/// The article store is owned here and injected into handlers, never held
/// as process-global state. Reads take the read half of the lock; create
/// and delete take the write half for the whole id-assignment + mutation,
/// so concurrent creates cannot observe the same next id.
pub struct AppState {
    pub config: Config,
    pub store: RwLock<ArticleStore>,
}

impl AppState {
    /// Build state with the two startup articles already present.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            store: RwLock::new(ArticleStore::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_produces_valid_socket_addr() {
        let cfg = Config::default();
        let addr = cfg.get_socket_addr().expect("default addr parses");
        assert_eq!(addr.port(), 10000);
        assert!(addr.is_ipv4());
    }

    #[test]
    fn test_invalid_host_is_reported() {
        let mut cfg = Config::default();
        cfg.server.host = "not a host".to_string();
        let err = cfg.get_socket_addr().unwrap_err();
        assert!(err.contains("Invalid address"));
    }

    #[tokio::test]
    async fn test_app_state_starts_seeded() {
        let state = AppState::new(&Config::default());
        let store = state.store.read().await;
        assert_eq!(store.list().len(), 2);
    }
}
