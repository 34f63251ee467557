use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

use crate::{
    application::use_cases::order::OrderPolicy,
    domain::entities::order::{DEFAULT_DOWNLOAD_TTL_DAYS, DEFAULT_MAX_DOWNLOADS},
};

pub struct AppConfig {
    pub database_url: SecretString,
    pub bind_addr: SocketAddr,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
    pub redis_url: String,
    pub rate_limit_window_secs: u64,
    pub rate_limit_per_ip: u64,
    /// Whether to trust X-Forwarded-For headers. Set to true when behind a reverse proxy.
    pub trust_proxy: bool,
    /// Directory that plan file identifiers (`/files/...`) are resolved against.
    pub files_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub max_downloads: i32,
    pub download_ttl_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = SecretString::new(get_env::<String>("DATABASE_URL").into());

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 8001)),
        );
        let cors_origin = parse_cors_origin(&get_env_default("CORS_ORIGIN", String::from("*")));
        let redis_url: String = get_env_default("REDIS_URL", "redis://127.0.0.1:6379".to_string());
        let rate_limit_window_secs: u64 = get_env_default("RATE_LIMIT_WINDOW_SECS", 60);
        let rate_limit_per_ip: u64 = get_env_default("RATE_LIMIT_PER_IP", 60);
        // Default to false for security - must explicitly enable when behind a trusted proxy
        let trust_proxy: bool = get_env_default("TRUST_PROXY", false);
        let files_dir: PathBuf = get_env_default("FILES_DIR", PathBuf::from("./files"));
        let request_timeout_secs: u64 = get_env_default("REQUEST_TIMEOUT_SECS", 30);
        let max_downloads: i32 = get_env_default("MAX_DOWNLOADS", DEFAULT_MAX_DOWNLOADS);
        let download_ttl_days: i64 = get_env_default("DOWNLOAD_TTL_DAYS", DEFAULT_DOWNLOAD_TTL_DAYS);

        Self {
            database_url,
            bind_addr,
            cors_origin,
            redis_url,
            rate_limit_window_secs,
            rate_limit_per_ip,
            trust_proxy,
            files_dir,
            request_timeout_secs,
            max_downloads,
            download_ttl_days,
        }
    }

    pub fn order_policy(&self) -> OrderPolicy {
        OrderPolicy {
            max_downloads: self.max_downloads,
            download_ttl: chrono::Duration::days(self.download_ttl_days),
        }
    }
}

fn parse_cors_origin(raw: &str) -> Option<HeaderValue> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return None;
    }
    Some(
        raw.parse()
            .expect("CORS_ORIGIN must be a valid header value"),
    )
}
