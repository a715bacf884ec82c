//! Runtime configuration read from the environment (and an optional `.env` file).

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:mcare.db";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Base used to build absolute URLs for uploaded videos
    pub public_url: String,
    /// Single allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
    /// Built frontend served as the fallback route when set
    pub frontend_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: 10,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            public_url: format!("http://localhost:{}", DEFAULT_PORT),
            cors_origin: None,
            frontend_dir: None,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or(&var, "MCARE_PORT", defaults.port)?;
        let public_url = var("MCARE_PUBLIC_URL").unwrap_or_else(|| format!("http://localhost:{}", port));

        Ok(Self {
            host: var("MCARE_HOST").unwrap_or(defaults.host),
            port,
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: parse_or(&var, "MCARE_DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            upload_dir: var("MCARE_UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.upload_dir),
            max_upload_bytes: parse_or(&var, "MCARE_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            public_url: public_url.trim_end_matches('/').to_string(),
            cors_origin: var("MCARE_CORS_ORIGIN"),
            frontend_dir: var("MCARE_FRONTEND_DIR").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
