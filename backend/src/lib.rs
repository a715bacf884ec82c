//! # mcare backend
//!
//! REST API for the maternal-care record keeper: registrations, medicine
//! reminders, outbox messages, and the article/video library.
//!
//! ```text
//! rest     (one handler per route)
//!   ↓
//! domain   (upload-then-record workflow for articles and videos)
//!   ↓
//! storage  (one repository per table)  +  upload (files on disk)
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod extract;
pub mod rest;
pub mod storage;
pub mod upload;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::db::DbConnection;
use crate::domain::MediaLibrary;
use crate::storage::{
    ArticleRepository, MessageRepository, RegistrationRepository, ReminderRepository, VideoRepository,
};
use crate::upload::UploadStore;

/// Room for the text fields and multipart framing around an upload
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub registrations: RegistrationRepository,
    pub reminders: ReminderRepository,
    pub messages: MessageRepository,
    pub media: MediaLibrary,
}

impl AppState {
    pub fn new(db: DbConnection, config: &AppConfig) -> Self {
        let uploads = UploadStore::new(config.upload_dir.clone(), config.max_upload_bytes);
        let media = MediaLibrary::new(
            uploads,
            ArticleRepository::new(db.clone()),
            VideoRepository::new(db.clone()),
            config.public_url.clone(),
        );

        Self {
            registrations: RegistrationRepository::new(db.clone()),
            reminders: ReminderRepository::new(db.clone()),
            messages: MessageRepository::new(db),
            media,
        }
    }
}

/// Connect to the store and prepare the upload directories.
/// Failure here is fatal; nothing is retried.
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url, config.db_max_connections).await?;

    info!("Setting up upload directories under {}", config.upload_dir.display());
    let state = AppState::new(db, config);
    state
        .media
        .uploads()
        .ensure_dirs()
        .await
        .with_context(|| format!("Could not create upload directories in {}", config.upload_dir.display()))?;

    Ok(state)
}

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = match &config.cors_origin {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin {}", origin))?,
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST])
    .allow_headers(Any);

    let upload_limit = DefaultBodyLimit::max(config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES);
    let upload_routes = Router::new()
        .route("/upload-article", post(rest::upload_article))
        .route("/upload-video", post(rest::upload_video))
        .layer(upload_limit);

    let mut router = Router::new()
        .route("/register", post(rest::register))
        .route("/registered-persons", get(rest::registered_persons))
        .route("/medicine-reminder", post(rest::medicine_reminder))
        .route("/send-message", post(rest::send_message))
        .route("/outbox", get(rest::outbox))
        .route("/get-articles", get(rest::get_articles))
        .route("/get-videos", get(rest::get_videos))
        .route("/video-link", post(rest::video_link))
        .merge(upload_routes)
        .nest_service("/uploads", ServeDir::new(state.media.uploads().root()));

    if let Some(frontend_dir) = &config.frontend_dir {
        router = router.fallback_service(ServeDir::new(frontend_dir));
    }

    Ok(router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
