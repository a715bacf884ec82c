//! # Media Library
//!
//! The upload-and-record workflow shared by articles and videos: the file is
//! written first, then its metadata row is inserted in a transaction. When the
//! insert fails the file is removed, so a handled failure leaves neither a row
//! nor an orphaned file.

use anyhow::Result;
use axum::extract::Multipart;
use chrono::Utc;
use shared::{Article, NewVideoLink, Video};
use tracing::info;

use crate::error::ApiError;
use crate::storage::{ArticleRepository, NewArticle, NewVideo, VideoRepository};
use crate::upload::{StoredFile, UploadKind, UploadStore};

pub const ARTICLE_FILE_FIELD: &str = "file";
pub const VIDEO_FILE_FIELD: &str = "video";

const ARTICLE_UPLOAD_FAILED: &str = "Error uploading article";
const VIDEO_UPLOAD_FAILED: &str = "Failed to save video";
const NO_VIDEO_FILE: &str = "No video file uploaded";

/// Today's date as stored in `upload_date`
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[derive(Clone)]
pub struct MediaLibrary {
    uploads: UploadStore,
    articles: ArticleRepository,
    videos: VideoRepository,
    public_url: String,
}

impl MediaLibrary {
    pub fn new(
        uploads: UploadStore,
        articles: ArticleRepository,
        videos: VideoRepository,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            uploads,
            articles,
            videos,
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn uploads(&self) -> &UploadStore {
        &self.uploads
    }

    /// Absolute URL under which a stored file is served
    pub fn public_url_for(&self, stored: &StoredFile) -> String {
        format!(
            "{}/uploads/{}/{}",
            self.public_url,
            stored.kind.dir_name(),
            stored.file_name
        )
    }

    /// `POST /upload-article`: the file is optional, a missing one stores a
    /// null `fileName`.
    pub async fn publish_article(&self, multipart: Multipart) -> Result<Article, ApiError> {
        let form = self
            .uploads
            .read_form(UploadKind::Article, ARTICLE_FILE_FIELD, multipart, ARTICLE_UPLOAD_FAILED)
            .await?;

        let row = NewArticle {
            title: form.title.unwrap_or_default(),
            file_name: form.file.as_ref().map(|f| f.file_name.clone()),
            upload_date: today(),
        };

        let article = self
            .record(form.file.as_ref(), self.articles.store_article(&row))
            .await
            .map_err(ApiError::store(ARTICLE_UPLOAD_FAILED))?;

        info!("Stored article {} ({:?})", article.id, article.file_name);
        Ok(article)
    }

    /// `POST /upload-video`: the file is required
    pub async fn publish_video(&self, multipart: Multipart) -> Result<Video, ApiError> {
        let form = self
            .uploads
            .read_form(UploadKind::Video, VIDEO_FILE_FIELD, multipart, VIDEO_UPLOAD_FAILED)
            .await?;

        let stored = form.file.ok_or(ApiError::MissingFile(NO_VIDEO_FILE))?;

        let row = NewVideo {
            title: form.title.unwrap_or_default(),
            url: self.public_url_for(&stored),
            file_name: Some(stored.file_name.clone()),
            file_path: Some(stored.path.display().to_string()),
            upload_date: today(),
        };

        let video = self
            .record(Some(&stored), self.videos.store_video(&row))
            .await
            .map_err(ApiError::store(VIDEO_UPLOAD_FAILED))?;

        info!("Stored video {} at {}", video.id, video.url);
        Ok(video)
    }

    /// `POST /video-link`: a link with no stored file
    pub async fn add_video_link(&self, link: &NewVideoLink) -> Result<Video> {
        let row = NewVideo {
            title: link.title.clone(),
            url: link.url.clone(),
            file_name: None,
            file_path: None,
            upload_date: today(),
        };
        self.videos.store_video(&row).await
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        self.articles.list_articles().await
    }

    pub async fn list_videos(&self) -> Result<Vec<Video>> {
        self.videos.list_videos().await
    }

    /// Await the metadata insert; on failure remove the file it refers to
    async fn record<T, F>(&self, stored: Option<&StoredFile>, insert: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        match insert.await {
            Ok(value) => Ok(value),
            Err(e) => {
                if let Some(stored) = stored {
                    self.uploads.discard(stored).await;
                }
                Err(e)
            }
        }
    }
}
