use anyhow::Result;
use shared::Video;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DbConnection;

/// Metadata row for a video. Links carry no file.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub url: String,
    pub file_name: Option<String>,
    /// Server-side location of the stored file, never sent to clients
    pub file_path: Option<String>,
    pub upload_date: String,
}

/// Repository for the `videos` table
#[derive(Clone)]
pub struct VideoRepository {
    db: DbConnection,
}

impl VideoRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert video metadata inside a transaction and return the stored row
    pub async fn store_video(&self, video: &NewVideo) -> Result<Video> {
        let mut tx = self.db.pool().begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO videos (title, url, file_name, file_path, upload_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&video.title)
        .bind(&video.url)
        .bind(&video.file_name)
        .bind(&video.file_path)
        .bind(&video.upload_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Video {
            id: result.last_insert_rowid(),
            title: video.title.clone(),
            url: video.url.clone(),
            file_name: video.file_name.clone(),
            upload_date: video.upload_date.clone(),
        })
    }

    /// List every video, newest first
    pub async fn list_videos(&self) -> Result<Vec<Video>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, url, file_name, upload_date
            FROM videos
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let videos = rows
            .iter()
            .map(video_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;
        Ok(videos)
    }
}

fn video_from_row(row: &SqliteRow) -> Result<Video, sqlx::Error> {
    Ok(Video {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        url: row.try_get("url")?,
        file_name: row.try_get("file_name")?,
        upload_date: row.try_get("upload_date")?,
    })
}
