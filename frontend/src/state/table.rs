//! Projection of cached records into table rows

use shared::{Article, Video};

use crate::services::date_utils::format_upload_date;

use super::record_cache::{CachedRecord, Keyed, RecordCache};

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: i64,
    pub title: String,
    /// Second column: the stored file or the link
    pub detail: String,
    pub href: Option<String>,
    pub date: String,
    pub local_only: bool,
}

pub trait ToTableRow {
    fn to_row(&self, base_url: &str) -> TableRow;
}

impl ToTableRow for CachedRecord<Article> {
    fn to_row(&self, base_url: &str) -> TableRow {
        let article = &self.record;
        // A file picked in a local edit was never uploaded
        let stored = !self.local_only || article.file_name == self.server.file_name;
        TableRow {
            id: article.id,
            title: article.title.clone(),
            detail: article.file_name.clone().unwrap_or_else(|| "No file".to_string()),
            href: article
                .file_name
                .as_ref()
                .filter(|_| stored)
                .map(|name| format!("{}/uploads/articles/{}", base_url, name)),
            date: format_upload_date(&article.upload_date),
            local_only: self.local_only,
        }
    }
}

impl ToTableRow for CachedRecord<Video> {
    fn to_row(&self, _base_url: &str) -> TableRow {
        let video = &self.record;
        TableRow {
            id: video.id,
            title: video.title.clone(),
            detail: video.url.clone(),
            href: Some(video.url.clone()),
            date: format_upload_date(&video.upload_date),
            local_only: self.local_only,
        }
    }
}

pub fn rows<T>(cache: &RecordCache<T>, base_url: &str) -> Vec<TableRow>
where
    T: Keyed + Clone,
    CachedRecord<T>: ToTableRow,
{
    cache.entries().iter().map(|entry| entry.to_row(base_url)).collect()
}
