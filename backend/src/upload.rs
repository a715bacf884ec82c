//! # Upload Store
//!
//! Writes multipart file fields to `<root>/<kind>/<uuid>.<ext>` and hands the
//! stored name back to the caller. The metadata row is written elsewhere; a
//! caller that fails to record a stored file is expected to [`UploadStore::discard`] it.

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ApiError;

const MAX_EXTENSION_LEN: usize = 16;

/// Directory an upload lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Article,
    Video,
}

impl UploadKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            UploadKind::Article => "articles",
            UploadKind::Video => "videos",
        }
    }
}

/// A file that has been fully written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub kind: UploadKind,
    /// Generated name, unique within the kind's directory
    pub file_name: String,
    pub path: PathBuf,
    pub original_name: Option<String>,
    pub size: u64,
}

/// Text fields and the (optional) file of an upload form
#[derive(Debug, Default)]
pub struct UploadForm {
    pub title: Option<String>,
    pub file: Option<StoredFile>,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    max_file_bytes: usize,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, max_file_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_file_bytes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir_for(&self, kind: UploadKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// Create the per-kind directories
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        for kind in [UploadKind::Article, UploadKind::Video] {
            fs::create_dir_all(self.dir_for(kind)).await?;
        }
        Ok(())
    }

    /// A random name that keeps the original extension when it is a plain
    /// alphanumeric suffix.
    pub fn generate_file_name(original: Option<&str>) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let extension = original
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= MAX_EXTENSION_LEN
                    && ext.chars().all(|c| c.is_ascii_alphanumeric())
            });

        match extension {
            Some(ext) => format!("{}.{}", token, ext),
            None => token,
        }
    }

    /// Read an upload form: a `title` text field and one file field named
    /// `file_field`. Files picked with no name (an empty file input) count as
    /// absent. If anything fails after the file was written, the file is removed.
    pub async fn read_form(
        &self,
        kind: UploadKind,
        file_field: &str,
        mut multipart: Multipart,
        write_failure: &'static str,
    ) -> Result<UploadForm, ApiError> {
        let mut form = UploadForm::default();

        let result = self
            .read_fields(kind, file_field, &mut multipart, &mut form, write_failure)
            .await;

        if let Err(e) = result {
            if let Some(stored) = form.file.take() {
                self.discard(&stored).await;
            }
            return Err(e);
        }
        Ok(form)
    }

    async fn read_fields(
        &self,
        kind: UploadKind,
        file_field: &str,
        multipart: &mut Multipart,
        form: &mut UploadForm,
        write_failure: &'static str,
    ) -> Result<(), ApiError> {
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("title") => {
                    form.title = Some(field.text().await?);
                }
                Some(n) if n == file_field && form.file.is_none() => {
                    let has_name = field.file_name().map(|f| !f.is_empty()).unwrap_or(false);
                    if has_name {
                        form.file = Some(self.save_field(kind, field, write_failure).await?);
                    }
                }
                other => debug!("Ignoring multipart field {:?}", other),
            }
        }
        Ok(())
    }

    /// Stream one field to disk, enforcing the size limit
    async fn save_field(
        &self,
        kind: UploadKind,
        mut field: Field<'_>,
        write_failure: &'static str,
    ) -> Result<StoredFile, ApiError> {
        let original_name = field.file_name().map(str::to_string);
        let file_name = Self::generate_file_name(original_name.as_deref());
        let path = self.dir_for(kind).join(&file_name);

        let io_error = |source| ApiError::FileWrite {
            message: write_failure,
            source,
        };

        let mut file = fs::File::create(&path).await.map_err(io_error)?;
        let mut size: u64 = 0;

        let outcome: Result<(), ApiError> = async {
            while let Some(chunk) = field.chunk().await? {
                size += chunk.len() as u64;
                if size > self.max_file_bytes as u64 {
                    return Err(ApiError::FileTooLarge {
                        limit: self.max_file_bytes,
                    });
                }
                file.write_all(&chunk).await.map_err(io_error)?;
            }
            file.flush().await.map_err(io_error)?;
            Ok(())
        }
        .await;

        drop(file);
        if let Err(e) = outcome {
            remove_quietly(&path).await;
            return Err(e);
        }

        debug!("Stored {:?} as {} ({} bytes)", original_name, path.display(), size);
        Ok(StoredFile {
            kind,
            file_name,
            path,
            original_name,
            size,
        })
    }

    /// Remove a stored file whose metadata could not be recorded
    pub async fn discard(&self, stored: &StoredFile) {
        remove_quietly(&stored.path).await;
    }
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_keeps_extension() {
        let name = UploadStore::generate_file_name(Some("pregnancy-nutrition.pdf"));
        assert!(name.ends_with(".pdf"));
        assert_eq!(name.len(), 32 + ".pdf".len());
    }

    #[test]
    fn test_generated_names_do_not_collide() {
        let a = UploadStore::generate_file_name(Some("same.pdf"));
        let b = UploadStore::generate_file_name(Some("same.pdf"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_suspicious_extensions_are_dropped() {
        for original in ["noext", "trailing.", "../../etc/passwd", "x.p d f", "clip.aaaaaaaaaaaaaaaaaaaa"] {
            let name = UploadStore::generate_file_name(Some(original));
            assert!(!name.contains('.'), "{} produced {}", original, name);
        }
        assert!(!UploadStore::generate_file_name(None).contains('.'));
    }

    #[tokio::test]
    async fn test_ensure_dirs_creates_one_directory_per_kind() {
        let root = tempfile::tempdir().unwrap();
        let store = UploadStore::new(root.path().join("uploads"), 1024);

        store.ensure_dirs().await.unwrap();

        assert!(root.path().join("uploads/articles").is_dir());
        assert!(root.path().join("uploads/videos").is_dir());
    }

    #[tokio::test]
    async fn test_discard_removes_file_and_tolerates_missing() {
        let root = tempfile::tempdir().unwrap();
        let store = UploadStore::new(root.path(), 1024);
        store.ensure_dirs().await.unwrap();

        let path = store.dir_for(UploadKind::Video).join("abc.mp4");
        fs::write(&path, b"data").await.unwrap();
        let stored = StoredFile {
            kind: UploadKind::Video,
            file_name: "abc.mp4".to_string(),
            path: path.clone(),
            original_name: Some("clip.mp4".to_string()),
            size: 4,
        };

        store.discard(&stored).await;
        assert!(!path.exists());

        store.discard(&stored).await;
    }
}
