use shared::{Article, Video};

use super::form_state::Draft;

/// A file chosen in a file input
pub trait PickedFile {
    fn name(&self) -> String;
}

/// Article form contents. `F` owns the picked file and whatever preview it
/// holds; replacing or dropping it releases that preview.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft<F> {
    pub title: String,
    pub file: Option<F>,
    /// File already stored for the record being edited
    pub existing_file_name: Option<String>,
}

impl<F> Default for ArticleDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            file: None,
            existing_file_name: None,
        }
    }
}

impl<F> ArticleDraft<F> {
    /// Swap in a new pick (or clear it), dropping the previous one
    pub fn set_file(&mut self, file: Option<F>) {
        self.file = file;
    }
}

impl<F: PickedFile> Draft for ArticleDraft<F> {
    type Record = Article;

    fn from_record(record: &Article) -> Self {
        Self {
            title: record.title.clone(),
            file: None,
            existing_file_name: record.file_name.clone(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && (self.file.is_some() || self.existing_file_name.is_some())
    }

    fn apply_to(&self, record: &Article) -> Article {
        Article {
            title: self.title.clone(),
            file_name: match &self.file {
                Some(file) => Some(file.name()),
                None => record.file_name.clone(),
            },
            ..record.clone()
        }
    }
}

/// Video form contents: a link, or a file for upload when creating
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDraft<F> {
    pub title: String,
    pub url: String,
    pub file: Option<F>,
}

impl<F> Default for VideoDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: String::new(),
            file: None,
        }
    }
}

impl<F> VideoDraft<F> {
    pub fn set_file(&mut self, file: Option<F>) {
        self.file = file;
    }
}

impl<F> Draft for VideoDraft<F> {
    type Record = Video;

    fn from_record(record: &Video) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            file: None,
        }
    }

    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && (!self.url.trim().is_empty() || self.file.is_some())
    }

    fn apply_to(&self, record: &Video) -> Video {
        let url = self.url.trim();
        Video {
            title: self.title.clone(),
            url: if url.is_empty() {
                record.url.clone()
            } else {
                url.to_string()
            },
            ..record.clone()
        }
    }
}
