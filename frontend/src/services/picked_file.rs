use gloo::file::ObjectUrl;
use std::rc::Rc;
use web_sys::{File, HtmlInputElement};

use crate::state::drafts::PickedFile;

/// A file from a file input together with its preview URL. The URL is
/// revoked when the last clone is dropped.
#[derive(Clone)]
pub struct SelectedFile {
    file: File,
    preview: Rc<ObjectUrl>,
}

impl SelectedFile {
    pub fn new(file: File) -> Self {
        let preview = ObjectUrl::from(gloo::file::File::from(file.clone()));
        Self {
            file,
            preview: Rc::new(preview),
        }
    }

    /// First file of an input, if any was picked
    pub fn from_input(input: &HtmlInputElement) -> Option<Self> {
        let file = input.files()?.get(0)?;
        Some(Self::new(file))
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn preview_url(&self) -> String {
        let url: &str = &self.preview;
        url.to_string()
    }
}

impl PickedFile for SelectedFile {
    fn name(&self) -> String {
        self.file.name()
    }
}

impl PartialEq for SelectedFile {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.preview, &other.preview)
    }
}
