//! Create/edit state machine behind the article and video forms.
//!
//! ```text
//! Create ──begin_edit(id)──▶ Edit(id)
//!   ▲                          │
//!   └── submit / cancel / on_deleted(id) ──┘
//! ```
//!
//! Leaving a mode always replaces the draft with a fresh one, so anything the
//! draft owns (such as a file preview URL) is released at that point.

use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// The in-progress entity held by a form
pub trait Draft: Default {
    type Record;

    /// Prefill the form from an existing record
    fn from_record(record: &Self::Record) -> Self;

    /// Presence check for required fields; nothing is sent until it holds
    fn is_complete(&self) -> bool;

    /// The record as it looks after this draft is applied to it
    fn apply_to(&self, record: &Self::Record) -> Self::Record;
}

#[derive(Debug, PartialEq)]
pub enum Submission<D> {
    Create(D),
    Update { id: i64, draft: D },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    mode: FormMode,
    draft: D,
}

impl<D: Draft> Default for FormState<D> {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            draft: D::default(),
        }
    }
}

impl<D: Draft> FormState<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn begin_edit(&mut self, id: i64, record: &D::Record) {
        self.mode = FormMode::Edit(id);
        self.draft = D::from_record(record);
    }

    /// Hand the draft out for sending and return to Create. An incomplete
    /// draft stays in the form and nothing is returned.
    pub fn submit(&mut self) -> Option<Submission<D>> {
        if !self.draft.is_complete() {
            return None;
        }
        let draft = mem::take(&mut self.draft);
        let submission = match mem::replace(&mut self.mode, FormMode::Create) {
            FormMode::Create => Submission::Create(draft),
            FormMode::Edit(id) => Submission::Update { id, draft },
        };
        Some(submission)
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    /// A record was deleted from the list; stop editing it if it is open
    pub fn on_deleted(&mut self, id: i64) {
        if self.mode == FormMode::Edit(id) {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.draft = D::default();
    }
}
