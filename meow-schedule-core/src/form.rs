//! Input collection for sessions and tags.
//!
//! The store performs no validation; whatever reaches it has passed through
//! one of these forms.

use chrono::NaiveDate;

use crate::constants::{PLACEHOLDER_CLIENT_NAME, PLACEHOLDER_TIME};
use crate::error::FormError;
use crate::session::{Session, SessionDraft, derive_title};
use crate::tag::{Tag, TagColor};

/// What a submitted session form asks the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutput {
    Create(SessionDraft),
    Update(Session),
}

/// Form state for creating or editing a session.
#[derive(Debug, Clone)]
pub struct SessionForm {
    editing: Option<String>,
    pub date: NaiveDate,
    pub notes: String,
    selected_tags: Vec<String>,
}

impl SessionForm {
    pub fn new(date: NaiveDate) -> Self {
        SessionForm {
            editing: None,
            date,
            notes: String::new(),
            selected_tags: Vec::new(),
        }
    }

    /// Prefill the form from an existing session.
    pub fn editing(session: &Session) -> Self {
        SessionForm {
            editing: Some(session.id.clone()),
            date: session.date,
            notes: session.notes.clone().unwrap_or_default(),
            selected_tags: session.tags.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn is_selected(&self, tag_id: &str) -> bool {
        self.selected_tags.iter().any(|id| id == tag_id)
    }

    /// Select `tag_id` (appended last) or deselect it if already selected.
    pub fn toggle_tag(&mut self, tag_id: &str) {
        if self.is_selected(tag_id) {
            self.selected_tags.retain(|id| id != tag_id);
        } else {
            self.selected_tags.push(tag_id.to_string());
        }
    }

    /// Validate and build the session. `tags` is used to derive the title.
    pub fn submit(&self, tags: &[Tag]) -> Result<FormOutput, FormError> {
        if self.notes.trim().is_empty() {
            return Err(FormError::MissingNotes);
        }

        let draft = SessionDraft {
            title: derive_title(&self.selected_tags, tags),
            client_name: PLACEHOLDER_CLIENT_NAME.to_string(),
            date: self.date,
            time: PLACEHOLDER_TIME.to_string(),
            tags: self.selected_tags.clone(),
            notes: Some(self.notes.clone()),
        };

        Ok(match &self.editing {
            Some(id) => FormOutput::Update(draft.with_id(id.clone())),
            None => FormOutput::Create(draft),
        })
    }
}

/// Form state for a new tag.
#[derive(Debug, Clone, Default)]
pub struct TagForm {
    pub name: String,
    pub color: TagColor,
}

impl TagForm {
    pub fn new(name: impl Into<String>, color: TagColor) -> Self {
        TagForm {
            name: name.into(),
            color,
        }
    }

    /// Reject blank names. The name is otherwise kept as typed.
    pub fn submit(&self) -> Result<(String, TagColor), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingTagName);
        }
        Ok((self.name.clone(), self.color))
    }
}
