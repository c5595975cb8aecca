//! Task Draft Validation
//!
//! Required-field rules for the task form. Pure functions, safe to re-run on
//! every keystroke.

use crate::models::{Field, TaskDraft};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";

/// Field-level error messages for one draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Description => self.description.as_deref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Title => self.title = None,
            Field::Description => self.description = None,
        }
    }
}

/// Check a single field value
pub fn validate_field(field: Field, value: &str, require_all_fields: bool) -> Option<&'static str> {
    if !require_all_fields || !value.is_empty() {
        return None;
    }
    Some(match field {
        Field::Title => TITLE_REQUIRED,
        Field::Description => DESCRIPTION_REQUIRED,
    })
}

/// Check every field of a draft; each check runs independently
pub fn validate(draft: &TaskDraft, require_all_fields: bool) -> FieldErrors {
    FieldErrors {
        title: validate_field(Field::Title, &draft.title, require_all_fields).map(str::to_string),
        description: validate_field(Field::Description, &draft.description, require_all_fields)
            .map(str::to_string),
    }
}
