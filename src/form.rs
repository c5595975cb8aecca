//! Task Form State
//!
//! Draft and error state behind the task modal. Holds no I/O; the owning
//! component forwards a valid draft to its caller.

use crate::models::{Field, TaskDraft};
use crate::validation::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    OpenClean,
    OpenInvalid,
}

/// Transient state for one task form (create or edit)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    phase: FormPhase,
    draft: TaskDraft,
    errors: FieldErrors,
    require_all_fields: bool,
}

impl FormState {
    pub fn new(require_all_fields: bool) -> Self {
        Self {
            require_all_fields,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Open the form seeded with `initial`
    pub fn open(&mut self, initial: TaskDraft) {
        self.draft = initial;
        self.errors = FieldErrors::default();
        self.phase = FormPhase::OpenClean;
    }

    /// Close the form, discarding draft and errors
    pub fn close(&mut self) {
        self.draft = TaskDraft::default();
        self.errors = FieldErrors::default();
        self.phase = FormPhase::Closed;
    }

    /// Follow an externally owned open flag
    pub fn sync_open(&mut self, open: bool, initial: impl FnOnce() -> TaskDraft) {
        match (open, self.is_open()) {
            (true, false) => self.open(initial()),
            (false, true) => self.close(),
            _ => {}
        }
    }

    /// Record a keystroke; a shown error clears once its field is satisfied
    pub fn input(&mut self, field: Field, value: String) {
        let satisfied = validation::validate_field(field, &value, self.require_all_fields).is_none();
        self.draft.set(field, value);
        if satisfied && self.errors.get(field).is_some() {
            self.errors.clear(field);
            if self.errors.is_empty() && self.phase == FormPhase::OpenInvalid {
                self.phase = FormPhase::OpenClean;
            }
        }
    }

    /// Validate the draft; returns it when it may be forwarded
    pub fn submit(&mut self) -> Option<TaskDraft> {
        if !self.is_open() {
            return None;
        }
        let errors = validation::validate(&self.draft, self.require_all_fields);
        if errors.is_empty() {
            self.errors = errors;
            self.phase = FormPhase::OpenClean;
            Some(self.draft.clone())
        } else {
            self.errors = errors;
            self.phase = FormPhase::OpenInvalid;
            None
        }
    }
}
