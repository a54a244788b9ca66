mod forms;

pub(crate) use forms::{CategoryDraft, NoteDraft, ValidationError};
