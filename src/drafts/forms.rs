use crate::models::{Category, CategoryPayload, Note, NotePayload, DEFAULT_CATEGORY_COLOR};

/// Client-side checks that block a submit before any request is made.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("Genre name is required")]
    NameRequired,
    #[error("Band name is required")]
    TitleRequired,
    #[error("Select a genre")]
    GenreRequired,
    #[error("Select a valid genre")]
    InvalidGenre,
}

/// Unsaved genre form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CategoryDraft {
    pub name: String,
    pub color: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

impl CategoryDraft {
    pub fn from_category(cat: &Category) -> Self {
        Self {
            name: cat.name.clone(),
            color: cat.color.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<CategoryPayload, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        Ok(CategoryPayload {
            name: self.name.clone(),
            color: self.color.clone(),
        })
    }
}

/// Unsaved band form.
///
/// `category_id` stays text (it is bound to a `<select>`) until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category_id: String,
}

impl NoteDraft {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            category_id: note.category_id.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<NotePayload, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        let raw = self.category_id.trim();
        if raw.is_empty() {
            return Err(ValidationError::GenreRequired);
        }
        let category_id = raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidGenre)?;

        Ok(NotePayload {
            title: self.title.clone(),
            content: self.content.clone(),
            category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metallica() -> Note {
        Note {
            id: 4,
            title: "Metallica".to_string(),
            content: "Heavy metal band".to_string(),
            category_id: 12,
            category: None,
            created_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_category_draft_default_color() {
        let d = CategoryDraft::default();
        assert!(d.name.is_empty());
        assert_eq!(d.color, "#3498db");
    }

    #[test]
    fn test_category_draft_whitespace_name_rejected() {
        let d = CategoryDraft {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(d.to_payload(), Err(ValidationError::NameRequired));
        assert_eq!(
            ValidationError::NameRequired.to_string(),
            "Genre name is required"
        );
    }

    #[test]
    fn test_category_draft_from_category() {
        let cat = Category {
            id: 1,
            name: "Rock".to_string(),
            color: "#e74c3c".to_string(),
        };
        let payload = CategoryDraft::from_category(&cat)
            .to_payload()
            .expect("valid draft");
        assert_eq!(payload.name, "Rock");
        assert_eq!(payload.color, "#e74c3c");
    }

    #[test]
    fn test_note_draft_from_note_stringifies_category() {
        let d = NoteDraft::from_note(&metallica());
        assert_eq!(d.category_id, "12");
        assert_eq!(d.to_payload().expect("valid").category_id, 12);
    }

    #[test]
    fn test_note_draft_checks_title_before_genre() {
        let d = NoteDraft::default();
        assert_eq!(d.to_payload(), Err(ValidationError::TitleRequired));

        let d = NoteDraft {
            title: "Coltrane".to_string(),
            ..Default::default()
        };
        assert_eq!(d.to_payload(), Err(ValidationError::GenreRequired));

        let d = NoteDraft {
            title: "Coltrane".to_string(),
            category_id: "jazz".to_string(),
            ..Default::default()
        };
        assert_eq!(d.to_payload(), Err(ValidationError::InvalidGenre));
    }

    #[test]
    fn test_note_draft_keeps_empty_content() {
        let d = NoteDraft {
            title: "Coltrane".to_string(),
            content: String::new(),
            category_id: "2".to_string(),
        };
        let payload = d.to_payload().expect("valid");
        assert!(payload.content.is_empty());
    }
}
