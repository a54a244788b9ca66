mod controller;
mod platform;

use crate::api::ApiClient;
use crate::drafts::{CategoryDraft, NoteDraft};
use crate::models::{Category, Note};
use leptos::prelude::*;

pub(crate) use controller::Controller;
pub(crate) use platform::{BrowserPlatform, Platform};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum MessageKind {
    Success,
    Error,
}

/// Identity of one shown message. A pending dismissal only clears its own message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FlashToken(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Flash {
    pub token: FlashToken,
    pub kind: MessageKind,
    pub text: String,
}

/// Everything the page renders from.
///
/// Only the controller mutates this, always through the named transitions
/// below. The view receives a cloned snapshot after each one.
#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub categories: Vec<Category>,
    pub notes: Vec<Note>,

    pub loading: bool,
    pub saving: bool,
    pub message: Option<Flash>,

    pub category_form: CategoryDraft,
    pub editing_category: Option<Category>,

    pub note_form: NoteDraft,
    pub editing_note: Option<Note>,

    flash_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            categories: vec![],
            notes: vec![],
            // The first render happens before the initial load resolves.
            loading: true,
            saving: false,
            message: None,
            category_form: CategoryDraft::default(),
            editing_category: None,
            note_form: NoteDraft::default(),
            editing_note: None,
            flash_seq: 0,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn apply_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    pub fn end_load(&mut self) {
        self.loading = false;
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    /// Replaces any current message. Earlier tokens become stale.
    pub fn show_message(&mut self, kind: MessageKind, text: impl Into<String>) -> FlashToken {
        self.flash_seq += 1;
        let token = FlashToken(self.flash_seq);
        self.message = Some(Flash {
            token,
            kind,
            text: text.into(),
        });
        token
    }

    /// Returns whether the message was cleared.
    pub fn dismiss_message(&mut self, token: FlashToken) -> bool {
        match &self.message {
            Some(m) if m.token == token => {
                self.message = None;
                true
            }
            _ => false,
        }
    }

    pub fn start_edit_category(&mut self, cat: &Category) {
        self.editing_category = Some(cat.clone());
        self.category_form = CategoryDraft::from_category(cat);
    }

    pub fn start_edit_note(&mut self, note: &Note) {
        self.editing_note = Some(note.clone());
        self.note_form = NoteDraft::from_note(note);
    }

    /// Leaves edit mode for both genres and bands, whichever was active.
    pub fn cancel_edit(&mut self) {
        self.finish_category_save();
        self.finish_note_save();
    }

    pub fn finish_category_save(&mut self) {
        self.editing_category = None;
        self.category_form = CategoryDraft::default();
    }

    pub fn finish_note_save(&mut self) {
        self.editing_note = None;
        self.note_form = NoteDraft::default();
    }

    pub fn set_category_name(&mut self, name: String) {
        self.category_form.name = name;
    }

    pub fn set_category_color(&mut self, color: String) {
        self.category_form.color = color;
    }

    pub fn set_note_title(&mut self, title: String) {
        self.note_form.title = title;
    }

    pub fn set_note_content(&mut self, content: String) {
        self.note_form.content = content;
    }

    pub fn set_note_category(&mut self, category_id: String) {
        self.note_form.category_id = category_id;
    }

    pub fn is_editing_category(&self) -> bool {
        self.editing_category.is_some()
    }

    pub fn is_editing_note(&self) -> bool {
        self.editing_note.is_some()
    }

    pub fn category_submit_label(&self) -> &'static str {
        submit_label(self.saving, self.is_editing_category())
    }

    pub fn note_submit_label(&self) -> &'static str {
        submit_label(self.saving, self.is_editing_note())
    }

    pub fn find_category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn find_note(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }
}

fn submit_label(saving: bool, editing: bool) -> &'static str {
    if saving {
        "Saving..."
    } else if editing {
        "Update"
    } else {
        "Add"
    }
}

pub(crate) type AppController = Controller<ApiClient, BrowserPlatform>;

/// Shared by every component on the page.
///
/// `snapshot` is republished by the controller after each transition.
#[derive(Clone, Copy)]
pub(crate) struct AppContext {
    pub snapshot: RwSignal<AppState>,
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let controller = Controller::new(ApiClient::from_env(), BrowserPlatform);
        let snapshot = RwSignal::new(controller.snapshot());

        controller.subscribe(move |s: &AppState| {
            let _ = snapshot.try_set(s.clone());
        });

        Self {
            snapshot,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock() -> Category {
        Category {
            id: 1,
            name: "Rock".to_string(),
            color: "#e74c3c".to_string(),
        }
    }

    fn metallica() -> Note {
        Note {
            id: 1,
            title: "Metallica".to_string(),
            content: "Heavy metal band".to_string(),
            category_id: 1,
            category: Some(rock()),
            created_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_new_state_starts_loading_and_viewing() {
        let s = AppState::new();
        assert!(s.loading);
        assert!(!s.saving);
        assert!(!s.is_editing_category());
        assert!(!s.is_editing_note());
        assert_eq!(s.category_form, CategoryDraft::default());
    }

    #[test]
    fn test_newer_message_survives_stale_dismissal() {
        let mut s = AppState::new();
        let first = s.show_message(MessageKind::Success, "Genre created!");
        let second = s.show_message(MessageKind::Error, "Name already exists");
        assert_ne!(first, second);

        assert!(!s.dismiss_message(first));
        assert_eq!(
            s.message.as_ref().map(|m| m.text.as_str()),
            Some("Name already exists")
        );

        assert!(s.dismiss_message(second));
        assert!(s.message.is_none());
    }

    #[test]
    fn test_start_edit_populates_drafts_independently() {
        let mut s = AppState::new();
        s.start_edit_category(&rock());
        s.start_edit_note(&metallica());

        assert_eq!(s.category_form.name, "Rock");
        assert_eq!(s.category_form.color, "#e74c3c");
        assert_eq!(s.note_form.category_id, "1");
        assert!(s.is_editing_category());
        assert!(s.is_editing_note());
    }

    #[test]
    fn test_cancel_edit_resets_both_entities() {
        let mut s = AppState::new();
        s.start_edit_note(&metallica());
        s.set_category_name("Half-typed".to_string());

        s.cancel_edit();

        assert!(!s.is_editing_note());
        assert!(!s.is_editing_category());
        assert_eq!(s.note_form, NoteDraft::default());
        assert_eq!(s.category_form, CategoryDraft::default());
    }

    #[test]
    fn test_submit_labels() {
        let mut s = AppState::new();
        assert_eq!(s.category_submit_label(), "Add");
        s.start_edit_category(&rock());
        assert_eq!(s.category_submit_label(), "Update");
        s.set_saving(true);
        assert_eq!(s.category_submit_label(), "Saving...");
        assert_eq!(s.note_submit_label(), "Saving...");
    }

    #[test]
    fn test_message_kind_css_names() {
        assert_eq!(MessageKind::Success.as_ref(), "success");
        assert_eq!(MessageKind::Error.to_string(), "error");
    }
}
