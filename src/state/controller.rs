use super::{AppState, MessageKind, Platform};
use crate::api::{ApiError, ApiResult, CrudApi};
use crate::drafts::ValidationError;
use crate::models::{Category, Note};
use leptos::logging::{log, warn};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// How long a success/error banner stays up.
pub(crate) const FLASH_DURATION: Duration = Duration::from_millis(3000);

const CONFIRM_DELETE_CATEGORY: &str = "Delete this genre and all its bands?";
const CONFIRM_DELETE_NOTE: &str = "Delete this band?";

#[derive(Clone, Debug, thiserror::Error)]
pub(crate) enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("a save is already in progress")]
    Busy,
}

type Subscriber = Box<dyn Fn(&AppState)>;

struct Inner<A, P> {
    api: A,
    platform: P,
    state: RefCell<AppState>,
    subscriber: RefCell<Option<Subscriber>>,
}

/// Keeps `AppState` in step with the backend.
///
/// Single owner of the state. Borrows of it never span an `.await`, so the
/// async operations can interleave on one thread.
pub(crate) struct Controller<A, P> {
    inner: Rc<Inner<A, P>>,
}

impl<A, P> Clone for Controller<A, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: CrudApi + 'static, P: Platform + 'static> Controller<A, P> {
    pub fn new(api: A, platform: P) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                platform,
                state: RefCell::new(AppState::new()),
                subscriber: RefCell::new(None),
            }),
        }
    }

    /// Receives a fresh snapshot after every transition.
    pub fn subscribe(&self, f: impl Fn(&AppState) + 'static) {
        *self.inner.subscriber.borrow_mut() = Some(Box::new(f));
    }

    pub fn snapshot(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let out = f(&mut self.inner.state.borrow_mut());
        self.publish();
        out
    }

    fn publish(&self) {
        let snap = self.snapshot();
        if let Some(sub) = self.inner.subscriber.borrow().as_ref() {
            sub(&snap);
        }
    }

    /// Shows a banner and schedules its dismissal.
    fn notify(&self, kind: MessageKind, text: impl Into<String>) {
        let token = self.mutate(|s| s.show_message(kind, text));

        let weak = Rc::downgrade(&self.inner);
        self.inner.platform.schedule(
            FLASH_DURATION,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Controller { inner }.mutate(|s| s.dismiss_message(token));
                }
            }),
        );
    }

    /// Fetches both collections concurrently.
    ///
    /// Both are applied together once both requests succeed; any failure
    /// leaves the loaded collections as they were.
    pub async fn load(&self) -> ApiResult<()> {
        self.mutate(AppState::begin_load);

        let api = &self.inner.api;
        let (categories, notes) = futures::join!(api.get_categories(), api.get_notes());

        let result = match (categories, notes) {
            (Ok(categories), Ok(notes)) => {
                log!("loaded {} genres and {} bands", categories.len(), notes.len());
                self.mutate(|s| {
                    s.apply_categories(categories);
                    s.apply_notes(notes);
                });
                Ok(())
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!("load failed ({:?}): {e}", e.kind);
                self.notify(MessageKind::Error, format!("Failed to load data: {e}"));
                Err(e)
            }
        };

        self.mutate(AppState::end_load);
        result
    }

    /// Gate shared by both submits: busy check, then client-side validation.
    fn begin_save<T>(&self, draft: Result<T, ValidationError>) -> Result<T, SubmitError> {
        if self.read(|s| s.saving) {
            return Err(SubmitError::Busy);
        }

        match draft {
            Ok(payload) => {
                self.mutate(|s| s.set_saving(true));
                Ok(payload)
            }
            Err(e) => {
                self.notify(MessageKind::Error, e.to_string());
                Err(e.into())
            }
        }
    }

    async fn finish_save<T>(
        &self,
        request: impl Future<Output = ApiResult<T>>,
        success: &'static str,
        reset: fn(&mut AppState),
    ) -> Result<(), SubmitError> {
        let outcome = request.await;
        self.mutate(|s| s.set_saving(false));

        match outcome {
            Ok(_) => {
                log!("{success}");
                self.notify(MessageKind::Success, success);
                self.mutate(reset);
                // A failed resync reports itself.
                let _ = self.load().await;
                Ok(())
            }
            Err(e) => {
                warn!("save failed ({:?}, status {:?}): {e}", e.kind, e.status);
                self.notify(MessageKind::Error, e.to_string());
                Err(e.into())
            }
        }
    }

    pub async fn submit_category(&self) -> Result<(), SubmitError> {
        let (draft, editing_id) = self.read(|s| {
            (
                s.category_form.to_payload(),
                s.editing_category.as_ref().map(|c| c.id),
            )
        });
        let payload = self.begin_save(draft)?;

        let api = &self.inner.api;
        match editing_id {
            Some(id) => {
                self.finish_save(
                    api.update_category(id, &payload),
                    "Genre updated!",
                    AppState::finish_category_save,
                )
                .await
            }
            None => {
                self.finish_save(
                    api.create_category(&payload),
                    "Genre created!",
                    AppState::finish_category_save,
                )
                .await
            }
        }
    }

    pub async fn submit_note(&self) -> Result<(), SubmitError> {
        let (draft, editing_id) = self.read(|s| {
            (
                s.note_form.to_payload(),
                s.editing_note.as_ref().map(|n| n.id),
            )
        });
        let payload = self.begin_save(draft)?;

        let api = &self.inner.api;
        match editing_id {
            Some(id) => {
                self.finish_save(
                    api.update_note(id, &payload),
                    "Band updated!",
                    AppState::finish_note_save,
                )
                .await
            }
            None => {
                self.finish_save(
                    api.create_note(&payload),
                    "Band created!",
                    AppState::finish_note_save,
                )
                .await
            }
        }
    }

    async fn finish_delete(&self, outcome: ApiResult<()>, success: &'static str) -> ApiResult<()> {
        match outcome {
            Ok(()) => {
                log!("{success}");
                self.notify(MessageKind::Success, success);
                let _ = self.load().await;
                Ok(())
            }
            Err(e) => {
                warn!("delete failed ({:?}, status {:?}): {e}", e.kind, e.status);
                self.notify(MessageKind::Error, e.to_string());
                Err(e)
            }
        }
    }

    /// Declining the prompt is a no-op.
    pub async fn delete_category(&self, id: i64) -> ApiResult<()> {
        if !self.inner.platform.confirm(CONFIRM_DELETE_CATEGORY) {
            return Ok(());
        }
        let outcome = self.inner.api.delete_category(id).await;
        self.finish_delete(outcome, "Genre deleted!").await
    }

    pub async fn delete_note(&self, id: i64) -> ApiResult<()> {
        if !self.inner.platform.confirm(CONFIRM_DELETE_NOTE) {
            return Ok(());
        }
        let outcome = self.inner.api.delete_note(id).await;
        self.finish_delete(outcome, "Band deleted!").await
    }

    pub fn start_edit_category(&self, cat: &Category) {
        self.mutate(|s| s.start_edit_category(cat));
    }

    pub fn start_edit_note(&self, note: &Note) {
        self.mutate(|s| s.start_edit_note(note));
    }

    pub fn cancel_edit(&self) {
        self.mutate(AppState::cancel_edit);
    }

    pub fn set_category_name(&self, name: String) {
        self.mutate(|s| s.set_category_name(name));
    }

    pub fn set_category_color(&self, color: String) {
        self.mutate(|s| s.set_category_color(color));
    }

    pub fn set_note_title(&self, title: String) {
        self.mutate(|s| s.set_note_title(title));
    }

    pub fn set_note_content(&self, content: String) {
        self.mutate(|s| s.set_note_content(content));
    }

    pub fn set_note_category(&self, category_id: String) {
        self.mutate(|s| s.set_note_category(category_id));
    }
}
