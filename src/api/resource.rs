use crate::models::{Category, CategoryPayload, Note, NotePayload};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A REST collection served under `/api/{PATH}/`.
pub(crate) trait Resource {
    const PATH: &'static str;

    type Entity: DeserializeOwned;
    type Payload: Serialize;

    fn collection_path() -> String {
        format!("/{}/", Self::PATH)
    }

    fn item_path(id: i64) -> String {
        format!("/{}/{}", Self::PATH, id)
    }
}

pub(crate) struct Categories;

impl Resource for Categories {
    const PATH: &'static str = "categories";

    type Entity = Category;
    type Payload = CategoryPayload;
}

pub(crate) struct Notes;

impl Resource for Notes {
    const PATH: &'static str = "notes";

    type Entity = Note;
    type Payload = NotePayload;
}
