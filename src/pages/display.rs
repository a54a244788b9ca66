use crate::models::DEFAULT_CATEGORY_COLOR;
use crate::state::AppState;
use chrono::NaiveDate;

const UNKNOWN_GENRE: &str = "Unknown";
const EMPTY_CONTENT: &str = "(empty)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GenreRow {
    pub id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BandCard {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub genre_name: String,
    pub genre_color: String,
    pub date: String,
}

impl BandCard {
    /// Inline style tinting the card edge with its genre color.
    pub fn edge_style(&self) -> String {
        format!("border-left-color: {}", self.genre_color)
    }
}

pub(crate) fn genre_rows(state: &AppState) -> Vec<GenreRow> {
    state
        .categories
        .iter()
        .map(|c| GenreRow {
            id: c.id,
            name: c.name.clone(),
            color: c.color.clone(),
        })
        .collect()
}

/// Prefers the genre embedded in the note, then the loaded list.
pub(crate) fn band_cards(state: &AppState) -> Vec<BandCard> {
    state
        .notes
        .iter()
        .map(|n| {
            let genre = n
                .category
                .as_ref()
                .or_else(|| state.find_category(n.category_id));

            BandCard {
                id: n.id,
                title: n.title.clone(),
                content: if n.content.is_empty() {
                    EMPTY_CONTENT.to_string()
                } else {
                    n.content.clone()
                },
                genre_name: genre
                    .map(|g| g.name.clone())
                    .unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
                genre_color: genre
                    .map(|g| g.color.clone())
                    .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
                date: short_date(&n.created_at),
            }
        })
        .collect()
}

/// `(value, label)` pairs for the genre picker.
pub(crate) fn genre_options(state: &AppState) -> Vec<(String, String)> {
    state
        .categories
        .iter()
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect()
}

/// `2024-01-01T10:00:00` -> `1/1/2024`. Unparseable input is returned as is.
pub(crate) fn short_date(raw: &str) -> String {
    let day = raw
        .trim()
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or_default();

    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
