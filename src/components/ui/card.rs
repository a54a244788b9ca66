use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, section, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "flex flex-col gap-4 px-6"}
    clx! {CardList, ul, "flex flex-col gap-2"}
    clx! {CardItem, li, "flex items-center justify-between gap-2 rounded-md border px-3 py-2"}

    // Band entries carry a genre-colored left edge.
    clx! {NoteCard, li, "flex flex-col gap-2 rounded-md border border-l-4 px-4 py-3"}
}

pub use components::*;
