use leptos::prelude::*;
use tw_merge::tw_merge;

/// Genre pill filled with the genre's own color.
#[component]
pub fn GenreBadge(
    #[prop(into)] name: String,
    #[prop(into)] color: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium text-white",
        class
    );

    view! {
        <span data-name="GenreBadge" class=merged_class style=format!("background: {color}")>
            {name}
        </span>
    }
}
