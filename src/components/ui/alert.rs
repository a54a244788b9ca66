use crate::state::MessageKind;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

/// Transient banner, colored by outcome.
#[component]
pub fn Alert(
    kind: MessageKind,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let tone = match kind {
        MessageKind::Success => "border-success/30 bg-success/10 text-success",
        MessageKind::Error => "border-destructive/30 bg-destructive/10 text-destructive",
    };
    let merged_class = tw_merge!(
        "relative w-full rounded-lg border px-4 py-3 text-sm",
        tone,
        class
    );

    view! {
        <div data-name="Alert" role="alert" data-kind=kind.as_ref().to_string() class=merged_class>
            {children()}
        </div>
    }
}
