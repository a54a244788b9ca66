use super::input::field_class;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Native `<select>` with a leading empty placeholder option.
///
/// `options` are `(value, label)` pairs; the empty value means "nothing picked".
#[component]
pub fn Select(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_value: Callback<String>,
) -> impl IntoView {
    let merged_class = field_class("h-9", class);

    let on_change = move |ev: web_sys::Event| {
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            on_value.run(select.value());
        }
    };

    view! {
        <select
            data-name="Select"
            class=merged_class
            id=id
            prop:value=move || value.get()
            on:change=on_change
        >
            <option value="">{placeholder}</option>
            {move || {
                let selected = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|(v, label)| {
                        let is_selected = v == selected;
                        view! { <option value=v selected=is_selected>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
