mod display;

use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardItem, CardList, CardTitle, GenreBadge, Input, Label, NoteCard, Select, Spinner, Textarea,
};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

use display::{band_cards, genre_options, genre_rows, BandCard, GenreRow};

#[component]
pub fn BandsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let snapshot = ctx.snapshot;

    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.load().await;
        });
    });

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-[1080px] px-4 py-8">
                <Show
                    when=move || !snapshot.with(|s| s.loading)
                    fallback=|| view! {
                        <div class="flex items-center justify-center gap-2 py-24 text-sm text-muted-foreground">
                            <Spinner />
                            "Loading..."
                        </div>
                    }
                >
                    <h1 class="mb-6 text-xl font-semibold">
                        <span class="text-primary">"Bands"</span>
                        " App"
                    </h1>

                    <FlashBanner />

                    <div class="grid gap-6 md:grid-cols-2">
                        <GenresSection />
                        <BandsSection />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn FlashBanner() -> impl IntoView {
    let snapshot = expect_context::<AppContext>().snapshot;

    move || {
        snapshot.with(|s| s.message.clone()).map(|m| {
            view! {
                <Alert kind=m.kind class="mb-4">
                    <AlertDescription>{m.text}</AlertDescription>
                </Alert>
            }
        })
    }
}

#[component]
fn GenresSection() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let snapshot = ctx.snapshot;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.submit_category().await;
        });
    };

    let on_cancel = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.controller().cancel_edit();
    };

    let on_edit = move |id: i64| {
        if let Some(cat) = snapshot.with_untracked(|s| s.find_category(id).cloned()) {
            ctx.controller().start_edit_category(&cat);
        }
    };

    let on_delete = move |id: i64| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.delete_category(id).await;
        });
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Genres"</CardTitle>
            </CardHeader>

            <CardContent>
                <form class="flex flex-col gap-4" on:submit=on_submit>
                    <div class="flex flex-col gap-2">
                        <Label html_for="genre-name">"Name"</Label>
                        <Input
                            id="genre-name"
                            placeholder="Genre name"
                            value=Signal::derive(move || snapshot.with(|s| s.category_form.name.clone()))
                            on_value=Callback::new(move |v: String| ctx.controller().set_category_name(v))
                        />
                    </div>

                    <div class="flex flex-col gap-2">
                        <Label html_for="genre-color">"Color"</Label>
                        <Input
                            id="genre-color"
                            r#type="color"
                            value=Signal::derive(move || snapshot.with(|s| s.category_form.color.clone()))
                            on_value=Callback::new(move |v: String| ctx.controller().set_category_color(v))
                        />
                    </div>

                    <div class="flex items-center gap-2">
                        <Button size=ButtonSize::Sm attr:disabled=move || snapshot.with(|s| s.saving)>
                            {move || snapshot.with(|s| s.category_submit_label())}
                        </Button>
                        <Show when=move || snapshot.with(|s| s.is_editing_category()) fallback=|| ().into_view()>
                            <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm on:click=on_cancel>
                                "Cancel"
                            </Button>
                        </Show>
                    </div>
                </form>

                {move || {
                    let rows = snapshot.with(genre_rows);
                    if rows.is_empty() {
                        return view! { <p class="text-xs text-muted-foreground">"No genres yet"</p> }
                            .into_any();
                    }

                    view! {
                        <CardList>
                            {rows
                                .into_iter()
                                .map(|row: GenreRow| {
                                    let id = row.id;
                                    view! {
                                        <CardItem>
                                            <GenreBadge name=row.name color=row.color />
                                            <span class="flex items-center gap-1">
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Sm
                                                    on:click=move |_| on_edit(id)
                                                >
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    variant=ButtonVariant::Destructive
                                                    size=ButtonSize::Icon
                                                    attr:title="Delete genre"
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    "X"
                                                </Button>
                                            </span>
                                        </CardItem>
                                    }
                                })
                                .collect_view()}
                        </CardList>
                    }
                    .into_any()
                }}
            </CardContent>
        </Card>
    }
}

#[component]
fn BandsSection() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let snapshot = ctx.snapshot;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.submit_note().await;
        });
    };

    let on_cancel = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.controller().cancel_edit();
    };

    let on_edit = move |id: i64| {
        if let Some(note) = snapshot.with_untracked(|s| s.find_note(id).cloned()) {
            ctx.controller().start_edit_note(&note);
        }
    };

    let on_delete = move |id: i64| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.delete_note(id).await;
        });
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Bands"</CardTitle>
            </CardHeader>

            <CardContent>
                <form class="flex flex-col gap-4" on:submit=on_submit>
                    <div class="flex flex-col gap-2">
                        <Label html_for="band-title">"Title"</Label>
                        <Input
                            id="band-title"
                            placeholder="Band name"
                            value=Signal::derive(move || snapshot.with(|s| s.note_form.title.clone()))
                            on_value=Callback::new(move |v: String| ctx.controller().set_note_title(v))
                        />
                    </div>

                    <div class="flex flex-col gap-2">
                        <Label html_for="band-content">"Content"</Label>
                        <Textarea
                            id="band-content"
                            placeholder="Band description..."
                            value=Signal::derive(move || snapshot.with(|s| s.note_form.content.clone()))
                            on_value=Callback::new(move |v: String| ctx.controller().set_note_content(v))
                        />
                    </div>

                    <div class="flex flex-col gap-2">
                        <Label html_for="band-genre">"Genre"</Label>
                        <Select
                            id="band-genre"
                            placeholder="Select genre"
                            options=Signal::derive(move || snapshot.with(genre_options))
                            value=Signal::derive(move || snapshot.with(|s| s.note_form.category_id.clone()))
                            on_value=Callback::new(move |v: String| ctx.controller().set_note_category(v))
                        />
                    </div>

                    <div class="flex items-center gap-2">
                        <Button size=ButtonSize::Sm attr:disabled=move || snapshot.with(|s| s.saving)>
                            {move || snapshot.with(|s| s.note_submit_label())}
                        </Button>
                        <Show when=move || snapshot.with(|s| s.is_editing_note()) fallback=|| ().into_view()>
                            <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm on:click=on_cancel>
                                "Cancel"
                            </Button>
                        </Show>
                    </div>
                </form>

                {move || {
                    let cards = snapshot.with(band_cards);
                    if cards.is_empty() {
                        return view! { <p class="text-xs text-muted-foreground">"No bands yet"</p> }
                            .into_any();
                    }

                    view! {
                        <CardList>
                            {cards
                                .into_iter()
                                .map(|card: BandCard| {
                                    let id = card.id;
                                    let edge = card.edge_style();
                                    view! {
                                        <NoteCard attr:style=edge>
                                            <h4 class="text-sm font-medium">{card.title}</h4>
                                            <p class="text-xs text-muted-foreground">{card.content}</p>
                                            <div class="flex items-center gap-2 text-xs text-muted-foreground">
                                                <GenreBadge name=card.genre_name color=card.genre_color />
                                                <span>{card.date}</span>
                                            </div>
                                            <div class="flex items-center gap-1">
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Sm
                                                    on:click=move |_| on_edit(id)
                                                >
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    variant=ButtonVariant::Destructive
                                                    size=ButtonSize::Sm
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    "Delete"
                                                </Button>
                                            </div>
                                        </NoteCard>
                                    }
                                })
                                .collect_view()}
                        </CardList>
                    }
                    .into_any()
                }}
            </CardContent>
        </Card>
    }
}
