use leptos::prelude::*;

use crate::personalization::{self, CustomizationPayload, Edit, Font, NamesRules, Session};

/// Inputs for one product's personalization.
///
/// The session signal is owned by the caller; this component only dispatches
/// edits into it and forwards each emitted payload to `on_change`.
#[component]
pub fn PersonalizationForm(
    /// Product name for the heading
    #[prop(into)]
    product_name: String,
    session: RwSignal<Session>,
    #[prop(into)] on_change: Callback<CustomizationPayload>,
) -> impl IntoView {
    let dispatch = move |edit: Edit| {
        let (next, payload) = personalization::apply(session.get_untracked(), edit);
        session.set(next);
        if let Some(payload) = payload {
            on_change.run(payload);
        }
    };

    match session.get_untracked() {
        Session::Inert => view! { <span></span> }.into_any(),
        Session::Names(state) => {
            let rules = state.rules().clone();
            view! {
                <div class="personalization">
                    <h3 class="personalization-title">{format!("Personalize Your {}", product_name)}</h3>
                    <p class="personalization-hint">{rules.instructions()}</p>
                    {font_picker(session, dispatch)}
                    <div class="name-slots">
                        {(0..rules.max_names)
                            .map(|index| name_input(&rules, index, session, dispatch))
                            .collect::<Vec<_>>()}
                    </div>
                    {move || {
                        session.with(|s| s.preview()).map(|preview| {
                            view! {
                                <div class="preview">
                                    <p class="preview-label">"Preview:"</p>
                                    <p class="preview-text" style:font-family=preview.font.name()>
                                        {preview.text}
                                    </p>
                                    <p class="preview-font">{format!("Font: {}", preview.font)}</p>
                                </div>
                            }
                        })
                    }}
                </div>
            }
            .into_any()
        }
        Session::Text(state) => {
            let max_chars = state.rules().max_chars;
            let placeholder = state.rules().placeholder.clone();
            let instructions = state.rules().instructions();
            let text = move || {
                session.with(|s| match s {
                    Session::Text(t) => t.text().to_string(),
                    _ => String::new(),
                })
            };
            let count = move || {
                session.with(|s| match s {
                    Session::Text(t) => t.char_count(),
                    _ => 0,
                })
            };
            view! {
                <div class="personalization">
                    <h3 class="personalization-title">{format!("Personalize Your {}", product_name)}</h3>
                    <p class="personalization-hint">{instructions}</p>
                    <div class="form-group">
                        <label>"Custom Text " <span class="required">"*"</span></label>
                        <input
                            type="text"
                            class="input"
                            placeholder=placeholder
                            required=true
                            prop:value=text
                            on:input=move |ev| dispatch(Edit::Text(event_target_value(&ev)))
                        />
                        <p class="char-count">{move || format!("{}/{} characters", count(), max_chars)}</p>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

fn font_picker(
    session: RwSignal<Session>,
    dispatch: impl Fn(Edit) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let selected = move || {
        session.with(|s| match s {
            Session::Names(state) => state.font(),
            _ => Font::default(),
        })
    };

    view! {
        <div class="form-group">
            <label>"Choose Engraving Font " <span class="required">"*"</span></label>
            <div class="font-options">
                {Font::ALL
                    .into_iter()
                    .map(|font| {
                        view! {
                            <label class=move || {
                                if selected() == font { "font-option selected" } else { "font-option" }
                            }>
                                <input
                                    type="radio"
                                    name="font"
                                    class="sr-only"
                                    value=font.name()
                                    prop:checked=move || selected() == font
                                    on:change=move |_| dispatch(Edit::Font(font))
                                />
                                <span class="font-sample" style:font-family=font.name()>{font.name()}</span>
                                <Show when=move || selected() == font>
                                    <span class="font-check">"\u{2713}"</span>
                                </Show>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn name_input(
    rules: &NamesRules,
    index: usize,
    session: RwSignal<Session>,
    dispatch: impl Fn(Edit) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let max_chars = rules.max_chars_per_name;
    let label = rules.slot_label(index);
    let placeholder = rules.placeholder.clone();
    let required = NamesRules::is_required(index);

    let value = move || {
        session.with(|s| match s {
            Session::Names(state) => state.names().get(index).cloned().unwrap_or_default(),
            _ => String::new(),
        })
    };
    let count = move || {
        session.with(|s| match s {
            Session::Names(state) => state.char_count(index),
            _ => 0,
        })
    };

    view! {
        <div class="form-group name-slot">
            <label>
                {label}
                <Show when=move || required>
                    <span class="required">" *"</span>
                </Show>
            </label>
            <input
                type="text"
                class="input"
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=move |ev| {
                    dispatch(Edit::Name {
                        index,
                        value: event_target_value(&ev),
                    })
                }
            />
            <p class="char-count">{move || format!("{}/{} characters", count(), max_chars)}</p>
        </div>
    }
}
