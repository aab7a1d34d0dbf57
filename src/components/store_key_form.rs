use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;

/// Keychain service name for the hosted store's API key.
pub const STORE_API_KEY_SERVICE: &str = "storefront-store-api";

/// Save, replace, or remove the hosted store's API key.
///
/// The backend only reports whether a key is saved, never the key itself.
#[component]
pub fn StoreKeyForm() -> impl IntoView {
    let (key_value, set_key_value) = signal(String::new());
    let (is_saved, set_is_saved) = signal(false);
    let (is_busy, set_is_busy) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::has_api_key(STORE_API_KEY_SERVICE).await {
                Ok(saved) => set_is_saved.set(saved),
                Err(e) => set_error_message.set(Some(format!("Failed to check key: {}", e))),
            }
        });
    });

    let save_key = move |_| {
        let key = key_value.get();
        if key.trim().is_empty() {
            set_error_message.set(Some("Please enter the store API key".to_string()));
            return;
        }
        set_is_busy.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            match commands::set_api_key(STORE_API_KEY_SERVICE, key.trim()).await {
                Ok(()) => {
                    set_is_saved.set(true);
                    set_key_value.set(String::new());
                }
                Err(e) => set_error_message.set(Some(format!("Failed to save: {}", e))),
            }
            set_is_busy.set(false);
        });
    };

    let remove_key = move |_| {
        set_is_busy.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            match commands::delete_api_key(STORE_API_KEY_SERVICE).await {
                Ok(()) => set_is_saved.set(false),
                Err(e) => set_error_message.set(Some(format!("Failed to remove: {}", e))),
            }
            set_is_busy.set(false);
        });
    };

    view! {
        <div class="form-group store-key-form">
            <label for="store-api-key">"Store API Key"</label>
            <div class="input-row">
                <input
                    id="store-api-key"
                    type="password"
                    class="input input-password"
                    placeholder="eyJhbGciOi..."
                    prop:value=move || key_value.get()
                    on:input=move |ev| set_key_value.set(event_target_value(&ev))
                    disabled=move || is_busy.get()
                />
                <button class="btn btn-save" on:click=save_key disabled=move || is_busy.get()>
                    {move || if is_busy.get() { "Saving..." } else { "Save" }}
                </button>
                <Show when=move || is_saved.get()>
                    <button class="btn btn-delete" on:click=remove_key disabled=move || is_busy.get()>
                        "Remove"
                    </button>
                </Show>
            </div>
            <div class="key-status-row">
                {move || match (error_message.get(), is_saved.get()) {
                    (Some(err), _) => view! { <span class="status-text status-error">{err}</span> }.into_any(),
                    (None, true) => view! { <span class="status-text status-saved">"Saved to Keychain"</span> }.into_any(),
                    (None, false) => view! { <span class="status-text status-not-set">"Not configured"</span> }.into_any(),
                }}
            </div>
        </div>
    }
}
