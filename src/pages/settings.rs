use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::store_key_form::StoreKeyForm;

/// Preference key holding the hosted store's base URL.
const STORE_URL_PREFERENCE: &str = "store_url";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (store_url, set_store_url) = signal(String::new());
    let (url_status, set_url_status) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_preference(STORE_URL_PREFERENCE).await {
                Ok(Some(url)) => set_store_url.set(url),
                Ok(None) => {}
                Err(e) => set_url_status.set(Some(format!("Failed to load preference: {}", e))),
            }
        });
    });

    let save_store_url = move |_| {
        let url = store_url.get().trim().to_string();
        spawn_local(async move {
            match commands::set_preference(STORE_URL_PREFERENCE, &url).await {
                Ok(()) if url.is_empty() => {
                    set_url_status.set(Some("Cleared; using the local catalog".to_string()))
                }
                Ok(()) => set_url_status.set(Some("Store URL saved".to_string())),
                Err(e) => set_url_status.set(Some(format!("Failed to save: {}", e))),
            }
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Hosted Catalog"</h3>
                <p class="section-description">
                    "Leave the URL empty to serve products from the local catalog. "
                    "The API key is stored in your system keychain."
                </p>

                <div class="form-group">
                    <label for="store-url">"Store URL"</label>
                    <div class="input-row">
                        <input
                            id="store-url"
                            type="text"
                            placeholder="https://your-project.supabase.co"
                            class="input"
                            prop:value=move || store_url.get()
                            on:input=move |ev| set_store_url.set(event_target_value(&ev))
                        />
                        <button class="btn btn-save" on:click=save_store_url>"Save"</button>
                    </div>
                    {move || url_status.get().map(|msg| view! { <span class="status-text">{msg}</span> })}
                </div>

                <StoreKeyForm />
            </section>
        </div>
    }
}
