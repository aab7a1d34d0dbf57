use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, Product};
use crate::components::product_card::ProductCard;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => set_load_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="page catalog-page">
            <h2 class="catalog-title">"Redman Designs Collection"</h2>

            {move || {
                if is_loading.get() {
                    view! { <p class="loading">"Loading..."</p> }.into_any()
                } else if products.with(|p| p.is_empty()) {
                    view! {
                        <div class="catalog-empty">
                            <p>"No products available yet. Check back soon!"</p>
                            <p class="catalog-empty-hint">
                                {load_error
                                    .get()
                                    .map(|e| format!("Could not load the catalog: {}", e))
                                    .unwrap_or_else(|| "Configure the store connection in Settings and add products to get started.".to_string())}
                            </p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="product-grid">
                            <For
                                each=move || products.get()
                                key=|p| p.id.clone()
                                children=|product| view! { <ProductCard product=product /> }
                            />
                        </div>
                        <p class="catalog-hint">"Hover over cards to reveal product details"</p>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
