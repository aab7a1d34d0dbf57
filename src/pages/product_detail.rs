use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, CustomizationType, Product};
use crate::personalization::ResolvedRules;

/// Product page, reached by barcode (`/p/:barcode`).
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let barcode = move || params.read().get("barcode").unwrap_or_default();

    let (product, set_product) = signal::<Option<Product>>(None);
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        let code = barcode();
        set_is_loading.set(true);
        spawn_local(async move {
            set_product.set(commands::get_product_by_barcode(&code).await.ok());
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="page product-page">
            <a href="/" class="back-link">"\u{2190} Back to Collection"</a>
            {move || {
                if is_loading.get() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                match product.get() {
                    Some(p) => product_details(p).into_any(),
                    None => view! { <p class="not-found">"Product not found"</p> }.into_any(),
                }
            }}
        </div>
    }
}

fn product_details(product: Product) -> impl IntoView {
    let needs_customization = product.needs_customization();
    let personalize_hint = match product.customization_type {
        CustomizationType::Names => "Add names to make it yours",
        CustomizationType::Text => "Add your custom text",
        CustomizationType::None => "",
    };
    let limits = ResolvedRules::from_product(&product).instructions();
    let order_href = format!("/order/new/{}", product.id);
    let cta = if needs_customization {
        "Personalize & Order"
    } else {
        "Order Now"
    };

    view! {
        <div class="product-layout">
            <img class="product-image" src=product.image_path() alt=product.name.clone() />

            <div class="product-info">
                <h1 class="product-name">{product.name.clone()}</h1>
                <p class="product-price">{product.display_price()}</p>
                <p class="product-description">{product.description.clone().unwrap_or_default()}</p>

                <Show when=move || needs_customization>
                    <div class="personalizable-box">
                        <h3>"Personalizable Product"</h3>
                        <p>{personalize_hint}</p>
                        <p class="personalizable-limits">{limits.clone().unwrap_or_default()}</p>
                    </div>
                </Show>

                <a href=order_href class="btn btn-primary btn-block">{cta}</a>

                <div class="pickup-info">
                    <h3>"Pickup Only"</h3>
                    <p>"Orders are available for pickup at our shop location."</p>
                </div>
            </div>
        </div>
    }
}
