use leptos::prelude::*;

use crate::commands::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!(
        "/p/{}",
        String::from(js_sys::encode_uri_component(&product.barcode))
    );
    let image_path = product.image_path();
    let price = product.display_price();
    let needs_customization = product.needs_customization();

    view! {
        <a href=href class="product-card-link">
            <div class="product-card">
                <img class="product-card-image" src=image_path alt=product.name.clone() />

                <div class="product-card-content">
                    <p class="product-card-name">{product.name.clone()}</p>
                    <p class="product-card-description">
                        {product.description.clone().unwrap_or_default()}
                    </p>

                    <div class="product-card-footer">
                        <span class="product-card-price">{price}</span>
                        <Show when=move || needs_customization>
                            <span class="product-card-badge">"Customizable"</span>
                        </Show>
                    </div>

                    <Show when=move || needs_customization>
                        <span class="btn btn-primary product-card-cta">"Personalize & Order"</span>
                    </Show>
                </div>
            </div>
        </a>
    }
}
