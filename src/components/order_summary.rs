use leptos::prelude::*;

use crate::commands::Product;
use crate::personalization::CustomizationPayload;

#[component]
pub fn OrderSummary(
    product: Product,
    customization: ReadSignal<Option<CustomizationPayload>>,
) -> impl IntoView {
    let personalization = move || {
        customization
            .get()
            .map(|p| p.summary())
            .filter(|s| !s.is_empty())
    };

    view! {
        <div class="order-summary">
            <h3>"Order Summary"</h3>
            <img class="order-summary-image" src=product.image_path() alt=product.name.clone() />
            <p class="order-summary-name">{product.name.clone()}</p>

            {move || personalization().map(|text| view! {
                <div class="order-summary-personalization">
                    <p class="order-summary-label">"Personalization:"</p>
                    <p>{text}</p>
                </div>
            })}

            <div class="order-summary-total">
                <span>"Total"</span>
                <span class="order-summary-price">{product.display_price()}</span>
            </div>
        </div>
    }
}
