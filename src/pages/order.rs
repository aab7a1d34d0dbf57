use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, CustomerInfo, OrderReceipt, OrderRequest, Product};
use crate::components::order_summary::OrderSummary;
use crate::components::personalization_form::PersonalizationForm;
use crate::components::pickup_notice::PickupNotice;
use crate::contact::{self, ContactField};
use crate::personalization::{CustomizationPayload, Session};

/// Order form for one product (`/order/new/:product_id`).
#[component]
pub fn OrderPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.read().get("product_id").unwrap_or_default();

    let (product, set_product) = signal::<Option<Product>>(None);
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        let id = product_id();
        set_is_loading.set(true);
        spawn_local(async move {
            set_product.set(commands::get_product(&id).await.ok());
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="page order-page">
            {move || {
                if is_loading.get() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                match product.get() {
                    Some(p) => order_form(p).into_any(),
                    None => view! {
                        <div class="not-found">
                            <p>"Product not found"</p>
                            <a href="/">"Back to Collection"</a>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

fn order_form(product: Product) -> impl IntoView {
    let session = RwSignal::new(Session::for_product(&product));
    let (customization, set_customization) = signal::<Option<CustomizationPayload>>(None);
    let (customer, set_customer) = signal(CustomerInfo::default());
    let (pickup_confirmed, set_pickup_confirmed) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (issues, set_issues) = signal::<Vec<String>>(vec![]);
    let (receipt, set_receipt) = signal::<Option<OrderReceipt>>(None);

    let can_submit = move || {
        !is_submitting.get()
            && pickup_confirmed.get()
            && session.with(|s| s.is_ready())
            && customer.with(contact::is_complete)
    };

    let product_id = product.id.clone();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !pickup_confirmed.get_untracked() {
            set_issues.set(vec!["Please confirm you understand this is pickup only.".to_string()]);
            return;
        }
        let request = OrderRequest {
            product_id: product_id.clone(),
            customer: customer.get_untracked(),
            customization: session.with_untracked(|s| s.payload()),
            pickup_confirmed: true,
        };
        set_is_submitting.set(true);
        set_issues.set(vec![]);
        spawn_local(async move {
            match commands::submit_order(request).await {
                Ok(r) => set_receipt.set(Some(r)),
                Err(e) => set_issues.set(e.split("; ").map(str::to_string).collect()),
            }
            set_is_submitting.set(false);
        });
    };

    let back_href = format!(
        "/p/{}",
        String::from(js_sys::encode_uri_component(&product.barcode))
    );
    let product_name = product.name.clone();
    let summary_product = product;

    view! {
        <a href=back_href class="back-link">"\u{2190} Back to Product"</a>
        <h1 class="order-title">"Complete Your Order"</h1>

        <div class="order-layout">
            <form class="order-form" on:submit=submit>
                <Show when=move || session.with(|s| !matches!(s, Session::Inert))>
                    <div class="order-section">
                        <PersonalizationForm
                            product_name=product_name.clone()
                            session=session
                            on_change=move |payload: CustomizationPayload| set_customization.set(Some(payload))
                        />
                    </div>
                </Show>

                <div class="order-section">
                    <h3>"Your Information"</h3>
                    {ContactField::ALL
                        .into_iter()
                        .map(|field| customer_field(field, customer, set_customer))
                        .collect::<Vec<_>>()}
                </div>

                <PickupNotice confirmed=pickup_confirmed set_confirmed=set_pickup_confirmed />

                <Show when=move || !issues.with(|i| i.is_empty())>
                    <ul class="order-issues">
                        {move || {
                            issues
                                .get()
                                .into_iter()
                                .map(|issue| view! { <li class="status-text status-error">{issue}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                {move || match receipt.get() {
                    Some(r) => view! {
                        <div class="order-receipt">
                            <p class="order-number">{format!("Order {}", r.order_number)}</p>
                            <p>{format!("{} \u{00b7} ${:.2} \u{00b7} {}", r.product_name, r.total_price, r.status)}</p>
                            <p>{r.message}</p>
                            <Show when=move || !r.payment_available>
                                <p class="order-pickup-note">"We'll have it ready for pickup at YB Normal."</p>
                            </Show>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || !can_submit()>
                            {move || if is_submitting.get() { "Submitting..." } else { "Continue to Payment" }}
                        </button>
                    }
                    .into_any(),
                }}
            </form>

            <OrderSummary product=summary_product customization=customization />
        </div>
    }
}

fn customer_field(
    field: ContactField,
    customer: ReadSignal<CustomerInfo>,
    set_customer: WriteSignal<CustomerInfo>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{field.label()} <span class="required">" *"</span></label>
            <input
                type=field.input_type()
                class="input"
                placeholder=field.placeholder()
                required=true
                prop:value=move || customer.with(|c| field.value(c).to_string())
                on:input=move |ev| {
                    let input = event_target_value(&ev);
                    set_customer.update(|c| field.set(c, input));
                }
            />
        </div>
    }
}
