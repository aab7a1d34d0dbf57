use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, OrderRecord};

const RECENT_LIMIT: usize = 50;

/// Pending pickup orders taken on this device.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<OrderRecord>>(vec![]);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_recent_orders(Some(RECENT_LIMIT)).await {
                Ok(list) => set_orders.set(list),
                Err(e) => set_error.set(Some(format!("Failed to load orders: {}", e))),
            }
        });
    });

    view! {
        <div class="page orders-page">
            <h2>"Recent Orders"</h2>
            {move || error.get().map(|e| view! { <p class="status-text status-error">{e}</p> })}

            <Show
                when=move || !orders.with(|o| o.is_empty())
                fallback=|| view! { <p class="orders-empty">"No orders yet."</p> }
            >
                <table class="orders-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Personalization"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || orders.get()
                            key=|o| o.order_number.clone()
                            children=|o| {
                                let personalization = o
                                    .customization
                                    .as_ref()
                                    .map(|c| c.summary())
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td class="order-number">{o.order_number}</td>
                                        <td>
                                            <p>{o.customer.name}</p>
                                            <p class="order-contact">
                                                {format!("{} \u{00b7} {}", o.customer.email, o.customer.phone)}
                                            </p>
                                        </td>
                                        <td>{personalization}</td>
                                        <td>{format!("${:.2}", o.total_price)}</td>
                                        <td class="order-status">{o.status}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
