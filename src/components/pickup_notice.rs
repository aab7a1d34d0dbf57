use leptos::prelude::*;

/// Store hours shown under the pickup confirmation.
pub const STORE_HOURS: &[(&str, &str)] = &[
    ("Monday \u{2013} Thursday", "10:00 am \u{2013} 7:00 pm"),
    ("Friday", "10:00 am \u{2013} 6:00 pm"),
    ("Saturday", "Closed"),
    ("Sunday", "11:00 am \u{2013} 6:00 pm"),
];

/// Pickup-only acknowledgement with the pickup location and hours.
#[component]
pub fn PickupNotice(
    confirmed: ReadSignal<bool>,
    set_confirmed: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="pickup-notice">
            <h3>"PICKUP ONLY - Read Carefully"</h3>

            <div class="pickup-confirm">
                <input
                    type="checkbox"
                    id="pickup-confirmation"
                    required=true
                    prop:checked=move || confirmed.get()
                    on:change=move |ev| set_confirmed.set(event_target_checked(&ev))
                />
                <label for="pickup-confirmation">
                    <strong>"I UNDERSTAND THIS IS NOT SHIPPING. It is for pickup at YB Normal Designs."</strong>
                    <span class="required">" *"</span>
                </label>
            </div>

            <div class="pickup-store">
                <img src="/YB Normal Logo-black.PNG" alt="YB Normal" class="pickup-store-logo" />
                <div>
                    <p class="pickup-store-name">"YB Normal"</p>
                    <p class="pickup-store-address">
                        "12346 Woodside Ave, Suite I" <br /> "Lakeside, CA 92040"
                    </p>
                </div>
            </div>

            <div class="pickup-hours">
                <p class="pickup-hours-title">"Store Hours:"</p>
                {STORE_HOURS
                    .iter()
                    .map(|(days, hours)| view! { <p>{format!("{}: {}", days, hours)}</p> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
