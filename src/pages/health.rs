use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, HealthReport};
use crate::components::status_badge::{CheckStatus, StatusBadge};

#[component]
pub fn HealthPage() -> impl IntoView {
    let (checking, set_checking) = signal(false);
    let (report, set_report) = signal::<Option<HealthReport>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let do_health_check = move || {
        set_checking.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::run_health_check().await {
                Ok(r) => set_report.set(Some(r)),
                Err(e) => set_error.set(Some(format!("Health check failed: {}", e))),
            }
            set_checking.set(false);
        });
    };

    // Auto-run on mount
    Effect::new(move |_| {
        do_health_check();
    });

    view! {
        <div class="page health-page">
            <h2>"Health Check"</h2>
            <p class="page-description">
                "Verify that the storefront can reach its product catalog."
            </p>

            <button
                class="btn btn-primary"
                on:click=move |_| do_health_check()
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Checking..." } else { "Run Health Check" }}
            </button>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="health-error">
                            <span class="status-text status-error">{e}</span>
                        </div>
                    }
                })
            }}

            {move || report.get().map(report_rows)}
        </div>
    }
}

fn report_rows(r: HealthReport) -> impl IntoView {
    let hosted = r.catalog_source == "hosted";
    let credential = |set: bool| {
        if !hosted {
            CheckStatus::Skipped
        } else {
            CheckStatus::from(set)
        }
    };
    let configured = |set: bool| if set { "Configured" } else { "Not configured" };

    let catalog_detail = match (&r.catalog_error, r.product_count) {
        (Some(err), _) => err.clone(),
        (None, Some(1)) => "1 product".to_string(),
        (None, Some(n)) => format!("{} products", n),
        (None, None) => String::new(),
    };

    view! {
        <div class="health-results">
            <p class="health-source">{format!("Catalog source: {}", r.catalog_source)}</p>
            <StatusBadge
                label="Store URL"
                status=credential(r.store_url_set)
                detail=configured(r.store_url_set)
            />
            <StatusBadge
                label="Store API Key"
                status=credential(r.store_api_key_set)
                detail=configured(r.store_api_key_set)
            />
            <StatusBadge
                label="Catalog"
                status=CheckStatus::from(r.catalog_reachable)
                detail=catalog_detail
            />
        </div>
    }
}
