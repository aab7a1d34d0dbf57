use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::pages::catalog::CatalogPage;
use crate::pages::health::HealthPage;
use crate::pages::order::OrderPage;
use crate::pages::orders::OrdersPage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::settings::SettingsPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=CatalogPage />
                        <Route path=path!("/p/:barcode") view=ProductDetailPage />
                        <Route path=path!("/order/new/:product_id") view=OrderPage />
                        <Route path=path!("/orders") view=OrdersPage />
                        <Route path=path!("/settings") view=SettingsPage />
                        <Route path=path!("/health") view=HealthPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
