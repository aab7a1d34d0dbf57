use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <a href="/" class="site-logo">
                    <img
                        src="/RedmanDesignsLogo-horz-2000x767.png"
                        alt="Redman Designs"
                        class="site-logo-image"
                    />
                </a>
                <p class="site-tagline">"Beautifully Personalized, Uniquely Yours"</p>
                <nav class="site-nav">
                    <a href="/orders" class="nav-link">"Orders"</a>
                    <a href="/settings" class="nav-link">"Settings"</a>
                    <a href="/health" class="nav-link">"Health Check"</a>
                </nav>
            </div>
        </header>
    }
}
