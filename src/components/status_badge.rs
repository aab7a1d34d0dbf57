use leptos::prelude::*;

/// Outcome of one health check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    /// Not applicable to the current catalog source.
    Skipped,
}

impl CheckStatus {
    fn icon_and_class(self) -> (&'static str, &'static str) {
        match self {
            CheckStatus::Pass => ("\u{2713}", "status-badge status-pass"),
            CheckStatus::Fail => ("\u{2717}", "status-badge status-fail"),
            CheckStatus::Skipped => ("\u{2013}", "status-badge status-skipped"),
        }
    }
}

impl From<bool> for CheckStatus {
    fn from(ok: bool) -> Self {
        if ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }
}

#[component]
pub fn StatusBadge(
    #[prop(into)] label: String,
    status: CheckStatus,
    /// Shown to the right of the label, e.g. "12 products"
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    let (icon, class) = status.icon_and_class();

    view! {
        <div class="check-row">
            <span class=class>{icon}</span>
            <span class="check-label">{label}</span>
            <span class="check-detail">{detail.unwrap_or_default()}</span>
        </div>
    }
}
