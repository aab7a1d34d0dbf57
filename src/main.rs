mod app;
mod commands;
mod components;
mod contact;
mod pages;
mod personalization;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
