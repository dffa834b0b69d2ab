use leptos::*;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::LandingPanel;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! { <LandingPanel /> }
}
