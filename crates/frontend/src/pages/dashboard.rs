use crate::components::LoadingSpinner;
use crate::hooks::{Load, use_load};
use crate::route::Route;
use serde_json::Value;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let dashboard = use_load("dashboard", |c| async move { c.dashboard().await });

    let dashboard = match &*dashboard {
        Load::Loading => return html! { <LoadingSpinner text={"Loading dashboard..."} /> },
        Load::Failed => return html! {},
        Load::Ready(dashboard) => dashboard.clone(),
    };

    let greeting = dashboard
        .user
        .as_ref()
        .map_or_else(|| "Welcome".to_string(), |user| format!("Welcome, {}", user.fullname));

    html! {
        <section class="dashboard">
            <h1>{ greeting }</h1>
            if !dashboard.extra.is_empty() {
                <dl>
                    { for dashboard.extra.iter().map(|(key, value)| html! {
                        <>
                            <dt>{ key.replace('_', " ") }</dt>
                            <dd>{ display_value(value) }</dd>
                        </>
                    }) }
                </dl>
            }
            <nav class="quick-links">
                <Link<Route> to={Route::Search}>{"Search jobs"}</Link<Route>>
                <Link<Route> to={Route::Applications}>{"My applications"}</Link<Route>>
                <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
            </nav>
        </section>
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
