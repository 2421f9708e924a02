use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="hero">
            <h1>{"Find your next job"}</h1>
            <p>{"Browse openings posted by companies, or search listings from across the web."}</p>
            <div class="actions">
                <Link<Route> to={Route::Jobs} classes="button">{"Browse jobs"}</Link<Route>>
                <Link<Route> to={Route::Search} classes="button secondary">{"Search"}</Link<Route>>
            </div>
        </section>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section>
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </section>
    }
}
