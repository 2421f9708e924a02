//! Top navigation

use crate::client;
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    // Re-read on every route change
    let _route = use_route::<Route>();
    let signed_in = client::guarded()
        .map(|client| client.guard().is_authenticated())
        .unwrap_or(false);

    let on_logout = Callback::from(|_: MouseEvent| match client::guarded() {
        Ok(client) => {
            if let Err(e) = client.sign_out() {
                client::report_error("Logout failed", &e);
            }
        }
        Err(e) => client::report_error("Logout failed", &e),
    });

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes="brand">{"Job Board"}</Link<Route>>
            <Link<Route> to={Route::Jobs}>{"Jobs"}</Link<Route>>
            <Link<Route> to={Route::Search}>{"Search"}</Link<Route>>
            <Link<Route> to={Route::Companies}>{"Companies"}</Link<Route>>
            if signed_in {
                <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                <Link<Route> to={Route::Applications}>{"Applications"}</Link<Route>>
                <Link<Route> to={Route::PostJob}>{"Post a Job"}</Link<Route>>
                <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
                <button class="logout" onclick={on_logout}>{"Logout"}</button>
            } else {
                <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
            }
        </nav>
    }
}
