use crate::components::{NavBar, RequireSession};
use crate::pages::{
    ApplicationsPage, CompaniesPage, DashboardPage, HomePage, JobDetailPage, JobsPage, LoginPage,
    NotFoundPage, PostJobPage, ProfilePage, RegisterPage, SearchPage,
};
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <NavBar />
            <main class="container">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Search => html! { <SearchPage /> },
        Route::Jobs => html! { <JobsPage /> },
        Route::JobDetail { id } => html! { <JobDetailPage key={id} {id} /> },
        Route::Companies => html! { <CompaniesPage /> },
        Route::PostJob => html! {
            <RequireSession key="post-job"><PostJobPage /></RequireSession>
        },
        Route::Applications => html! {
            <RequireSession key="applications"><ApplicationsPage /></RequireSession>
        },
        Route::Profile => html! {
            <RequireSession key="profile"><ProfilePage /></RequireSession>
        },
        Route::Dashboard => html! {
            <RequireSession key="dashboard"><DashboardPage /></RequireSession>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
