use crate::client;
use crate::components::LoadingSpinner;
use crate::hooks::{Load, use_load};
use jobboard_core::types::Application;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ApplicationsPage)]
pub fn applications_page() -> Html {
    let applications = use_load("applications", |c| async move {
        c.list_applications().await
    });

    let on_withdraw = {
        let applications = applications.clone();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("Withdraw this application?") {
                return;
            }
            let applications = applications.clone();
            spawn_local(async move {
                match client::with_client(|c| async move { c.withdraw_application(id).await }).await {
                    Ok(_) => {
                        if let Load::Ready(list) = &*applications {
                            let remaining = list.iter().filter(|a| a.id != id).cloned().collect();
                            applications.set(Load::Ready(remaining));
                        }
                    }
                    Err(e) => client::report_error("Failed to withdraw application", &e),
                }
            });
        })
    };

    let body = match &*applications {
        Load::Loading => html! { <LoadingSpinner text={"Loading applications..."} /> },
        Load::Failed => html! {},
        Load::Ready(list) if list.is_empty() => html! { <p class="empty">{"No applications yet."}</p> },
        Load::Ready(list) => html! {
            <table class="applications">
                <thead>
                    <tr><th>{"Job"}</th><th>{"Company"}</th><th>{"Applied"}</th><th>{"Status"}</th><th></th></tr>
                </thead>
                <tbody>
                    { for list.iter().map(|a| application_row(a, &on_withdraw)) }
                </tbody>
            </table>
        },
    };

    html! {
        <section>
            <h1>{"My applications"}</h1>
            { body }
        </section>
    }
}

fn application_row(application: &Application, on_withdraw: &Callback<i64>) -> Html {
    let id = application.id;
    let title = application
        .job_title
        .clone()
        .or_else(|| application.job_id.map(|job| format!("Job #{job}")))
        .unwrap_or_default();

    html! {
        <tr>
            <td>{ title }</td>
            <td>{ application.company.clone().unwrap_or_default() }</td>
            <td>{ application.application_date.clone().unwrap_or_default() }</td>
            <td>{ &application.status }</td>
            <td>
                <button onclick={on_withdraw.reform(move |_: MouseEvent| id)}>{"Withdraw"}</button>
            </td>
        </tr>
    }
}
