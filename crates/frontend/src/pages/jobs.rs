use super::optional_field;
use crate::client;
use crate::components::LoadingSpinner;
use crate::hooks::{Load, use_load};
use crate::route::Route;
use jobboard_core::types::{ApplyRequest, Job, NO_JOBS_FOUND};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(JobsPage)]
pub fn jobs_page() -> Html {
    let jobs = use_load("jobs", |c| async move { c.api().list_jobs().await });

    let body = match &*jobs {
        Load::Loading => html! { <LoadingSpinner text={"Loading jobs..."} /> },
        Load::Failed => html! {},
        Load::Ready(list) if list.is_empty() => html! { <p class="empty">{NO_JOBS_FOUND}</p> },
        Load::Ready(list) => html! {
            <ul class="job-list">{ for list.iter().map(job_item) }</ul>
        },
    };

    html! {
        <section>
            <h1>{"Jobs"}</h1>
            { body }
        </section>
    }
}

fn job_item(job: &Job) -> Html {
    html! {
        <li class="job-card">
            <h3>
                <Link<Route> to={Route::JobDetail { id: job.id }}>{ &job.job_title }</Link<Route>>
            </h3>
            <p class="meta">{ format!("{} · {}", job.job_type, job.location) }</p>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct JobDetailProps {
    pub id: i64,
}

#[function_component(JobDetailPage)]
pub fn job_detail_page(props: &JobDetailProps) -> Html {
    let id = props.id;
    let job = use_load("job", move |c| async move { c.api().get_job(id).await });
    let cover_letter_ref = use_node_ref();
    let applied = use_state(|| false);

    let on_apply = {
        let cover_letter_ref = cover_letter_ref.clone();
        let applied = applied.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = ApplyRequest {
                job_id: id,
                cover_letter: optional_field(&cover_letter_ref),
            };
            let applied = applied.clone();
            spawn_local(async move {
                match client::with_client(|c| async move { c.apply(&request).await }).await {
                    Ok(_) => {
                        gloo::dialogs::alert("Application submitted!");
                        applied.set(true);
                    }
                    Err(e) => client::report_error("Application failed", &e),
                }
            });
        })
    };

    let job = match &*job {
        Load::Loading => return html! { <LoadingSpinner text={"Loading job..."} /> },
        Load::Failed => return html! { <Link<Route> to={Route::Jobs}>{"Back to jobs"}</Link<Route>> },
        Load::Ready(job) => job.clone(),
    };

    html! {
        <article class="job-detail">
            <h1>{ &job.job_title }</h1>
            <p class="meta">{ format!("{} · {} · {}", job.job_type, job.location, job.experience_level) }</p>
            <p class="category">{ &job.category }</p>
            if let Some(deadline) = &job.application_deadline {
                <p class="deadline">{ format!("Apply by {deadline}") }</p>
            }
            <p class="description">{ &job.description }</p>
            if !job.application_link.is_empty() {
                <a href={job.application_link.clone()} target="_blank" rel="noopener noreferrer">
                    {"Company application page"}
                </a>
            }

            if *applied {
                <p class="notice">{"You have applied to this job."}</p>
            } else {
                <form class="apply" onsubmit={on_apply}>
                    <label for="cover_letter">{"Cover letter (optional)"}</label>
                    <textarea id="cover_letter" ref={cover_letter_ref} />
                    <button type="submit">{"Apply"}</button>
                </form>
            }
            <p><Link<Route> to={Route::Jobs}>{"Back to jobs"}</Link<Route>></p>
        </article>
    }
}
