use super::{field, optional_field};
use crate::client;
use crate::hooks::{Load, use_load};
use crate::route::Route;
use jobboard_core::types::NewJob;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const JOB_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Internship"];
const EXPERIENCE_LEVELS: [&str; 3] = ["Entry", "Mid", "Senior"];

#[function_component(PostJobPage)]
pub fn post_job_page() -> Html {
    let navigator = use_navigator();
    let companies = use_load("companies", |c| async move { c.api().list_companies().await });

    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let job_type_ref = use_node_ref();
    let category_ref = use_node_ref();
    let company_ref = use_node_ref();
    let experience_ref = use_node_ref();
    let link_ref = use_node_ref();
    let location_ref = use_node_ref();
    let deadline_ref = use_node_ref();
    let submitting = use_state(|| false);

    let on_submit = {
        let refs = (
            title_ref.clone(),
            description_ref.clone(),
            job_type_ref.clone(),
            category_ref.clone(),
            company_ref.clone(),
            experience_ref.clone(),
            link_ref.clone(),
            location_ref.clone(),
            deadline_ref.clone(),
        );
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let (title, description, job_type, category, company, experience, link, location, deadline) =
                &refs;

            let Ok(company_id) = field(company).parse::<i64>() else {
                gloo::dialogs::alert("Please choose a company");
                return;
            };
            let job = NewJob {
                job_title: field(title).trim().to_string(),
                description: field(description).trim().to_string(),
                job_type: field(job_type),
                category: field(category).trim().to_string(),
                company_id,
                experience_level: field(experience),
                application_link: field(link).trim().to_string(),
                location: optional_field(location),
                application_deadline: optional_field(deadline),
            };
            if job.job_title.is_empty() || job.description.is_empty() {
                gloo::dialogs::alert("Title and description are required");
                return;
            }

            let navigator = navigator.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            spawn_local(async move {
                match client::with_client(|c| async move { c.create_job(&job).await }).await {
                    Ok(_) => {
                        gloo::dialogs::alert("Job posted successfully!");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Jobs);
                        }
                    }
                    Err(e) => client::report_error("Failed to post job", &e),
                }
                submitting.set(false);
            });
        })
    };

    let company_options = match &*companies {
        Load::Ready(list) => list
            .iter()
            .map(|company| {
                html! { <option value={company.id.to_string()}>{ &company.company_name }</option> }
            })
            .collect::<Html>(),
        _ => html! {},
    };

    html! {
        <section>
            <h1>{"Post a job"}</h1>
            <form class="job-form" onsubmit={on_submit}>
                <label for="job_title">{"Title"}</label>
                <input id="job_title" type="text" ref={title_ref} required=true />

                <label for="description">{"Description"}</label>
                <textarea id="description" ref={description_ref} required=true />

                <label for="job_type">{"Type"}</label>
                <select id="job_type" ref={job_type_ref}>
                    { for JOB_TYPES.iter().map(|t| html! { <option value={*t}>{ *t }</option> }) }
                </select>

                <label for="category">{"Category"}</label>
                <input id="category" type="text" ref={category_ref} required=true />

                <label for="company_id">{"Company"}</label>
                <select id="company_id" ref={company_ref}>
                    <option value="">{"Select a company"}</option>
                    { company_options }
                </select>

                <label for="experience_level">{"Experience level"}</label>
                <select id="experience_level" ref={experience_ref}>
                    { for EXPERIENCE_LEVELS.iter().map(|l| html! { <option value={*l}>{ *l }</option> }) }
                </select>

                <label for="application_link">{"Application link"}</label>
                <input id="application_link" type="url" ref={link_ref} />

                <label for="location">{"Location"}</label>
                <input id="location" type="text" placeholder="Remote" ref={location_ref} />

                <label for="application_deadline">{"Application deadline"}</label>
                <input id="application_deadline" type="date" ref={deadline_ref} />

                <button type="submit" disabled={*submitting}>{"Post job"}</button>
            </form>
        </section>
    }
}
