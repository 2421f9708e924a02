use super::field;
use crate::client;
use crate::components::LoadingSpinner;
use jobboard_core::types::{JobHit, NO_JOBS_FOUND, SearchResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let query_ref = use_node_ref();
    let results = use_state(|| None::<SearchResponse>);
    let searching = use_state(|| false);

    let on_submit = {
        let query_ref = query_ref.clone();
        let results = results.clone();
        let searching = searching.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = field(&query_ref).trim().to_string();
            if query.is_empty() || *searching {
                return;
            }

            let results = results.clone();
            let searching = searching.clone();
            searching.set(true);
            spawn_local(async move {
                match client::with_client(|c| async move { c.api().search_jobs(&query).await })
                    .await
                {
                    Ok(found) => results.set(Some(found)),
                    Err(e) => {
                        client::report_error("Search failed", &e);
                        results.set(None);
                    }
                }
                searching.set(false);
            });
        })
    };

    let body = if *searching {
        html! { <LoadingSpinner text={"Searching..."} /> }
    } else {
        match &*results {
            None => html! {},
            Some(found) if found.is_empty() => html! { <p class="empty">{NO_JOBS_FOUND}</p> },
            Some(found) => html! {
                <ul class="job-list">
                    { for found.hits.iter().map(hit_item) }
                </ul>
            },
        }
    };

    html! {
        <section>
            <h1>{"Search jobs"}</h1>
            <form class="search" onsubmit={on_submit}>
                <input type="search" placeholder="Job title, skill or company" ref={query_ref} />
                <button type="submit" disabled={*searching}>{"Search"}</button>
            </form>
            { body }
        </section>
    }
}

fn hit_item(hit: &JobHit) -> Html {
    let location = hit.location_label();
    html! {
        <li class="job-card">
            <h3>{ &hit.title }</h3>
            if let Some(org) = &hit.hiring_organization_name {
                <p class="company">{ org }</p>
            }
            if !location.is_empty() {
                <p class="location">{ location }</p>
            }
            if let Some(posted) = hit.posted_on() {
                <p class="posted">{ format!("Posted {posted}") }</p>
            }
            <p class="description">{ &hit.description }</p>
            if let Some(url) = &hit.url {
                <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"View listing"}</a>
            }
        </li>
    }
}
