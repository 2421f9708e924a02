use super::field;
use crate::client;
use crate::components::LoadingSpinner;
use crate::hooks::{Load, use_load};
use jobboard_core::types::{Company, NewCompany};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(CompaniesPage)]
pub fn companies_page() -> Html {
    let companies = use_load("companies", |c| async move { c.api().list_companies().await });
    let signed_in = client::guarded()
        .map(|c| c.guard().is_authenticated())
        .unwrap_or(false);

    let name_ref = use_node_ref();
    let description_ref = use_node_ref();
    let website_ref = use_node_ref();
    let size_ref = use_node_ref();
    let industry_ref = use_node_ref();
    let email_ref = use_node_ref();

    let on_create = {
        let refs = (
            name_ref.clone(),
            description_ref.clone(),
            website_ref.clone(),
            size_ref.clone(),
            industry_ref.clone(),
            email_ref.clone(),
        );
        let companies = companies.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, description, website, size, industry, email) = &refs;
            let company = NewCompany {
                company_name: field(name).trim().to_string(),
                description: field(description).trim().to_string(),
                website_url: field(website).trim().to_string(),
                company_size: field(size).trim().to_string(),
                industry: field(industry).trim().to_string(),
                contact_email: field(email).trim().to_string(),
            };
            if company.company_name.is_empty() {
                gloo::dialogs::alert("Company name is required");
                return;
            }

            let companies = companies.clone();
            spawn_local(async move {
                match client::with_client(|c| async move { c.create_company(&company).await }).await {
                    Ok(created) => {
                        let mut list = match &*companies {
                            Load::Ready(list) => list.clone(),
                            _ => Vec::new(),
                        };
                        list.push(created);
                        companies.set(Load::Ready(list));
                    }
                    Err(e) => client::report_error("Failed to create company", &e),
                }
            });
        })
    };

    let body = match &*companies {
        Load::Loading => html! { <LoadingSpinner text={"Loading companies..."} /> },
        Load::Failed => html! {},
        Load::Ready(list) if list.is_empty() => html! { <p class="empty">{"No companies yet."}</p> },
        Load::Ready(list) => html! {
            <ul class="company-list">{ for list.iter().map(company_item) }</ul>
        },
    };

    html! {
        <section>
            <h1>{"Companies"}</h1>
            { body }
            if signed_in {
                <form class="company-form" onsubmit={on_create}>
                    <h2>{"Add a company"}</h2>
                    <label for="company_name">{"Name"}</label>
                    <input id="company_name" type="text" ref={name_ref} required=true />
                    <label for="company_description">{"Description"}</label>
                    <textarea id="company_description" ref={description_ref} />
                    <label for="website_url">{"Website"}</label>
                    <input id="website_url" type="url" ref={website_ref} />
                    <label for="company_size">{"Size"}</label>
                    <input id="company_size" type="text" ref={size_ref} />
                    <label for="industry">{"Industry"}</label>
                    <input id="industry" type="text" ref={industry_ref} />
                    <label for="contact_email">{"Contact email"}</label>
                    <input id="contact_email" type="email" ref={email_ref} />
                    <button type="submit">{"Create company"}</button>
                </form>
            }
        </section>
    }
}

fn company_item(company: &Company) -> Html {
    html! {
        <li class="company-card">
            <h3>{ &company.company_name }</h3>
            <p class="meta">{ format!("{} · {}", company.industry, company.company_size) }</p>
            <p>{ &company.description }</p>
            if !company.website_url.is_empty() {
                <a href={company.website_url.clone()} target="_blank" rel="noopener noreferrer">
                    { &company.website_url }
                </a>
            }
        </li>
    }
}
