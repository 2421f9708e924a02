use super::field;
use crate::client::{self, ClientError};
use crate::route::Route;
use gloo::file::File;
use gloo::file::futures::read_as_bytes;
use jobboard_core::types::{Registration, Upload};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn selected_file(node: &NodeRef) -> Option<File> {
    let input = node.cast::<HtmlInputElement>()?;
    input.files()?.get(0).map(File::from)
}

async fn read_upload(file: Option<File>) -> Result<Option<Upload>, ClientError> {
    let Some(file) = file else {
        return Ok(None);
    };
    let bytes = read_as_bytes(&file)
        .await
        .map_err(|e| ClientError::Configuration(format!("cannot read {}: {e}", file.name())))?;
    let content_type = match file.raw_mime_type() {
        mime if mime.is_empty() => "application/octet-stream".to_string(),
        mime => mime,
    };
    Ok(Some(Upload {
        file_name: file.name(),
        content_type,
        bytes,
    }))
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator();
    let fullname_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let picture_ref = use_node_ref();
    let resume_ref = use_node_ref();
    let submitting = use_state(|| false);

    let on_submit = {
        let fullname_ref = fullname_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let picture_ref = picture_ref.clone();
        let resume_ref = resume_ref.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let mut registration = Registration {
                fullname: field(&fullname_ref).trim().to_string(),
                email: field(&email_ref).trim().to_string(),
                password: field(&password_ref),
                ..Registration::default()
            };
            let missing = registration.missing_fields();
            if !missing.is_empty() {
                gloo::dialogs::alert(&format!("Please fill in: {}", missing.join(", ")));
                return;
            }

            let picture = selected_file(&picture_ref);
            let resume = selected_file(&resume_ref);
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            spawn_local(async move {
                let result = async {
                    registration.profile_picture = read_upload(picture).await?;
                    registration.resume = read_upload(resume).await?;
                    client::with_client(|c| async move { c.api().register(registration).await })
                        .await
                }
                .await;

                submitting.set(false);
                match result {
                    Ok(_) => {
                        gloo::dialogs::alert("Registration successful! Please log in.");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => client::report_error("Registration failed", &e),
                }
            });
        })
    };

    html! {
        <section class="auth-form">
            <h1>{"Register"}</h1>
            <form onsubmit={on_submit}>
                <label for="fullname">{"Full name"}</label>
                <input id="fullname" type="text" ref={fullname_ref} required=true />

                <label for="email">{"Email"}</label>
                <input id="email" type="email" ref={email_ref} required=true />

                <label for="password">{"Password"}</label>
                <input id="password" type="password" ref={password_ref} required=true />

                <label for="profile_picture">{"Profile picture"}</label>
                <input id="profile_picture" type="file" accept="image/*" ref={picture_ref} />

                <label for="resume">{"Resume"}</label>
                <input id="resume" type="file" accept=".pdf,.doc,.docx" ref={resume_ref} />

                <button type="submit" disabled={*submitting}>{"Register"}</button>
            </form>
        </section>
    }
}
