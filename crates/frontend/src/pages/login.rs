use super::field;
use crate::client;
use crate::route::Route;
use jobboard_core::types::Credentials;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let credentials = Credentials {
                email: field(&email_ref).trim().to_string(),
                password: field(&password_ref),
            };
            if credentials.email.is_empty() || credentials.password.is_empty() {
                gloo::dialogs::alert("Please enter your email and password");
                return;
            }

            let submitting = submitting.clone();
            submitting.set(true);
            spawn_local(async move {
                // On success the guard has already navigated away
                let result =
                    client::with_client(|c| async move { c.sign_in(&credentials).await }).await;
                if let Err(e) = result {
                    client::report_error("Login failed", &e);
                    submitting.set(false);
                }
            });
        })
    };

    html! {
        <section class="auth-form">
            <h1>{"Login"}</h1>
            <form onsubmit={on_submit}>
                <label for="email">{"Email"}</label>
                <input id="email" type="email" ref={email_ref} required=true />

                <label for="password">{"Password"}</label>
                <input id="password" type="password" ref={password_ref} required=true />

                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Signing in..." } else { "Login" } }
                </button>
            </form>
            <p>
                {"No account yet? "}
                <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
            </p>
        </section>
    }
}
