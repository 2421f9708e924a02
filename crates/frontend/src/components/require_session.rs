//! Session guard component for protected pages

use super::LoadingSpinner;
use crate::client;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    pub children: Children,
}

/// Renders its children only while the stored session is valid
///
/// Otherwise the guard has already cleared the token and started the
/// redirect to login, so nothing below this component mounts and no
/// authenticated call is issued.
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let allowed = match client::guarded() {
        Ok(client) => client.enter().is_ok(),
        Err(e) => {
            client::report_error("Session check failed", &e);
            false
        }
    };

    if allowed {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <LoadingSpinner text={"Redirecting to login..."} /> }
    }
}
