use crate::components::LoadingSpinner;
use crate::hooks::{Load, use_load};
use yew::prelude::*;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile = use_load("profile", |c| async move { c.profile().await });

    match &*profile {
        Load::Loading => html! { <LoadingSpinner text={"Loading profile..."} /> },
        Load::Failed => html! {},
        Load::Ready(profile) => html! {
            <section class="profile">
                <h1>{ &profile.name }</h1>
                <p class="email">{ &profile.email }</p>
                if let Some(bio) = &profile.bio {
                    <p class="bio">{ bio }</p>
                }
            </section>
        },
    }
}
