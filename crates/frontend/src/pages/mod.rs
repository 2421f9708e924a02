//! Routed pages

pub mod applications;
pub mod companies;
pub mod dashboard;
pub mod home;
pub mod jobs;
pub mod login;
pub mod post_job;
pub mod profile;
pub mod register;
pub mod search;

pub use applications::ApplicationsPage;
pub use companies::CompaniesPage;
pub use dashboard::DashboardPage;
pub use home::{HomePage, NotFoundPage};
pub use jobs::{JobDetailPage, JobsPage};
pub use login::LoginPage;
pub use post_job::PostJobPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use search::SearchPage;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::NodeRef;

/// Current value of an input, textarea or select
pub(crate) fn field(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = node.cast::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Trimmed value, `None` when blank
pub(crate) fn optional_field(node: &NodeRef) -> Option<String> {
    let value = field(node);
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
