//! Application routes

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/search")]
    Search,
    #[at("/jobs")]
    Jobs,
    #[at("/jobs/new")]
    PostJob,
    #[at("/jobs/:id")]
    JobDetail { id: i64 },
    #[at("/companies")]
    Companies,
    #[at("/applications")]
    Applications,
    #[at("/profile")]
    Profile,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendConfig;

    #[test]
    fn test_static_job_route_wins_over_id() {
        assert_eq!(Route::recognize("/jobs/new"), Some(Route::PostJob));
        assert_eq!(Route::recognize("/jobs/12"), Some(Route::JobDetail { id: 12 }));
    }

    #[test]
    fn test_session_paths_are_routes() {
        assert_eq!(Route::Login.to_path(), FrontendConfig::LOGIN_PATH);
        assert_eq!(Route::Dashboard.to_path(), FrontendConfig::HOME_PATH);
    }
}
