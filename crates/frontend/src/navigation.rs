//! Full-page navigation

use jobboard_core::Navigator;
use tracing::{error, info};
use web_sys::window;

/// Leaves the page by assigning `window.location.href`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &str) {
        info!(%target, "Navigating");
        let Some(window) = window() else {
            error!("No window to navigate");
            return;
        };
        if let Err(e) = window.location().set_href(target) {
            error!("Navigation to {target} failed: {e:?}");
        }
    }
}
