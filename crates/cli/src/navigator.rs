//! Terminal stand-in for page navigation

use jobboard_core::Navigator;
use tracing::info;

/// Tells the user where the session went next
///
/// A terminal has no pages, so a redirect to the login path becomes a hint
/// to run `jobboard login`; any other target is reported as-is.
#[derive(Debug)]
pub struct TerminalNavigator {
    login_path: String,
}

impl TerminalNavigator {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    fn hint(&self, target: &str) -> String {
        if target == self.login_path {
            "Not signed in. Run `jobboard login` to continue.".to_string()
        } else {
            format!("Signed in. Continue at {target}")
        }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, target: &str) {
        info!(%target, "Navigating");
        eprintln!("{}", self.hint(target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_target_prompts_for_login() {
        let navigator = TerminalNavigator::new("/login");
        assert!(navigator.hint("/login").contains("jobboard login"));
    }

    #[test]
    fn test_other_targets_are_reported() {
        let navigator = TerminalNavigator::new("/signin");
        assert_eq!(navigator.hint("/login"), "Signed in. Continue at /login");
        assert_eq!(navigator.hint("/dashboard"), "Signed in. Continue at /dashboard");
    }
}
