use askama::Template;
use secrecy::ExposeSecret;

use crate::domain::{Role, SubmissionStatus};
use crate::registration::RegistrationController;

/// The whole Fetchitt landing page, rendered from one controller's state.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingPage<'a> {
    role: Role,
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
    status: &'a SubmissionStatus,
    loading: bool,
}

impl<'a> LandingPage<'a> {
    pub fn new(controller: &'a RegistrationController) -> Self {
        Self::with_status(controller, controller.status())
    }

    /// Renders `controller` with a banner for `status` in place of the controller's own,
    /// e.g. a card the browser should have refused to submit, or a banner carried over
    /// from the previous render.
    pub fn with_status(
        controller: &'a RegistrationController,
        status: &'a SubmissionStatus,
    ) -> Self {
        let form = controller.form();
        Self {
            role: controller.role(),
            full_name: form.full_name(),
            email: form.email(),
            password: form.password().expose_secret(),
            status,
            loading: controller.is_loading(),
        }
    }

    fn tab_class(&self, tab: &str) -> &'static str {
        if self.role.as_str() == tab {
            "tab active"
        } else {
            "tab"
        }
    }

    fn banner_class(&self) -> &'static str {
        if self.status.is_success() {
            "status-banner success"
        } else {
            "status-banner error"
        }
    }

    fn status_message(&self) -> &str {
        self.status.message().unwrap_or_default()
    }

    fn submit_label(&self) -> &'static str {
        if self.loading {
            "Creating Account..."
        } else {
            "Get Started with Fetchitt"
        }
    }
}
