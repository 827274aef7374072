use actix_web::{http::StatusCode, post, web, HttpResponse};
use serde::Deserialize;

use super::home::render_page;
use crate::backend_client::BackendClient;
use crate::domain::{check_submission, FormField, Role, SubmissionStatus};
use crate::landing_page::LandingPage;
use crate::registration::RegistrationController;

/// The data posted by the sign-up card. Missing fields count as blank.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    role: String,
}

/// Submits the sign-up card to the registration backend and renders the page again
/// with the outcome.
///
/// A card with blank fields, a malformed email or no role never reaches the backend;
/// it comes back as a 400 with the typed values kept.
#[tracing::instrument(
    name = "Registering from the landing page",
    skip(form, client),
    fields(
        role = %form.role,
        registration_email = %form.email
    )
)]
#[post("/register")]
pub async fn register(
    form: web::Form<FormData>,
    client: web::Data<BackendClient>,
) -> Result<HttpResponse, actix_web::Error> {
    let FormData {
        full_name,
        email,
        password,
        role,
    } = form.into_inner();

    let mut controller = RegistrationController::new();
    controller.update_field(FormField::FullName, full_name);
    controller.update_field(FormField::Email, email);
    controller.update_field(FormField::Password, password);

    let role = match check_submission(controller.form(), &role) {
        Ok(role) => role,
        Err(reason) => {
            tracing::info!(%reason, "Registration blocked before submission");
            controller.select_role(Role::parse(&role).unwrap_or_default());
            let blocked = SubmissionStatus::Error(reason);
            return render_page(
                LandingPage::with_status(&controller, &blocked),
                StatusCode::BAD_REQUEST,
            );
        }
    };
    controller.select_role(role);

    controller.submit(&client).await;

    render_page(LandingPage::new(&controller), StatusCode::OK)
}
