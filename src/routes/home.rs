use actix_web::{get, http::header::ContentType, http::StatusCode, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::domain::{FormField, Role, SubmissionStatus};
use crate::landing_page::LandingPage;
use crate::registration::RegistrationController;

#[derive(Deserialize)]
pub struct Parameters {
    role: Option<String>,
}

/// Serves the landing page with a fresh sign-up card. `?role=` picks the active tab;
/// anything unrecognised falls back to the sender tab.
#[tracing::instrument(name = "Rendering the landing page", skip(parameters))]
#[get("/")]
pub async fn landing(parameters: web::Query<Parameters>) -> Result<HttpResponse, actix_web::Error> {
    let mut controller = RegistrationController::new();
    if let Some(role) = parameters.role.as_deref() {
        controller.select_role(Role::parse(role).unwrap_or_default());
    }

    render_page(LandingPage::new(&controller), StatusCode::OK)
}

/// The card as posted by one of the role tabs. Everything the page was showing comes
/// back so it can be shown again.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabData {
    #[serde(default)]
    tab: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    status_kind: String,
    #[serde(default)]
    status_message: String,
}

/// Switches the active tab without losing what was typed or the last banner. Nothing
/// is sent to the backend.
#[tracing::instrument(name = "Switching the sign-up tab", skip(form), fields(tab = %form.tab))]
#[post("/")]
pub async fn switch_tab(form: web::Form<TabData>) -> Result<HttpResponse, actix_web::Error> {
    let TabData {
        tab,
        role,
        full_name,
        email,
        password,
        status_kind,
        status_message,
    } = form.into_inner();

    let mut controller = RegistrationController::new();
    controller.select_role(
        Role::parse(&tab)
            .or_else(|_| Role::parse(&role))
            .unwrap_or_default(),
    );
    controller.update_field(FormField::FullName, full_name);
    controller.update_field(FormField::Email, email);
    controller.update_field(FormField::Password, password);
    let status = SubmissionStatus::from_parts(&status_kind, status_message);

    render_page(LandingPage::with_status(&controller, &status), StatusCode::OK)
}

pub(super) fn render_page(
    page: LandingPage<'_>,
    status: StatusCode,
) -> Result<HttpResponse, actix_web::Error> {
    let body = page.render().map_err(|err| {
        tracing::error!("Failed to render the landing page: {:?}", err);
        actix_web::error::ErrorInternalServerError(err)
    })?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}
