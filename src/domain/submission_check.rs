use secrecy::ExposeSecret;
use validator::validate_email;

use super::{FormField, RegistrationForm, Role};

/// Message shown when a card arrives without a recognisable role.
pub const MISSING_ROLE: &str = "Choose whether you want to send or fetch.";

/// Decides whether a posted sign-up card is worth sending to the backend.
///
/// Holds the same line a browser holds for the card's `required` and `type="email"`
/// inputs: every field is non-blank and the email parses. The role must also be one of
/// the two tabs. Returns `Ok` with the parsed role, otherwise `Err` with a message
/// naming the first thing that needs fixing.
///
/// # Examples
/// ```
/// use fetchitt::domain::{check_submission, FormField, RegistrationForm, Role};
///
/// let mut form = RegistrationForm::default();
/// form.update(FormField::FullName, "Jane Doe".into());
/// form.update(FormField::Email, "jane@example.com".into());
/// assert!(check_submission(&form, "fetcher").is_err());
///
/// form.update(FormField::Password, "hunter22".into());
/// assert_eq!(Ok(Role::Fetcher), check_submission(&form, "fetcher"));
/// ```
pub fn check_submission(form: &RegistrationForm, role: &str) -> Result<Role, String> {
    let role = Role::parse(role).map_err(|_| MISSING_ROLE.to_string())?;

    for field in FormField::ALL {
        let value = match field {
            FormField::FullName => form.full_name(),
            FormField::Email => form.email(),
            FormField::Password => form.password().expose_secret().as_str(),
        };
        if value.trim().is_empty() {
            return Err(format!("{} is required.", field.label()));
        }
    }

    if !validate_email(form.email()) {
        return Err(format!("{} is not a valid email address.", form.email()));
    }

    Ok(role)
}
