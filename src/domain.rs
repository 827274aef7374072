mod registration_form;
mod role;
mod submission_check;
mod submission_status;

pub use registration_form::{FormField, RegistrationForm};
pub use role::Role;
pub use submission_check::check_submission;
pub use submission_status::SubmissionStatus;
