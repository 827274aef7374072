use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::backend_client::BackendClient;
use crate::domain::{FormField, RegistrationForm, Role, SubmissionStatus};

/// State behind one rendered sign-up card: the selected role, what has been typed,
/// how the last attempt went, and whether an attempt is in flight.
///
/// There is one controller per page view. Nothing here is shared between views.
#[derive(Debug)]
pub struct RegistrationController {
    role: Role,
    form: RegistrationForm,
    status: SubmissionStatus,
    loading: watch::Sender<bool>,
}

impl Default for RegistrationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationController {
    pub fn new() -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            role: Role::default(),
            form: RegistrationForm::default(),
            status: SubmissionStatus::None,
            loading,
        }
    }

    pub fn select_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        self.form.update(field, value);
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Follows the loading flag. The receiver sees it go `true` when a submission
    /// starts and back to `false` once it resolves.
    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Sends the form and role to the backend and records the outcome.
    ///
    /// Never fails: rejections and transport errors both end up in [`Self::status`].
    /// The form is emptied only when the backend accepts the registration.
    pub async fn submit(&mut self, client: &BackendClient) {
        self.submit_with_cancellation(client, &CancellationToken::new())
            .await
    }

    /// Like [`Self::submit`], but gives up on the request once `cancel` fires.
    ///
    /// A cancelled submission leaves the status at `None` and keeps the form as typed.
    #[tracing::instrument(
        name = "Submitting registration",
        skip(self, client, cancel),
        fields(role = %self.role, registration_email = %self.form.email())
    )]
    pub async fn submit_with_cancellation(
        &mut self,
        client: &BackendClient,
        cancel: &CancellationToken,
    ) {
        self.loading.send_replace(true);
        self.status = SubmissionStatus::None;

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            outcome = client.register(&self.form, self.role) => Some(outcome),
        };

        match outcome {
            Some(Ok(reply)) if reply.is_accepted() => {
                self.status = SubmissionStatus::Success(
                    reply
                        .message
                        .unwrap_or_else(|| SubmissionStatus::DEFAULT_SUCCESS.into()),
                );
                self.form.clear();
            }
            Some(Ok(reply)) => {
                tracing::warn!(status = %reply.status, "Registration was rejected");
                self.status = SubmissionStatus::Error(
                    reply
                        .message
                        .unwrap_or_else(|| SubmissionStatus::DEFAULT_ERROR.into()),
                );
            }
            Some(Err(err)) => {
                tracing::error!("Failed to submit registration: {:?}", err);
                self.status = SubmissionStatus::Error(SubmissionStatus::CONNECTION_FAILED.into());
            }
            None => {
                tracing::info!("Registration cancelled before the backend replied");
            }
        }

        self.loading.send_replace(false);
    }
}
