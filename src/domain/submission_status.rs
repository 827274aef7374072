/// Outcome of the most recent registration attempt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet, or an attempt is still in flight.
    #[default]
    None,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub const DEFAULT_SUCCESS: &'static str = "Welcome to Fetchitt!";
    pub const DEFAULT_ERROR: &'static str = "Something went wrong.";
    pub const CONNECTION_FAILED: &'static str = "Failed to connect to the server.";

    /// The banner text, if there is anything to show.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::None => None,
            SubmissionStatus::Success(message) | SubmissionStatus::Error(message) => {
                Some(message)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }

    /// `"success"`, `"error"`, or an empty string for `None`.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionStatus::None => "",
            SubmissionStatus::Success(_) => "success",
            SubmissionStatus::Error(_) => "error",
        }
    }

    /// Rebuilds a status from its [`kind`](Self::kind) and message, as carried by a
    /// page that is being re-rendered. Anything unrecognised, or an empty message,
    /// is `None`.
    pub fn from_parts(kind: &str, message: String) -> Self {
        if message.is_empty() {
            return SubmissionStatus::None;
        }
        match kind {
            "success" => SubmissionStatus::Success(message),
            "error" => SubmissionStatus::Error(message),
            _ => SubmissionStatus::None,
        }
    }
}
