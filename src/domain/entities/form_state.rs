//! Transient state of the username submission form.

/// Snapshot of everything the form view renders.
///
/// Created empty when the view mounts and dropped with it; nothing is persisted.
/// After a submission settles, at most one of `response_message` and `error`
/// is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub is_loading: bool,
    pub response_message: String,
    pub error: String,
}

impl FormState {
    /// Creates the initial, empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a submission as in flight and clears the previous result.
    pub fn begin_submission(&mut self) {
        self.is_loading = true;
        self.error.clear();
        self.response_message.clear();
    }

    /// Settles the submission with a success message.
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.response_message = message.into();
        self.error.clear();
        self.is_loading = false;
    }

    /// Settles the submission with an error message.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = error.into();
        self.response_message.clear();
        self.is_loading = false;
    }

    /// The submit control is disabled exactly while a submission is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.is_loading
    }

    /// Label shown on the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            "Submitting..."
        } else {
            "Submit"
        }
    }

    /// Mirrors the `required` attribute of the username input.
    pub fn has_required_fields(&self) -> bool {
        !self.username.is_empty()
    }
}
