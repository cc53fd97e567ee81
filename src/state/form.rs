//! Submit state for form pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Lifecycle flags for a single submit action.
///
/// `saving` doubles as the disabled state of the submit button so a form
/// cannot be submitted twice while a request is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl FormState {
    /// Enter the saving state, clearing previous outcome messages.
    pub fn begin(&mut self) {
        self.saving = true;
        self.error = None;
        self.success = None;
    }

    /// Leave the saving state without an outcome message (the page
    /// navigates away or handles the result itself).
    pub fn finish(&mut self) {
        self.saving = false;
    }

    /// Record a failure message.
    pub fn fail(&mut self, mensaje: String) {
        self.saving = false;
        self.error = Some(mensaje);
    }

    /// Record a success message.
    pub fn succeed(&mut self, mensaje: String) {
        self.saving = false;
        self.error = None;
        self.success = Some(mensaje);
    }
}
