use trialdesk_client::error::{ApiError, ValidationErrors};

/// Where a failed round trip lands in the UI.
///
/// Exactly one of the three surfaces receives each failure: per-field
/// messages for validation, the reload flag for a dead session, the banner
/// for everything else.
#[derive(Debug, Clone, Default)]
pub struct ErrorSurface {
    field_errors: ValidationErrors,
    banner: Option<String>,
    needs_reload: bool,
}

impl ErrorSurface {
    pub fn absorb(&mut self, error: &ApiError) {
        self.clear();
        match error {
            ApiError::Validation(errors) => self.field_errors = errors.clone(),
            ApiError::SessionExpired => self.needs_reload = true,
            other => self.banner = Some(other.to_string()),
        }
    }

    pub(crate) fn set_banner(&mut self, message: String) {
        self.clear();
        self.banner = Some(message);
    }

    pub fn clear(&mut self) {
        self.field_errors.clear();
        self.banner = None;
        self.needs_reload = false;
    }

    /// Messages for one input control.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// The anti-forgery state is gone; the hosting page must reload and
    /// re-authenticate.
    pub fn needs_reload(&self) -> bool {
        self.needs_reload
    }

    pub fn is_clear(&self) -> bool {
        self.field_errors.is_empty() && self.banner.is_none() && !self.needs_reload
    }
}
