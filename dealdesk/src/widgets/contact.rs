//! # Contact Form
//!
//! Landing-page contact form: local validation, then one POST to the contact
//! endpoint.

use lib_utils::validate_email;
use shared::ContactMessage;

use crate::app::notifications::{Notifications, Toast, ToastVariant};
use crate::core::error::{AppError, Result};
use crate::core::service::DealDeskService;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
    pub notifications: Notifications,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with the three fields.
    pub fn with_fields(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Check the fields without sending anything.
    pub fn validate(&self) -> Result<ContactMessage> {
        let (name, email, message) = (self.name.trim(), self.email.trim(), self.message.trim());

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        validate_email(email).map_err(AppError::Validation)?;

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Validate and send. Fields are cleared only after a successful send.
    pub async fn submit(&mut self, service: &dyn DealDeskService) -> Result<()> {
        let message = match self.validate() {
            Ok(message) => message,
            Err(e) => {
                if let AppError::Validation(text) = &e {
                    self.notifications
                        .push(Toast::plain(text.clone(), ToastVariant::Destructive));
                }
                return Err(e);
            }
        };

        self.submitting = true;
        let result = service.submit_contact(&message).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.notifications
                    .push(Toast::plain("Message sent successfully", ToastVariant::Default));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(status = e.status, error = %e.message, "Contact message not sent");
                self.notifications
                    .push(Toast::plain(SEND_FAILED_MESSAGE, ToastVariant::Destructive));
                Err(e.into())
            }
        }
    }
}
