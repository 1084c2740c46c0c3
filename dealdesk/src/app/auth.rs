//! # Auth Controller
//!
//! Holds the signed-in user for the dashboard. The initial user comes from
//! the stored token alone; nothing is fetched on startup.

use std::sync::Arc;

use shared::User;

use super::notifications::Notifications;
use crate::core::error::{ApiError, AppError, Result};
use crate::core::service::DealDeskService;

pub struct AuthController {
    service: Arc<dyn DealDeskService>,
    user: Option<User>,
    loading: bool,
    pub notifications: Notifications,
}

impl AuthController {
    pub fn new(service: Arc<dyn DealDeskService>) -> Self {
        let user = service.current_user();
        Self {
            service,
            user,
            loading: false,
            notifications: Notifications::new(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> std::result::Result<User, ApiError> {
        self.loading = true;
        let result = self.service.sign_in(email, password).await;
        self.loading = false;

        match &result {
            Ok(user) => {
                self.user = Some(user.clone());
                self.notifications
                    .success("Sign In Successful", "Welcome back to Forex King!");
            }
            Err(e) => self.notifications.error("Sign In Failed", e.message.clone()),
        }
        result
    }

    /// Register after checking the password confirmation locally.
    pub async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User> {
        if password != confirm_password {
            self.notifications
                .error("Registration Failed", "Passwords do not match.");
            return Err(AppError::Validation("Passwords do not match.".to_string()));
        }

        self.loading = true;
        let result = self.service.sign_up(name, email, password).await;
        self.loading = false;

        match result {
            Ok(user) => {
                self.user = Some(user.clone());
                self.notifications.success(
                    "Registration Successful",
                    "Welcome to Forex King! Your account has been created.",
                );
                Ok(user)
            }
            Err(e) => {
                self.notifications.error("Registration Failed", e.message.clone());
                Err(e.into())
            }
        }
    }

    /// The user is only cleared when the server accepted the sign-out.
    pub async fn sign_out(&mut self) -> std::result::Result<(), ApiError> {
        self.loading = true;
        let result = self.service.sign_out().await;
        self.loading = false;

        if result.is_ok() {
            self.user = None;
        }
        result
    }
}
