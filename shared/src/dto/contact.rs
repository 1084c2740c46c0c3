use serde::{Deserialize, Serialize};

/// Message sent from the landing-page contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
