//! # Widgets
//!
//! Presentation logic for the landing page and dashboard widgets, free of
//! any rendering toolkit.

pub mod agreement;
pub mod chat;
pub mod contact;
pub mod upload;

pub use agreement::{AgreementForm, AgreementSubmission, SignaturePad};
pub use chat::{AutoResponder, ChatWidget};
pub use contact::ContactForm;
pub use upload::{UploadCandidate, UploadDialog};
