//! # Contact Endpoint
//!
//! The landing-page contact form posts to its own absolute URL, separate from
//! the API host. The session token is never sent there.

use shared::ContactMessage;

use super::client::{ApiClient, RequestOptions};
use crate::core::error::ApiError;

/// Send a contact message.
#[tracing::instrument(skip(client, message), fields(email = %message.email))]
pub async fn submit_contact(client: &ApiClient, message: &ContactMessage) -> Result<(), ApiError> {
    let options = RequestOptions::post().json(message)?.anonymous();
    client.request_url_unit(client.contact_url(), options).await
}
