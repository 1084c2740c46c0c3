//! # Deal Endpoints
//!
//! CRUD calls for deals. Each is one request; errors pass through unchanged.

use shared::{Deal, DealUpdate, NewDeal};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::ApiError;

pub const DEALS_PATH: &str = "/deals";

fn deal_path(id: &str) -> String {
    format!("{}/{}", DEALS_PATH, id)
}

/// List all deals.
#[tracing::instrument(skip(client))]
pub async fn get_deals(client: &ApiClient) -> Result<Vec<Deal>, ApiError> {
    let deals: Vec<Deal> = client.request(DEALS_PATH, RequestOptions::get()).await?;
    tracing::debug!(count = deals.len(), "Fetched deals");
    Ok(deals)
}

/// Create a deal.
#[tracing::instrument(skip(client, deal), fields(client_name = %deal.client_name, deal_type = %deal.deal_type))]
pub async fn create_deal(client: &ApiClient, deal: &NewDeal) -> Result<Deal, ApiError> {
    client
        .request(DEALS_PATH, RequestOptions::post().json(deal)?)
        .await
}

/// Update a deal with the fields set in `update`.
#[tracing::instrument(skip(client, update))]
pub async fn update_deal(client: &ApiClient, id: &str, update: &DealUpdate) -> Result<Deal, ApiError> {
    client
        .request(&deal_path(id), RequestOptions::put().json(update)?)
        .await
}

/// Delete a deal.
#[tracing::instrument(skip(client))]
pub async fn delete_deal(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .request_unit(&deal_path(id), RequestOptions::delete())
        .await
}
