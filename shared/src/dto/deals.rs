use serde::{Deserialize, Serialize};

/// A client deal as stored by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub client_name: String,
    /// Currency pair, e.g. `EUR/USD`
    pub deal_type: String,
    pub amount: f64,
    pub profit: f64,
    pub date: String,
    pub status: String,
}

/// Create payload: a deal without the server-assigned `id` and `status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub client_name: String,
    pub deal_type: String,
    pub amount: f64,
    pub profit: f64,
    pub date: String,
}

/// Partial update payload; `None` fields are left out of the request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
