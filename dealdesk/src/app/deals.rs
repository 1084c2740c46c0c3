//! # Deal Performance
//!
//! State behind the deals dashboard: the loaded deals, the search filter,
//! running totals and the CSV export.

use std::sync::Arc;

use chrono::NaiveDate;
use lib_utils::date_stamp;
use serde_json::json;
use shared::{Deal, ExportFormat, NewDeal};

use super::export::ExportedFile;
use super::notifications::Notifications;
use crate::core::error::ApiError;
use crate::core::service::DealDeskService;

pub struct DealPerformance {
    service: Arc<dyn DealDeskService>,
    deals: Vec<Deal>,
    search_term: String,
    loading: bool,
    exporting: bool,
    pub notifications: Notifications,
}

impl DealPerformance {
    pub fn new(service: Arc<dyn DealDeskService>) -> Self {
        Self {
            service,
            deals: Vec::new(),
            search_term: String::new(),
            loading: false,
            exporting: false,
            notifications: Notifications::new(),
        }
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Replace the list with the server's. On failure the current list stays
    /// and the error is both toasted and returned.
    pub async fn load_deals(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.service.get_deals().await;
        self.loading = false;

        match result {
            Ok(deals) => {
                tracing::debug!(count = deals.len(), "Loaded deals");
                self.deals = deals;
                Ok(())
            }
            Err(e) => {
                self.notifications
                    .error("Failed to load deals", e.message.clone());
                Err(e)
            }
        }
    }

    /// Create a deal and append the server's record.
    pub async fn add_deal(&mut self, deal: NewDeal) -> Option<Deal> {
        match self.service.create_deal(&deal).await {
            Ok(created) => {
                self.deals.push(created.clone());
                self.notifications
                    .success("Deal Added", "New deal has been successfully added.");
                Some(created)
            }
            Err(e) => {
                self.notifications.error("Failed to add deal", e.message);
                None
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Deals whose client name or deal type contains the search term, ignoring case.
    pub fn filtered_deals(&self) -> Vec<&Deal> {
        let needle = self.search_term.to_lowercase();
        self.deals
            .iter()
            .filter(|deal| {
                deal.client_name.to_lowercase().contains(&needle)
                    || deal.deal_type.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Sum over all loaded deals, regardless of the filter.
    pub fn total_amount(&self) -> f64 {
        self.deals.iter().map(|deal| deal.amount).sum()
    }

    pub fn total_profit(&self) -> f64 {
        self.deals.iter().map(|deal| deal.profit).sum()
    }

    /// Download the deals report for the current search term as CSV.
    pub async fn export_deals(&mut self, today: NaiveDate) -> Option<ExportedFile> {
        self.exporting = true;
        let filters = json!({ "searchTerm": self.search_term });
        let result = self
            .service
            .export_deals_report(Some(filters), ExportFormat::Csv)
            .await;
        self.exporting = false;

        match result {
            Ok(bytes) => {
                self.notifications
                    .success("Export Successful", "Deals report has been downloaded.");
                Some(ExportedFile::new(
                    format!("deals-report-{}.csv", date_stamp(today)),
                    bytes,
                ))
            }
            Err(e) => {
                self.notifications.error("Export Failed", e.message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{client_for, unreachable_base_url, StubBody, StubServer};

    fn deal(id: &str, client: &str, pair: &str, amount: f64, profit: f64) -> serde_json::Value {
        json!({
            "id": id,
            "clientName": client,
            "dealType": pair,
            "amount": amount,
            "profit": profit,
            "date": "2024-01-01",
            "status": "completed",
        })
    }

    async fn view_with(stub: &StubServer) -> DealPerformance {
        let base = stub.start().await;
        let (client, _store) = client_for(&base);
        DealPerformance::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_add_deal_appends_server_record() {
        // Arrange
        let stub = StubServer::new()
            .on("GET", "/deals", 200, StubBody::Json(json!([])))
            .on(
                "POST",
                "/deals",
                201,
                StubBody::Json(deal("d1", "Acme", "EUR/USD", 1000.0, 50.0)),
            );
        let mut view = view_with(&stub).await;
        view.load_deals().await.unwrap();

        // Act
        let created = view
            .add_deal(NewDeal {
                client_name: "Acme".to_string(),
                deal_type: "EUR/USD".to_string(),
                amount: 1000.0,
                profit: 50.0,
                date: "2024-01-01".to_string(),
            })
            .await;

        // Assert
        let created = created.expect("deal should be created");
        assert_eq!(created.id, "d1");
        assert_eq!(created.status, "completed");
        assert_eq!(view.deals().len(), 1);
        assert_eq!(view.deals()[0], created);
        assert_eq!(view.notifications.last().unwrap().title, "Deal Added");
    }

    #[tokio::test]
    async fn test_filter_and_totals() {
        let stub = StubServer::new().on(
            "GET",
            "/deals",
            200,
            StubBody::Json(json!([
                deal("d1", "Acme Corp", "EUR/USD", 1000.0, 50.0),
                deal("d2", "Globex", "GBP/JPY", 2500.0, -20.0),
                deal("d3", "Initech", "eur/gbp", 500.0, 10.5),
            ])),
        );
        let mut view = view_with(&stub).await;
        view.load_deals().await.unwrap();

        view.set_search_term("EUR");
        let ids: Vec<&str> = view.filtered_deals().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d3"]);

        view.set_search_term("glob");
        assert_eq!(view.filtered_deals().len(), 1);

        view.set_search_term("");
        assert_eq!(view.filtered_deals().len(), 3);

        assert_eq!(view.total_amount(), 4000.0);
        assert_eq!(view.total_profit(), 40.5);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_list_and_toasts() {
        let (client, _store) = client_for(&unreachable_base_url());
        let mut view = DealPerformance::new(Arc::new(client));

        let err = view.load_deals().await.unwrap_err();
        assert!(err.is_network());

        assert!(view.deals().is_empty());
        assert!(!view.is_loading());
        let toast = view.notifications.last().unwrap();
        assert_eq!(toast.title, "Failed to load deals");
        assert_eq!(
            toast.description.as_deref(),
            Some("Network error or server unavailable")
        );
    }

    #[tokio::test]
    async fn test_export_names_file_by_date_and_sends_search_term() {
        let stub = StubServer::new().on(
            "GET",
            "/reports/deals/export",
            200,
            StubBody::Bytes(b"id,clientName\nd1,Acme\n".to_vec()),
        );
        let mut view = view_with(&stub).await;
        view.set_search_term("acme");

        let file = view
            .export_deals(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
            .await
            .expect("export should succeed");

        assert_eq!(file.filename, "deals-report-2024-03-09.csv");
        assert_eq!(file.bytes, b"id,clientName\nd1,Acme\n");
        assert!(!view.is_exporting());
        assert_eq!(
            stub.last_request().query.as_deref(),
            Some("format=csv&filters=%7B%22searchTerm%22%3A%22acme%22%7D")
        );
        assert_eq!(view.notifications.last().unwrap().title, "Export Successful");
    }
}
