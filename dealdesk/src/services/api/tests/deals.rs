//! # Deal Endpoint Tests

use serde_json::json;
use shared::{DealUpdate, NewDeal};

use crate::services::api::deals;
use crate::services::session::SessionStore;
use crate::test_support::{client_for, StubBody, StubServer};

fn acme() -> NewDeal {
    NewDeal {
        client_name: "Acme".to_string(),
        deal_type: "EUR/USD".to_string(),
        amount: 1000.0,
        profit: 50.0,
        date: "2024-01-01".to_string(),
    }
}

fn acme_record() -> serde_json::Value {
    json!({
        "id": "d1",
        "clientName": "Acme",
        "dealType": "EUR/USD",
        "amount": 1000.0,
        "profit": 50.0,
        "date": "2024-01-01",
        "status": "completed",
    })
}

#[tokio::test]
async fn test_create_deal_sends_camel_case_body() {
    let stub = StubServer::new().on("POST", "/deals", 201, StubBody::Json(acme_record()));
    let base = stub.start().await;
    let (client, store) = client_for(&base);
    store.set_token("tok");

    let deal = deals::create_deal(&client, &acme()).await.unwrap();

    assert_eq!(deal.id, "d1");
    assert_eq!(deal.status, "completed");
    assert_eq!(deal.client_name, "Acme");

    let request = stub.last_request();
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
    assert_eq!(
        request.json(),
        json!({
            "clientName": "Acme",
            "dealType": "EUR/USD",
            "amount": 1000.0,
            "profit": 50.0,
            "date": "2024-01-01",
        })
    );
}

#[tokio::test]
async fn test_list_update_and_delete() {
    let mut updated = acme_record();
    updated["status"] = json!("closed");

    let stub = StubServer::new()
        .on("GET", "/deals", 200, StubBody::Json(json!([acme_record()])))
        .on("PUT", "/deals/d1", 200, StubBody::Json(updated))
        .on("DELETE", "/deals/d1", 204, StubBody::Empty);
    let base = stub.start().await;
    let (client, _store) = client_for(&base);

    let listed = deals::get_deals(&client).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].deal_type, "EUR/USD");

    let update = DealUpdate {
        status: Some("closed".to_string()),
        ..Default::default()
    };
    let deal = deals::update_deal(&client, "d1", &update).await.unwrap();
    assert_eq!(deal.status, "closed");
    assert_eq!(stub.last_request().json(), json!({ "status": "closed" }));

    deals::delete_deal(&client, "d1").await.unwrap();
    let request = stub.last_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/deals/d1");
}

#[tokio::test]
async fn test_missing_deal_surfaces_server_error() {
    let stub = StubServer::new().on(
        "DELETE",
        "/deals/nope",
        404,
        StubBody::Json(json!({ "message": "Deal not found" })),
    );
    let base = stub.start().await;
    let (client, _store) = client_for(&base);

    let err = deals::delete_deal(&client, "nope").await.unwrap_err();

    assert_eq!(err.status, 404);
    assert_eq!(err.message, "Deal not found");
}
