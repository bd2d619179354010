// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend trait implementations over the REST transport.
//!
//! The core engines are written against the traits in `dealer-hub`; this
//! module fulfills them:
//!
//! - transitions: `PATCH /api/{resource}/{id}/{action}`
//! - distribution: `POST /api/{resource}/{id}/assign`, one call per target
//! - conversion: `POST /api/orders` then `PUT /api/quotes/{id}`
//! - list fetches: `GET /api/{resource}`, normalized envelope

use crate::DealerHubClient;
use crate::envelope::{AckEnvelope, Envelope};
use dealer_hub::{
    BackendError, DistributionBackend, ListBackend, OrderBackend, TransitionBackend,
};
use dealer_hub_domain::{
    Customer, Dealer, EntityId, ManufacturerDebt, Promotion, Quote, Resource, Vehicle,
    VehicleRequest,
};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

impl TransitionBackend for DealerHubClient {
    async fn submit_transition(
        &self,
        resource: Resource,
        id: &EntityId,
        action: &str,
        reason: Option<&str>,
    ) -> Result<(), BackendError> {
        let path: String = format!("api/{}/{id}/{action}", resource.path_segment());
        let body: Option<serde_json::Value> = reason.map(|reason| json!({ "reason": reason }));
        let ack: AckEnvelope = self
            .transport
            .send(Method::PATCH, &path, body.as_ref())
            .await?;
        ack.ensure()
    }
}

impl DistributionBackend for DealerHubClient {
    async fn distribute(
        &self,
        resource: Resource,
        source_id: &EntityId,
        target_id: &EntityId,
        quantity: u32,
        color: Option<&str>,
        notes: Option<&str>,
    ) -> Result<(), BackendError> {
        let path: String = format!("api/{}/{source_id}/assign", resource.path_segment());
        let mut body: serde_json::Value = json!({
            "dealer_id": target_id,
            "quantity": quantity,
        });
        if let Some(color) = color {
            body["color"] = json!(color);
        }
        if let Some(notes) = notes {
            body["notes"] = json!(notes);
        }
        let ack: AckEnvelope = self.transport.send(Method::POST, &path, Some(&body)).await?;
        ack.ensure()
    }
}

/// The order reference returned by `POST /api/orders`.
#[derive(Debug, Deserialize)]
struct CreatedOrder {
    id: EntityId,
}

impl OrderBackend for DealerHubClient {
    async fn create_order(&self, quote_id: &EntityId) -> Result<EntityId, BackendError> {
        let body: serde_json::Value = json!({ "quote_id": quote_id });
        let envelope: Envelope<CreatedOrder> = self
            .transport
            .send(Method::POST, "api/orders", Some(&body))
            .await?;
        Ok(envelope.into_required_data()?.id)
    }

    async fn mark_quote_converted(&self, quote_id: &EntityId) -> Result<(), BackendError> {
        let path: String = format!("api/quotes/{quote_id}");
        let body: serde_json::Value = json!({ "status": "converted" });
        let ack: AckEnvelope = self.transport.send(Method::PUT, &path, Some(&body)).await?;
        ack.ensure()
    }
}

impl ListBackend<Dealer> for DealerHubClient {
    async fn fetch(&self) -> Result<Vec<Dealer>, BackendError> {
        Ok(self.dealers().list().await?.items)
    }
}

impl ListBackend<Vehicle> for DealerHubClient {
    async fn fetch(&self) -> Result<Vec<Vehicle>, BackendError> {
        Ok(self.inventory().list().await?.items)
    }
}

impl ListBackend<Promotion> for DealerHubClient {
    async fn fetch(&self) -> Result<Vec<Promotion>, BackendError> {
        Ok(self.promotions().list().await?.items)
    }
}

impl ListBackend<VehicleRequest> for DealerHubClient {
    async fn fetch(&self) -> Result<Vec<VehicleRequest>, BackendError> {
        Ok(self.requests().list().await?.items)
    }
}

impl ListBackend<Quote> for DealerHubClient {
    async fn fetch(&self) -> Result<Vec<Quote>, BackendError> {
        Ok(self.quotes().list().await?.items)
    }
}

impl ListBackend<Customer> for DealerHubClient {
    async fn fetch(&self) -> Result<Vec<Customer>, BackendError> {
        Ok(self.customers().list().await?.items)
    }
}

impl ListBackend<ManufacturerDebt> for DealerHubClient {
    async fn fetch(&self) -> Result<Vec<ManufacturerDebt>, BackendError> {
        Ok(self.debts().list().await?.items)
    }
}
