// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BackendError;
use crate::backend::{DistributionBackend, ListBackend, OrderBackend, TransitionBackend};
use chrono::{DateTime, TimeZone, Utc};
use dealer_hub_domain::{
    ActivationStatus, ColorStock, Dealer, EntityId, Quote, QuoteStatus, RequestStatus, Resource,
    Vehicle, VehicleRequest, VehicleStock,
};
use std::sync::Mutex;

pub fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn create_test_dealer(id: &str, name: &str, status: ActivationStatus) -> Dealer {
    Dealer {
        id: EntityId::new(id),
        code: format!("VF_HN_3S_{id}"),
        name: String::from(name),
        email: format!("{id}@dealers.example"),
        phone: String::from("0901234567"),
        status,
        created_at: timestamp(1_700_000_000),
    }
}

pub fn create_test_request(id: &str, status: RequestStatus) -> VehicleRequest {
    VehicleRequest {
        id: EntityId::new(id),
        dealer_id: EntityId::new("d1"),
        dealer_name: String::from("Hanoi Central"),
        sku: String::from("VF8-ECO"),
        color: Some(String::from("red")),
        quantity: 5,
        status,
        reason: None,
        created_at: timestamp(1_700_000_000),
    }
}

pub fn create_test_vehicle(id: &str, pools: Vec<ColorStock>) -> Vehicle {
    Vehicle {
        id: EntityId::new(id),
        sku: String::from("VF8-ECO"),
        name: String::from("VF 8 Eco"),
        price: 1_057_000_000,
        status: ActivationStatus::Active,
        stock: VehicleStock::new(pools),
        created_at: timestamp(1_700_000_000),
    }
}

pub fn create_test_quote(id: &str, status: QuoteStatus) -> Quote {
    Quote {
        id: EntityId::new(id),
        customer_id: EntityId::new("c1"),
        customer_name: String::from("Tran Thi Mai"),
        sku: String::from("VF8-ECO"),
        quantity: 1,
        amount: 1_057_000_000,
        status,
        created_at: timestamp(1_700_000_000),
    }
}

/// One recorded transition call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTransition {
    pub resource: Resource,
    pub id: EntityId,
    pub action: String,
    pub reason: Option<String>,
}

/// A backend fake that records every call and fails on request.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub transition_calls: Mutex<Vec<RecordedTransition>>,
    pub transition_error: Option<BackendError>,
    pub distribute_calls: Mutex<Vec<EntityId>>,
    pub failing_targets: Vec<EntityId>,
    pub fetch_items: Vec<Vehicle>,
    pub fetch_count: Mutex<usize>,
    pub order_calls: Mutex<usize>,
    pub create_order_error: Option<BackendError>,
    pub mark_calls: Mutex<usize>,
    pub mark_quote_error: Option<BackendError>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition_call_count(&self) -> usize {
        self.transition_calls.lock().unwrap().len()
    }

    pub fn distribute_call_count(&self) -> usize {
        self.distribute_calls.lock().unwrap().len()
    }

    pub fn fetch_call_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

impl TransitionBackend for RecordingBackend {
    async fn submit_transition(
        &self,
        resource: Resource,
        id: &EntityId,
        action: &str,
        reason: Option<&str>,
    ) -> Result<(), BackendError> {
        self.transition_calls.lock().unwrap().push(RecordedTransition {
            resource,
            id: id.clone(),
            action: String::from(action),
            reason: reason.map(String::from),
        });
        match &self.transition_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl DistributionBackend for RecordingBackend {
    async fn distribute(
        &self,
        _resource: Resource,
        _source_id: &EntityId,
        target_id: &EntityId,
        _quantity: u32,
        _color: Option<&str>,
        _notes: Option<&str>,
    ) -> Result<(), BackendError> {
        self.distribute_calls.lock().unwrap().push(target_id.clone());
        if self.failing_targets.contains(target_id) {
            return Err(BackendError::BusinessRule {
                message: format!("dealer {target_id} is not eligible"),
            });
        }
        Ok(())
    }
}

impl ListBackend<Vehicle> for RecordingBackend {
    async fn fetch(&self) -> Result<Vec<Vehicle>, BackendError> {
        *self.fetch_count.lock().unwrap() += 1;
        Ok(self.fetch_items.clone())
    }
}

impl OrderBackend for RecordingBackend {
    async fn create_order(&self, quote_id: &EntityId) -> Result<EntityId, BackendError> {
        *self.order_calls.lock().unwrap() += 1;
        match &self.create_order_error {
            Some(err) => Err(err.clone()),
            None => Ok(EntityId::new(format!("order-for-{quote_id}"))),
        }
    }

    async fn mark_quote_converted(&self, _quote_id: &EntityId) -> Result<(), BackendError> {
        *self.mark_calls.lock().unwrap() += 1;
        match &self.mark_quote_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
