// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed client for the dealers resource.

use crate::envelope::{Envelope, Page};
use crate::transport::Transport;
use chrono::NaiveDate;
use dealer_hub::BackendError;
use dealer_hub_domain::{Dealer, Resource};
use reqwest::Method;
use serde::Serialize;

/// Request to onboard a new dealer.
///
/// Fields mirror the onboarding form; shape validation happens before this
/// DTO is built. Uniqueness of `code`, `tax_code`, and `contract_number`
/// is enforced by the backend only.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDealerRequest {
    /// The dealer business code.
    pub code: String,
    /// The dealer's tax code.
    pub tax_code: String,
    /// The dealership contract number.
    pub contract_number: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Contract signing date.
    pub signed_date: NaiveDate,
    /// Contract expiry date.
    pub expiry_date: NaiveDate,
    /// Declared sales staff count.
    pub sales_staff_count: u32,
    /// Declared support staff count.
    pub support_staff_count: u32,
    /// Declared total staff count.
    pub total_staff_count: u32,
}

/// Sub-client for `/api/dealers`.
#[derive(Debug, Clone)]
pub struct DealerClient {
    transport: Transport,
}

impl DealerClient {
    pub(crate) const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists all dealers.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] on any failure.
    pub async fn list(&self) -> Result<Page<Dealer>, BackendError> {
        self.transport.get_list(Resource::Dealers).await
    }

    /// Onboards a new dealer.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`]; uniqueness conflicts arrive
    /// as `BusinessRule` with the backend's message.
    pub async fn create(&self, request: &CreateDealerRequest) -> Result<Dealer, BackendError> {
        let body: serde_json::Value =
            serde_json::to_value(request).map_err(|err| BackendError::Decode {
                message: err.to_string(),
            })?;
        let envelope: Envelope<Dealer> = self
            .transport
            .send(Method::POST, "api/dealers", Some(&body))
            .await?;
        envelope.into_required_data()
    }
}
