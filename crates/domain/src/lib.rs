// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod listable;
mod plan;
mod status;
mod stock;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use listable::{Listable, SortValue, Transitionable};
pub use plan::DistributionPlan;
pub use status::{ActivationStatus, QuoteStatus, RequestStatus, StatusMachine};
pub use stock::{ColorStock, VehicleStock};
pub use types::{
    Customer, CustomerSortKey, Dealer, DealerSortKey, DebtSortKey, EntityId, ManufacturerDebt,
    Promotion, PromotionSortKey, Quote, QuoteSortKey, RequestSortKey, Resource, Vehicle,
    VehicleRequest, VehicleSortKey,
};
pub use validation::{
    validate_capability, validate_contract_dates, validate_contract_number, validate_dealer_code,
    validate_staff_allocation, validate_tax_code,
};
