// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain entities managed by the console.
//!
//! All entities are owned by the remote backend; this crate holds only a
//! read-through representation. Each entity carries a string identifier,
//! its searchable text fields, one status or active flag, and a creation
//! timestamp. Decoding is deliberately tolerant: optional fields default
//! rather than failing a whole list.

use crate::listable::{Listable, SortValue, Transitionable};
use crate::status::{ActivationStatus, QuoteStatus, RequestStatus, StatusMachine};
use crate::stock::VehicleStock;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An opaque backend-issued entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an identifier from its string form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier's string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The REST resources the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Dealer records.
    Dealers,
    /// Vehicle SKUs and manufacturer stock.
    Vehicles,
    /// Promotions.
    Promotions,
    /// Vehicle requests raised by dealers.
    Requests,
    /// Customer quotes.
    Quotes,
    /// Customer records.
    Customers,
    /// Manufacturer debt records.
    Debts,
}

impl Resource {
    /// Returns the path segment for this resource under `/api`.
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::Dealers => "dealers",
            Self::Vehicles => "vehicles",
            Self::Promotions => "promotions",
            Self::Requests => "vehicle-requests",
            Self::Quotes => "quotes",
            Self::Customers => "customers",
            Self::Debts => "manufacturer-debts",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// A dealership in the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    /// The backend-issued identifier.
    pub id: EntityId,
    /// The dealer's business code (e.g. `VF_HN_3S_013`).
    pub code: String,
    /// The dealer's display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Activation status.
    pub status: ActivationStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sortable fields of a dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerSortKey {
    /// Sort by display name.
    Name,
    /// Sort by business code.
    Code,
    /// Sort by creation timestamp.
    CreatedAt,
}

impl Listable for Dealer {
    type SortKey = DealerSortKey;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code, &self.email, &self.phone]
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        match key {
            DealerSortKey::Name => SortValue::Text(&self.name),
            DealerSortKey::Code => SortValue::Text(&self.code),
            DealerSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
        }
    }
}

impl Transitionable for Dealer {
    type Status = ActivationStatus;

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn resource() -> Resource {
        Resource::Dealers
    }
}

/// A vehicle SKU with its manufacturer stock snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// The backend-issued identifier.
    pub id: EntityId,
    /// The SKU code.
    pub sku: String,
    /// The model display name.
    pub name: String,
    /// List price in minor currency units.
    pub price: i64,
    /// Activation status.
    pub status: ActivationStatus,
    /// Manufacturer stock by color.
    #[serde(default)]
    pub stock: VehicleStock,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sortable fields of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleSortKey {
    /// Sort by model name.
    Name,
    /// Sort by SKU code.
    Sku,
    /// Sort by list price.
    Price,
    /// Sort by creation timestamp.
    CreatedAt,
}

impl Listable for Vehicle {
    type SortKey = VehicleSortKey;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.sku]
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        match key {
            VehicleSortKey::Name => SortValue::Text(&self.name),
            VehicleSortKey::Sku => SortValue::Text(&self.sku),
            VehicleSortKey::Price => SortValue::Integer(self.price),
            VehicleSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
        }
    }
}

impl Transitionable for Vehicle {
    type Status = ActivationStatus;

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn resource() -> Resource {
        Resource::Vehicles
    }
}

/// A promotion distributable to dealers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    /// The backend-issued identifier.
    pub id: EntityId,
    /// The promotion code.
    pub code: String,
    /// The promotion display name.
    pub name: String,
    /// Activation status.
    pub status: ActivationStatus,
    /// First day the promotion applies.
    pub starts_on: NaiveDate,
    /// Last day the promotion applies.
    pub ends_on: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sortable fields of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionSortKey {
    /// Sort by display name.
    Name,
    /// Sort by promotion code.
    Code,
    /// Sort by start date.
    StartsOn,
    /// Sort by creation timestamp.
    CreatedAt,
}

impl Listable for Promotion {
    type SortKey = PromotionSortKey;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code]
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        match key {
            PromotionSortKey::Name => SortValue::Text(&self.name),
            PromotionSortKey::Code => SortValue::Text(&self.code),
            PromotionSortKey::StartsOn => SortValue::Date(self.starts_on),
            PromotionSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
        }
    }
}

impl Transitionable for Promotion {
    type Status = ActivationStatus;

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn resource() -> Resource {
        Resource::Promotions
    }
}

/// A vehicle request raised by a dealer against manufacturer stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRequest {
    /// The backend-issued identifier.
    pub id: EntityId,
    /// The requesting dealer.
    pub dealer_id: EntityId,
    /// The requesting dealer's display name.
    #[serde(default)]
    pub dealer_name: String,
    /// The requested SKU.
    pub sku: String,
    /// The requested color, if constrained.
    #[serde(default)]
    pub color: Option<String>,
    /// The requested quantity.
    pub quantity: u32,
    /// Workflow status.
    pub status: RequestStatus,
    /// The reason recorded with the last decision, if any.
    #[serde(default)]
    pub reason: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sortable fields of a vehicle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSortKey {
    /// Sort by requesting dealer name.
    DealerName,
    /// Sort by requested quantity.
    Quantity,
    /// Sort by status text.
    Status,
    /// Sort by creation timestamp.
    CreatedAt,
}

impl Listable for VehicleRequest {
    type SortKey = RequestSortKey;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.dealer_name, &self.sku]
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        match key {
            RequestSortKey::DealerName => SortValue::Text(&self.dealer_name),
            RequestSortKey::Quantity => SortValue::Integer(i64::from(self.quantity)),
            RequestSortKey::Status => SortValue::Text(self.status.as_str()),
            RequestSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
        }
    }
}

impl Transitionable for VehicleRequest {
    type Status = RequestStatus;

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn resource() -> Resource {
        Resource::Requests
    }
}

/// A customer of the dealership network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The backend-issued identifier.
    pub id: EntityId,
    /// The customer's display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Whether the customer record is active.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sortable fields of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSortKey {
    /// Sort by display name.
    Name,
    /// Sort by active flag.
    Active,
    /// Sort by creation timestamp.
    CreatedAt,
}

impl Listable for Customer {
    type SortKey = CustomerSortKey;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.phone]
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        match key {
            CustomerSortKey::Name => SortValue::Text(&self.name),
            CustomerSortKey::Active => SortValue::Boolean(self.active),
            CustomerSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
        }
    }
}

/// A customer quote, convertible into an order while stock allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The backend-issued identifier.
    pub id: EntityId,
    /// The quoted customer.
    pub customer_id: EntityId,
    /// The quoted customer's display name.
    #[serde(default)]
    pub customer_name: String,
    /// The quoted SKU.
    pub sku: String,
    /// The quoted quantity.
    pub quantity: u32,
    /// The quoted amount in minor currency units.
    pub amount: i64,
    /// Quote status.
    pub status: QuoteStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sortable fields of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSortKey {
    /// Sort by customer name.
    CustomerName,
    /// Sort by quoted amount.
    Amount,
    /// Sort by creation timestamp.
    CreatedAt,
}

impl Listable for Quote {
    type SortKey = QuoteSortKey;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.customer_name, &self.sku]
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        match key {
            QuoteSortKey::CustomerName => SortValue::Text(&self.customer_name),
            QuoteSortKey::Amount => SortValue::Integer(self.amount),
            QuoteSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
        }
    }
}

/// An outstanding manufacturer debt owed by a dealer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerDebt {
    /// The backend-issued identifier.
    pub id: EntityId,
    /// The indebted dealer.
    pub dealer_id: EntityId,
    /// The indebted dealer's display name.
    #[serde(default)]
    pub dealer_name: String,
    /// The outstanding amount in minor currency units.
    pub amount: i64,
    /// Whether the debt has been settled.
    pub settled: bool,
    /// The settlement due date.
    pub due_on: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sortable fields of a manufacturer debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtSortKey {
    /// Sort by dealer name.
    DealerName,
    /// Sort by outstanding amount.
    Amount,
    /// Sort by due date.
    DueOn,
    /// Sort by creation timestamp.
    CreatedAt,
}

impl Listable for ManufacturerDebt {
    type SortKey = DebtSortKey;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.dealer_name]
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        match key {
            DebtSortKey::DealerName => SortValue::Text(&self.dealer_name),
            DebtSortKey::Amount => SortValue::Integer(self.amount),
            DebtSortKey::DueOn => SortValue::Date(self.due_on),
            DebtSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
        }
    }
}
