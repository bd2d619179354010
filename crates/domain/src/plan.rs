// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Distribution plan construction and validation.
//!
//! A plan describes distributing units of a source entity (a vehicle SKU's
//! stock, or a promotion) to a set of target dealers. Validation happens
//! entirely here, before any network call: a plan that constructs is a plan
//! that may be executed.

use crate::error::DomainError;
use crate::stock::VehicleStock;
use crate::types::{EntityId, Resource};

/// A validated plan to distribute a source entity to target dealers.
///
/// Target ids are deduplicated on construction, preserving first-occurrence
/// order. The plan is consumed by execution and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan {
    resource: Resource,
    source_id: EntityId,
    target_ids: Vec<EntityId>,
    quantity_per_target: u32,
    color: Option<String>,
    notes: Option<String>,
}

impl DistributionPlan {
    /// Builds and validates a distribution plan.
    ///
    /// # Arguments
    ///
    /// * `resource` - The REST resource the source entity lives under
    /// * `source_id` - The source entity (vehicle SKU or promotion)
    /// * `target_ids` - The selected target dealers (duplicates are dropped)
    /// * `quantity_per_target` - Units to distribute to each target
    /// * `color` - Optional color constraining the stock pool drawn from
    /// * `notes` - Optional free-text note recorded with each distribution
    /// * `availability` - The source's stock snapshot, for sources that
    ///   track quantities; `None` for unconstrained sources (promotions)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No targets are selected (`EmptySelection`)
    /// - The quantity per target is zero (`InvalidQuantity`)
    /// - The constrained pool (or the aggregate, when no color is given)
    ///   holds fewer units than the plan requires
    ///   (`InsufficientAvailability`, carrying the exact figures)
    pub fn new(
        resource: Resource,
        source_id: EntityId,
        target_ids: &[EntityId],
        quantity_per_target: u32,
        color: Option<String>,
        notes: Option<String>,
        availability: Option<&VehicleStock>,
    ) -> Result<Self, DomainError> {
        // Rule: the selection must not be empty
        if target_ids.is_empty() {
            return Err(DomainError::EmptySelection);
        }

        // Rule: quantity per target must be a positive integer
        if quantity_per_target == 0 {
            return Err(DomainError::InvalidQuantity {
                quantity: quantity_per_target,
            });
        }

        // Drop duplicate targets, keeping first-occurrence order
        let mut deduplicated: Vec<EntityId> = Vec::with_capacity(target_ids.len());
        for target in target_ids {
            if !deduplicated.contains(target) {
                deduplicated.push(target.clone());
            }
        }

        // Rule: the constrained pool must cover the full plan
        if let Some(stock) = availability {
            let available: u64 = stock.available(color.as_deref());
            let required: u64 = u64::from(quantity_per_target) * deduplicated.len() as u64;
            if required > available {
                return Err(DomainError::InsufficientAvailability {
                    available,
                    required,
                });
            }
        }

        Ok(Self {
            resource,
            source_id,
            target_ids: deduplicated,
            quantity_per_target,
            color,
            notes,
        })
    }

    /// Returns the REST resource the source entity lives under.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    /// Returns the source entity identifier.
    #[must_use]
    pub const fn source_id(&self) -> &EntityId {
        &self.source_id
    }

    /// Returns the deduplicated targets, in first-occurrence order.
    #[must_use]
    pub fn target_ids(&self) -> &[EntityId] {
        &self.target_ids
    }

    /// Returns the units to distribute to each target.
    #[must_use]
    pub const fn quantity_per_target(&self) -> u32 {
        self.quantity_per_target
    }

    /// Returns the color constraint, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the free-text note, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the total units this plan draws from the source.
    #[must_use]
    pub fn required_quantity(&self) -> u64 {
        u64::from(self.quantity_per_target) * self.target_ids.len() as u64
    }
}
