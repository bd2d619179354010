// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend trait seams.
//!
//! The engines in this crate never speak HTTP themselves; they are written
//! against these traits. The `dealer-hub-client` crate implements them
//! over the remote REST API, and tests implement them with recording
//! fakes. Every method corresponds to exactly one outbound call.

use crate::error::BackendError;
use dealer_hub_domain::{EntityId, Listable, Resource};

/// Fetches the full collection backing one list screen.
pub trait ListBackend<T: Listable> {
    /// Fetches the current collection from the backend.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] on any transport or HTTP
    /// failure.
    fn fetch(&self) -> impl Future<Output = Result<Vec<T>, BackendError>>;
}

/// Submits a single status transition.
pub trait TransitionBackend {
    /// Requests the transition `action` on `{resource}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] if the backend refuses or the
    /// call fails.
    fn submit_transition(
        &self,
        resource: Resource,
        id: &EntityId,
        action: &str,
        reason: Option<&str>,
    ) -> impl Future<Output = Result<(), BackendError>>;
}

/// Distributes units of a source entity to a single target dealer.
pub trait DistributionBackend {
    /// Requests one per-target distribution call.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] if the backend refuses or the
    /// call fails.
    fn distribute(
        &self,
        resource: Resource,
        source_id: &EntityId,
        target_id: &EntityId,
        quantity: u32,
        color: Option<&str>,
        notes: Option<&str>,
    ) -> impl Future<Output = Result<(), BackendError>>;
}

/// The two calls of the quote-to-order conversion workflow.
pub trait OrderBackend {
    /// Creates an order from a quote and returns the new order's id.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`]; stock shortages arrive as
    /// `BusinessRule` with the server's message.
    fn create_order(&self, quote_id: &EntityId)
    -> impl Future<Output = Result<EntityId, BackendError>>;

    /// Marks a quote as converted after its order has been created.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] if the backend refuses or the
    /// call fails.
    fn mark_quote_converted(
        &self,
        quote_id: &EntityId,
    ) -> impl Future<Output = Result<(), BackendError>>;
}
