// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk distribution execution.
//!
//! A validated [`DistributionPlan`] is executed as one independent API
//! call per target. The operation is deliberately non-transactional: one
//! target's failure never aborts the rest, and the aggregated result
//! carries per-target failure detail. The true post-distribution stock is
//! server-computed, so after any success the source entity must be
//! refetched rather than locally decremented.

use crate::backend::{DistributionBackend, ListBackend};
use crate::error::BackendError;
use crate::list::ListController;
use dealer_hub_domain::{DistributionPlan, EntityId, Listable};
use futures::future::join_all;
use tracing::{info, warn};

/// One failed target of a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionFailure {
    /// The target dealer that failed.
    pub target_id: EntityId,
    /// The failure message for this target.
    pub message: String,
}

/// The aggregated outcome of one distribution plan execution.
///
/// Produced exactly once per plan; rendered as a summary and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionResult {
    /// How many targets succeeded.
    pub succeeded: usize,
    /// How many targets failed.
    pub failed: usize,
    /// Per-target failure detail, in target order.
    pub failure_details: Vec<DistributionFailure>,
}

impl DistributionResult {
    /// Returns true if the source entity's canonical state must be
    /// refetched.
    ///
    /// Any successful target changes server-side stock, and the local
    /// snapshot must not be decremented in its place.
    #[must_use]
    pub const fn requires_refresh(&self) -> bool {
        self.succeeded > 0
    }

    /// Renders the "N succeeded, M failed" summary line.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} succeeded, {} failed", self.succeeded, self.failed)
    }
}

/// Executes a distribution plan, consuming it.
///
/// Per-target calls are issued together and joined; the result reflects
/// every outcome, with failures listed in target order. Failures are
/// aggregated as data, never raised as errors.
pub async fn execute_plan<B>(backend: &B, plan: DistributionPlan) -> DistributionResult
where
    B: DistributionBackend,
{
    let calls = plan.target_ids().iter().map(|target| {
        backend.distribute(
            plan.resource(),
            plan.source_id(),
            target,
            plan.quantity_per_target(),
            plan.color(),
            plan.notes(),
        )
    });
    let outcomes: Vec<Result<(), BackendError>> = join_all(calls).await;

    let mut succeeded: usize = 0;
    let mut failure_details: Vec<DistributionFailure> = Vec::new();
    for (target, outcome) in plan.target_ids().iter().zip(outcomes) {
        match outcome {
            Ok(()) => succeeded += 1,
            Err(err) => {
                warn!(target = %target, error = %err, "distribution target failed");
                failure_details.push(DistributionFailure {
                    target_id: target.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    let result = DistributionResult {
        succeeded,
        failed: failure_details.len(),
        failure_details,
    };
    info!(
        source = %plan.source_id(),
        summary = %result.summary(),
        "distribution complete"
    );
    result
}

/// Executes a plan and refetches the source collection when required.
///
/// After at least one successful target, the source entity's canonical
/// state is refetched through a guarded fetch ticket. A total failure
/// leaves the collection untouched.
///
/// # Errors
///
/// Returns the refetch's [`BackendError`] if it fails; the distribution
/// result itself is never an error.
pub async fn execute_plan_and_refresh<T, B>(
    backend: &B,
    list: &mut ListController<T>,
    plan: DistributionPlan,
) -> Result<DistributionResult, BackendError>
where
    T: Listable,
    B: DistributionBackend + ListBackend<T>,
{
    let result: DistributionResult = execute_plan(backend, plan).await;
    if result.requires_refresh() {
        let ticket = list.begin_fetch();
        let items: Vec<T> = backend.fetch().await?;
        list.complete_fetch(ticket, items);
    }
    Ok(result)
}
