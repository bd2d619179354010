// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow status transitions.
//!
//! Transitions are operator-initiated and validated locally against the
//! entity's status machine before any request is sent: an invalid
//! transition never reaches the network. Exactly one API call is issued
//! per invocation, and nothing is retried automatically.

use crate::backend::TransitionBackend;
use crate::error::TransitionError;
use crate::list::ListController;
use dealer_hub_domain::{EntityId, StatusMachine, Transitionable};
use tracing::{debug, warn};

/// Transitions one entity to a target status.
///
/// The entity's current status is read from the source collection, the
/// transition is validated by the entity's status machine, and only then
/// is the corresponding API call issued. On success the entity's status is
/// patched in place (no full refetch) so the list does not flicker. On
/// failure the displayed status is left unchanged.
///
/// # Arguments
///
/// * `backend` - The transition backend
/// * `list` - The controller holding the entity's collection
/// * `id` - The entity to transition
/// * `target` - The requested status
/// * `reason` - Optional textual reason recorded with the transition
///
/// # Errors
///
/// Returns an error if:
/// - The entity is not in the source collection (`EntityNotFound`)
/// - The entity's current status was not recognized (`UnknownStatus`,
///   a transient condition)
/// - The status machine rejects the transition (`DomainViolation`; no
///   request is sent)
/// - The backend refuses or the call fails (`Backend`, carrying the
///   server's message verbatim)
pub async fn transition<T, B>(
    backend: &B,
    list: &mut ListController<T>,
    id: &EntityId,
    target: T::Status,
    reason: Option<&str>,
) -> Result<(), TransitionError>
where
    T: Transitionable,
    B: TransitionBackend,
{
    let current: T::Status = list
        .find(id)
        .ok_or_else(|| TransitionError::EntityNotFound { id: id.clone() })?
        .status();

    if !current.is_known() {
        warn!(entity = %id, "refusing transition from unrecognized status");
        return Err(TransitionError::UnknownStatus { id: id.clone() });
    }

    // Fail fast locally; an invalid transition sends no request
    current.validate_transition(target)?;

    backend
        .submit_transition(T::resource(), id, target.action_segment(), reason)
        .await?;

    list.patch(id, |entity| entity.set_status(target));
    debug!(
        entity = %id,
        from = current.as_str(),
        to = target.as_str(),
        "status transition committed"
    );
    Ok(())
}
