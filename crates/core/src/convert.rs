// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quote-to-order conversion.
//!
//! Converting a quote is a two-step workflow: the backend creates an order
//! (validating stock server-side), then the source quote is marked
//! converted. The steps are not atomic; a failure between them is reported
//! distinctly so the operator can reconcile the created order.

use crate::backend::OrderBackend;
use crate::error::ConversionError;
use crate::list::ListController;
use dealer_hub_domain::{EntityId, Quote, QuoteStatus};
use tracing::{debug, warn};

/// Converts a pending quote into an order.
///
/// Validates the quote's status locally, creates the order, marks the
/// quote converted, and patches the local quote status. Returns the new
/// order's id.
///
/// # Errors
///
/// Returns an error if:
/// - The quote is not in the source collection (`QuoteNotFound`)
/// - The quote's status does not permit conversion (`DomainViolation`;
///   no request is sent)
/// - Order creation fails (`OrderCreation`; stock shortages arrive here
///   as business-rule refusals)
/// - The order was created but the quote could not be marked converted
///   (`QuoteMarkFailed`, carrying the created order's id); the local
///   quote status is left unchanged for reconciliation
pub async fn convert_quote<B>(
    backend: &B,
    quotes: &mut ListController<Quote>,
    quote_id: &EntityId,
) -> Result<EntityId, ConversionError>
where
    B: OrderBackend,
{
    let status: QuoteStatus = quotes
        .find(quote_id)
        .ok_or_else(|| ConversionError::QuoteNotFound {
            id: quote_id.clone(),
        })?
        .status;

    // Fail fast locally; only pending quotes convert
    status.validate_transition(QuoteStatus::Converted)?;

    let order_id: EntityId = backend
        .create_order(quote_id)
        .await
        .map_err(ConversionError::OrderCreation)?;

    if let Err(err) = backend.mark_quote_converted(quote_id).await {
        warn!(
            quote = %quote_id,
            order = %order_id,
            error = %err,
            "order created but quote not marked converted"
        );
        return Err(ConversionError::QuoteMarkFailed {
            order_id,
            error: err,
        });
    }

    quotes.patch(quote_id, |quote| quote.status = QuoteStatus::Converted);
    debug!(quote = %quote_id, order = %order_id, "quote converted");
    Ok(order_id)
}
