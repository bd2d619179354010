// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed client for the quotes resource.

use crate::envelope::Page;
use crate::transport::Transport;
use dealer_hub::BackendError;
use dealer_hub_domain::{Quote, Resource};

/// Sub-client for `/api/quotes`.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    transport: Transport,
}

impl QuoteClient {
    pub(crate) const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists all quotes.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] on any failure.
    pub async fn list(&self) -> Result<Page<Quote>, BackendError> {
        self.transport.get_list(Resource::Quotes).await
    }
}
