// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed client for the customers resource.

use crate::envelope::Page;
use crate::transport::Transport;
use dealer_hub::BackendError;
use dealer_hub_domain::{Customer, Resource};

/// Sub-client for `/api/customers`.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    transport: Transport,
}

impl CustomerClient {
    pub(crate) const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists all customers.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] on any failure.
    pub async fn list(&self) -> Result<Page<Customer>, BackendError> {
        self.transport.get_list(Resource::Customers).await
    }
}
