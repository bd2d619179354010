// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed client for the manufacturer-debts resource.

use crate::envelope::Page;
use crate::transport::Transport;
use dealer_hub::BackendError;
use dealer_hub_domain::{ManufacturerDebt, Resource};

/// Sub-client for `/api/manufacturer-debts`.
#[derive(Debug, Clone)]
pub struct DebtClient {
    transport: Transport,
}

impl DebtClient {
    pub(crate) const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists all manufacturer debts.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] on any failure.
    pub async fn list(&self) -> Result<Page<ManufacturerDebt>, BackendError> {
        self.transport.get_list(Resource::Debts).await
    }
}
