// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed client for the vehicles resource.

use crate::envelope::Page;
use crate::transport::Transport;
use dealer_hub::BackendError;
use dealer_hub_domain::{Resource, Vehicle};

/// Sub-client for `/api/vehicles`.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    transport: Transport,
}

impl InventoryClient {
    pub(crate) const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists all vehicle SKUs with their stock snapshots.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] on any failure.
    pub async fn list(&self) -> Result<Page<Vehicle>, BackendError> {
        self.transport.get_list(Resource::Vehicles).await
    }
}
