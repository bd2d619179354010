// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed client for the vehicle-requests resource.

use crate::envelope::Page;
use crate::transport::Transport;
use dealer_hub::BackendError;
use dealer_hub_domain::{Resource, VehicleRequest};

/// Sub-client for `/api/vehicle-requests`.
#[derive(Debug, Clone)]
pub struct RequestClient {
    transport: Transport,
}

impl RequestClient {
    pub(crate) const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists all vehicle requests.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] on any failure.
    pub async fn list(&self) -> Result<Page<VehicleRequest>, BackendError> {
        self.transport.get_list(Resource::Requests).await
    }
}
