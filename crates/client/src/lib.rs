// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Typed REST client for the Dealer Hub backend.
//!
//! One shared HTTP transport with per-resource sub-clients. Every call
//! attaches the bearer token from an explicit [`SessionHandle`]; a 401
//! response tears the session down. Response envelopes are normalized and
//! failures classified exactly once, here, so no consuming component ever
//! inspects a raw response shape.
//!
//! This crate implements the backend traits of `dealer-hub`, making it the
//! only path between the engines and the network.

mod backend;
mod config;
mod customers;
mod dealers;
mod debts;
mod envelope;
mod inventory;
mod promotions;
mod quotes;
mod requests;
mod session;
mod transport;

pub use config::{ClientConfig, ConfigError};
pub use customers::CustomerClient;
pub use dealers::{CreateDealerRequest, DealerClient};
pub use debts::DebtClient;
pub use envelope::Page;
pub use inventory::InventoryClient;
pub use promotions::PromotionClient;
pub use quotes::QuoteClient;
pub use requests::RequestClient;
pub use session::SessionHandle;

use crate::transport::Transport;
use std::time::Duration;

/// Root client for the Dealer Hub backend. Holds sub-clients per resource.
#[derive(Debug, Clone)]
pub struct DealerHubClient {
    transport: Transport,
    dealers: DealerClient,
    inventory: InventoryClient,
    promotions: PromotionClient,
    requests: RequestClient,
    quotes: QuoteClient,
    customers: CustomerClient,
    debts: DebtClient,
}

impl DealerHubClient {
    /// Creates a client from configuration and a session handle.
    ///
    /// The session is shared by reference: logging in or out through the
    /// handle affects every subsequent call made by this client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the underlying HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig, session: SessionHandle) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;

        let transport = Transport::new(http, config.base_url, session);
        Ok(Self {
            dealers: DealerClient::new(transport.clone()),
            inventory: InventoryClient::new(transport.clone()),
            promotions: PromotionClient::new(transport.clone()),
            requests: RequestClient::new(transport.clone()),
            quotes: QuoteClient::new(transport.clone()),
            customers: CustomerClient::new(transport.clone()),
            debts: DebtClient::new(transport.clone()),
            transport,
        })
    }

    /// Access the dealers sub-client.
    #[must_use]
    pub const fn dealers(&self) -> &DealerClient {
        &self.dealers
    }

    /// Access the inventory (vehicle SKUs and stock) sub-client.
    #[must_use]
    pub const fn inventory(&self) -> &InventoryClient {
        &self.inventory
    }

    /// Access the promotions sub-client.
    #[must_use]
    pub const fn promotions(&self) -> &PromotionClient {
        &self.promotions
    }

    /// Access the vehicle-requests sub-client.
    #[must_use]
    pub const fn requests(&self) -> &RequestClient {
        &self.requests
    }

    /// Access the quotes sub-client.
    #[must_use]
    pub const fn quotes(&self) -> &QuoteClient {
        &self.quotes
    }

    /// Access the customers sub-client.
    #[must_use]
    pub const fn customers(&self) -> &CustomerClient {
        &self.customers
    }

    /// Access the manufacturer-debts sub-client.
    #[must_use]
    pub const fn debts(&self) -> &DebtClient {
        &self.debts
    }

    /// Access the session handle this client authenticates with.
    #[must_use]
    pub const fn session(&self) -> &SessionHandle {
        self.transport.session()
    }
}
