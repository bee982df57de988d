// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

pub mod query;
pub mod sort_token;

pub use query::{SelectCommand, ENVELOPE_FORMAT};
pub use sort_token::SortToken;

use crate::error::GatewayError;
use crate::records::{Record, StoreResponseEnvelope};
use crate::store::{StoreClient, TableRef};
use tracing::debug;

/// Sorted record listing over one table of a [`StoreClient`].
pub struct QueryGateway<C> {
    client: C,
    table: TableRef,
}

impl<C: StoreClient> QueryGateway<C> {
    pub fn new(client: C, table: TableRef) -> Self {
        Self { client, table }
    }

    /// Fetches every record ordered by `id` and the caller's sort token.
    ///
    /// Fails on a rejected token (before any store call), a store error, or
    /// an undecodable body. Individual bad fields never fail the fetch.
    pub async fn fetch(&self, sort_token: &str) -> Result<Vec<Record>, GatewayError> {
        let sort = SortToken::parse(sort_token)?;
        let command = SelectCommand::new(&self.table, &sort).to_string();
        debug!(command = %command, "Fetching records");

        let body = self.client.execute(&command).await?;
        debug!(body = %body, "Store response body");

        let envelope = StoreResponseEnvelope::parse(&body)?;
        envelope.log_summary();
        Ok(envelope.into_records())
    }
}
