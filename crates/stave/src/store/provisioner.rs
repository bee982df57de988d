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

use super::client::StoreClient;
use super::table::{TableRef, SEED_ROWS};
use crate::error::{ProvisionError, StoreError};
use tracing::{debug, info};

/// What [`TableProvisioner::ensure_ready`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    AlreadyPresent,
    Created { seeded_rows: usize },
}

/// Creates and seeds the backing table when it is missing. Meant to run once
/// before the process starts serving.
pub struct TableProvisioner<'a, C: StoreClient + ?Sized> {
    client: &'a C,
    table: &'a TableRef,
}

impl<'a, C: StoreClient + ?Sized> TableProvisioner<'a, C> {
    pub fn new(client: &'a C, table: &'a TableRef) -> Self {
        Self { client, table }
    }

    pub async fn ensure_ready(&self) -> Result<ProvisionOutcome, ProvisionError> {
        if self.table_exists().await? {
            info!(table = %self.table, "Table already present");
            return Ok(ProvisionOutcome::AlreadyPresent);
        }

        info!(table = %self.table, "Creating table");
        self.client
            .execute(&self.table.create_statement())
            .await
            .map_err(ProvisionError::Create)?;

        self.client
            .execute(&self.table.seed_statement())
            .await
            .map_err(ProvisionError::Seed)?;

        let seeded_rows = SEED_ROWS.len();
        info!(table = %self.table, seeded_rows, "Table created and seeded");
        Ok(ProvisionOutcome::Created { seeded_rows })
    }

    /// Any status the store answers `DESC` with other than success counts as
    /// "missing", not only an unknown-table error.
    pub async fn table_exists(&self) -> Result<bool, ProvisionError> {
        match self.client.execute(&self.table.describe_statement()).await {
            Ok(_) => Ok(true),
            Err(StoreError::Status { status, body }) => {
                debug!(table = %self.table, status, body = %body, "Describe failed, treating table as missing");
                Ok(false)
            }
            Err(err @ StoreError::Transport(_)) => Err(ProvisionError::Check(err)),
        }
    }
}
