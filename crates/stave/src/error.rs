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

use thiserror::Error;

/// Failure of a single store command: either no exchange happened at all, or
/// the store answered with a non-success status.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Transport(String),
    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },
}

impl StoreError {
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Status { status, .. } => Some(*status),
            StoreError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("failed to check table existence: {0}")]
    Check(#[source] StoreError),
    #[error("failed to create table: {0}")]
    Create(#[source] StoreError),
    #[error("failed to insert seed data: {0}")]
    Seed(#[source] StoreError),
}

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The sort token carried the `select * from` marker.
    #[error("mamba out")]
    Rejected,
    #[error("failed to fetch records: {0}")]
    Store(#[from] StoreError),
    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}
