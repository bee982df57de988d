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

use crate::error::StoreError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:8123/";

/// Executes one textual command against the store and returns the raw body.
#[async_trait]
pub trait StoreClient: Send + Sync {
    async fn execute(&self, command: &str) -> Result<String, StoreError>;
}

#[async_trait]
impl<T: StoreClient + ?Sized> StoreClient for Arc<T> {
    async fn execute(&self, command: &str) -> Result<String, StoreError> {
        (**self).execute(command).await
    }
}

/// Store client speaking the ClickHouse HTTP interface: every command is the
/// whole `text/plain` body of a POST to a single endpoint. No retries.
#[derive(Debug, Clone)]
pub struct HttpStoreClient {
    client: Client,
    endpoint: String,
}

impl HttpStoreClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl StoreClient for HttpStoreClient {
    async fn execute(&self, command: &str) -> Result<String, StoreError> {
        debug!(
            endpoint = %self.endpoint,
            bytes = command.len(),
            "Sending command to store"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(command.to_owned())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // an unreadable diagnostic body does not change the classification
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Store rejected command");
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text().await?)
    }
}
