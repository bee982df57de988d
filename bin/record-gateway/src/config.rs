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

use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;
use stave::store::table::{DEFAULT_DATABASE, DEFAULT_TABLE};
use stave::store::DEFAULT_STORE_URL;
use stave::TableRef;

pub const ENV_PREFIX: &str = "GATEWAY";

/// Runtime settings, overridable through `GATEWAY_*` environment variables
/// (e.g. `GATEWAY_STORE_URL`, `GATEWAY_RECORDS_ADDR`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    pub store_url: String,
    pub database: String,
    pub table: String,
    pub records_addr: String,
    pub meta_addr: String,
    pub meta_body: String,
    pub log_json: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            table: DEFAULT_TABLE.to_string(),
            records_addr: "0.0.0.0:8080".to_string(),
            meta_addr: "0.0.0.0:1111".to_string(),
            meta_body: "flag{clickhouse}".to_string(),
            log_json: false,
        }
    }
}

impl GatewayConfig {
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(&self.database, &self.table)
    }
}

pub fn load_config() -> Result<GatewayConfig, ConfigError> {
    build_config(None)
}

/// `env` replaces the process environment when given.
pub fn build_config(env: Option<Map<String, String>>) -> Result<GatewayConfig, ConfigError> {
    let defaults = GatewayConfig::default();
    Config::builder()
        .set_default("store_url", defaults.store_url)?
        .set_default("database", defaults.database)?
        .set_default("table", defaults.table)?
        .set_default("records_addr", defaults.records_addr)?
        .set_default("meta_addr", defaults.meta_addr)?
        .set_default("meta_body", defaults.meta_body)?
        .set_default("log_json", defaults.log_json)?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        )
        .build()?
        .try_deserialize()
}
