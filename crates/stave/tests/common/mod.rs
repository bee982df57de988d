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

#![allow(dead_code)]

use async_trait::async_trait;
use stave::{StoreClient, StoreError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory store answering commands from a script, in order. Once the
/// script runs out every command succeeds with an empty body.
#[derive(Default)]
pub struct ScriptedStore {
    responses: Mutex<VecDeque<Result<String, StoreError>>>,
    commands: Mutex<Vec<String>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    pub fn then_status(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Err(StoreError::Status {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn then_unreachable(self) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(StoreError::Transport("connection refused".into())));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreClient for ScriptedStore {
    async fn execute(&self, command: &str) -> Result<String, StoreError> {
        self.commands.lock().unwrap().push(command.to_owned());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

pub const SEED_BODY: &str = r#"{
    "meta": [
        {"name": "id", "type": "Int64"},
        {"name": "name", "type": "String"},
        {"name": "id_card", "type": "String"},
        {"name": "phone", "type": "String"},
        {"name": "affiliation", "type": "String"},
        {"name": "additional_info", "type": "String"}
    ],
    "data": [
        {"id": "1", "name": "gacj", "id_card": "33333333", "phone": "15534212521", "affiliation": "1223321", "additional_info": "hacker"},
        {"id": "2", "name": "hacker", "id_card": "3333", "phone": "15534212521", "affiliation": "15534212521", "additional_info": "15534212521"}
    ],
    "rows": 2,
    "statistics": {"elapsed": 0.000512, "rows_read": 2, "bytes_read": 170}
}"#;
