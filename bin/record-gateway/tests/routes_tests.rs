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

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use record_gateway::http::routes::{build_meta_router, build_records_router};
use record_gateway::AppState;
use stave::{QueryGateway, StoreClient, StoreError, TableRef};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Answers every command with the same result and remembers what it saw.
struct FixedStore {
    result: Result<String, (u16, String)>,
    seen: Mutex<Vec<String>>,
}

impl FixedStore {
    fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(body.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err((status, body.to_string())),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreClient for FixedStore {
    async fn execute(&self, command: &str) -> Result<String, StoreError> {
        self.seen.lock().unwrap().push(command.to_owned());
        self.result
            .clone()
            .map_err(|(status, body)| StoreError::Status { status, body })
    }
}

fn records_app(store: Arc<FixedStore>) -> Router {
    let client: Arc<dyn StoreClient> = store;
    let gateway = Arc::new(QueryGateway::new(client, TableRef::default()));
    build_records_router(AppState::new(gateway))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

const BODY: &str = r#"{"data": [
    {"id": "2", "name": "hacker", "id_card": "3333", "phone": "15534212521", "affiliation": "15534212521", "additional_info": "15534212521"},
    {"id": "1", "name": "gacj", "id_card": "33333333", "phone": "15534212521", "affiliation": "1223321", "additional_info": "hacker"}
]}"#;

#[tokio::test]
async fn sort_parameter_reaches_the_store() {
    let store = FixedStore::ok(BODY);
    let (status, page) = get(records_app(store.clone()), "/?sort=DESC").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        store.seen(),
        vec!["SELECT * FROM default.clickhouse_sec ORDER BY id DESC FORMAT JSON".to_string()]
    );
    let hacker = page.find("hacker").unwrap();
    let gacj = page.find("gacj").unwrap();
    assert!(hacker < gacj, "rows rendered out of store order");
    assert!(page.contains("<td>33333333</td>"));
}

#[tokio::test]
async fn missing_sort_parameter_uses_empty_token() {
    let store = FixedStore::ok(r#"{"data": []}"#);
    let (status, _) = get(records_app(store.clone()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        store.seen()[0],
        "SELECT * FROM default.clickhouse_sec ORDER BY id  FORMAT JSON"
    );
}

#[tokio::test]
async fn rejected_token_returns_server_error_text() {
    let store = FixedStore::ok(BODY);
    let (status, body) = get(
        records_app(store.clone()),
        "/?sort=id%20FROM%20x%3B%20SELECT%20*%20FROM%20secrets",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "mamba out");
    assert!(store.seen().is_empty());
}

#[tokio::test]
async fn store_failure_surfaces_raw_error_text() {
    let store = FixedStore::status(400, "Code: 62. Syntax error");
    let (status, body) = get(records_app(store), "/?sort=sideways").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("status 400"));
    assert!(body.contains("Syntax error"));
}

#[tokio::test]
async fn meta_router_serves_static_text() {
    let (status, body) = get(build_meta_router("flag{clickhouse}"), "/meta-data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "flag{clickhouse}");

    let (status, _) = get(build_meta_router("x"), "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
