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

use crate::render::render_records_page;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
pub struct RecordQuery {
    pub sort: Option<String>,
}

#[derive(Clone)]
struct MetaState {
    body: Arc<str>,
}

pub fn build_records_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_records))
        .with_state(state)
}

/// Static responder for the second listener; shares nothing with the gateway.
pub fn build_meta_router(body: impl Into<Arc<str>>) -> Router {
    Router::new()
        .route("/meta-data", get(meta_data))
        .with_state(MetaState { body: body.into() })
}

async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<RecordQuery>,
) -> Response {
    let sort = params.sort.unwrap_or_default();
    match state.gateway.fetch(&sort).await {
        Ok(records) => Html(render_records_page(&records)).into_response(),
        Err(e) => {
            warn!(error = %e, "record fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn meta_data(State(meta): State<MetaState>) -> String {
    meta.body.to_string()
}
