use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{language, required},
    dto::{BusDto, RouteDto, StopDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

pub async fn stops(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let language = language(&params);
    let result: Vec<_> = state
        .network
        .picker_stops(&state.picker)
        .into_iter()
        .map(|stop| StopDto::from(stop, language))
        .collect();
    Ok(Json(result).into_response())
}

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let query = params.get("q").ok_or(StatusCode::BAD_REQUEST)?;
    let count: usize = match params.get("count") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => 10,
    };
    let language = language(&params);
    let result: Vec<_> = state
        .network
        .search_stops(query)
        .into_iter()
        .take(count)
        .map(|stop| StopDto::from(stop, language))
        .collect();
    Ok(Json(result).into_response())
}

pub async fn buses(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let source = required(&params, "source")?;
    let destination = required(&params, "destination")?;
    let language = language(&params);
    info!("Searching buses from {source} to {destination}");
    let result: Vec<_> = state
        .network
        .routes_between(source, destination)
        .into_iter()
        .map(|route| BusDto::from(route, language))
        .collect();
    Ok(Json(result).into_response())
}

pub async fn bus(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let route = state.network.route_by_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(RouteDto::from(route, language(&params))).into_response())
}
