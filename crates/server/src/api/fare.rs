use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{language, required},
    dto::{FareDto, JourneyDto, StopDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use yatri::{
    journey::{JourneyInfo, MapRegion, journey_tips},
    shared::Time,
};

pub async fn fare(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let route = state
        .network
        .route_by_id(required(&params, "bus")?)
        .ok_or(StatusCode::NOT_FOUND)?;
    let source = required(&params, "source")?;
    let destination = required(&params, "destination")?;
    let calculation = state.estimator.calculate(route, source, destination);
    Ok(Json(FareDto::from(calculation, &state.estimator)).into_response())
}

pub async fn journey(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let route = state
        .network
        .route_by_id(required(&params, "bus")?)
        .ok_or(StatusCode::NOT_FOUND)?;
    let source = required(&params, "source")?;
    let destination = required(&params, "destination")?;
    let language = language(&params);

    let info = JourneyInfo::new(route, source, destination).ok_or(StatusCode::NOT_FOUND)?;
    let calculation = state.estimator.calculate(route, source, destination);
    let tips = journey_tips(
        language,
        Some(&calculation),
        &state.estimator.config().currency_symbol,
        Time::now().hour(),
    );

    let result = JourneyDto {
        bus_id: route.id.to_string(),
        source: StopDto::from(info.source, language),
        destination: StopDto::from(info.destination, language),
        stops: info
            .segment
            .stops()
            .map(|stop| StopDto::from(stop, language))
            .collect(),
        total_stops: info.total_stops(),
        intermediate_stops: info.intermediate_stops(),
        highlights: info.highlights(language),
        fare: FareDto::from(calculation, &state.estimator),
        tips,
        region: MapRegion::for_segment(&info.segment, state.fallback_region),
        maps_url: state.maps.journey_url(route, source, destination),
    };
    Ok(Json(result).into_response())
}
