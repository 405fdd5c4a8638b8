//! Point services - Registrazione e consultazione dei punti di raccolta

use crate::core::{AppError, AppState};
use crate::dtos::{CreatePointDTO, ItemDTO, PointDetailDTO, PointsQuery};
use crate::entities::Point;
use crate::repositories::{Create, Read};
use axum::extract::{Json, Path, Query, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, params))]
pub async fn list_points(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PointsQuery>, // /points?city=..&uf=..&items=1,2
) -> Result<Json<Vec<Point>>, AppError> {
    let filter = params.parse().inspect_err(|e| {
        warn!("Rejected points filter: {}", e.message());
    })?;

    debug!(city = %filter.city, uf = %filter.uf, items = ?filter.items, "Listing points");
    let points = state.point.find_by_filter(&filter).await?;

    Ok(Json(points))
}

#[instrument(skip(state), fields(point_id = %point_id))]
pub async fn get_point(
    State(state): State<Arc<AppState>>,
    Path(point_id): Path<i64>,
) -> Result<Json<PointDetailDTO>, AppError> {
    // punto inesistente: si esce subito, senza caricare gli item
    let Some(point) = state.point.read(&point_id).await? else {
        warn!("Point not found");
        return Err(AppError::bad_request("Point ID not exists"));
    };

    let items = state
        .item
        .find_many_by_point_id(&point.id)
        .await?
        .into_iter()
        .map(|item| ItemDTO::from_entity(item, &state.public_url))
        .collect();

    Ok(Json(PointDetailDTO { point, items }))
}

#[instrument(skip(state, body), fields(city = %body.city, uf = %body.uf))]
pub async fn create_point(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePointDTO>,
) -> Result<Json<Point>, AppError> {
    body.validate().inspect_err(|e| {
        warn!("Invalid point registration: {}", e);
    })?;

    let point = state.point.create(&body).await?;

    info!("Point {} registered", point.id);
    Ok(Json(point))
}
