//! Item services - Catalogo degli item

use crate::core::{AppError, AppState};
use crate::dtos::ItemDTO;
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemDTO>>, AppError> {
    let items = state.item.find_all().await?;

    let items_dto: Vec<ItemDTO> = items
        .into_iter()
        .map(|item| ItemDTO::from_entity(item, &state.public_url))
        .collect();

    info!("Returning {} items", items_dto.len());
    Ok(Json(items_dto))
}
