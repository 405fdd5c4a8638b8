//! Item DTOs - Data Transfer Objects per il catalogo item

use crate::entities::Item;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemDTO {
    pub id: i64,
    pub title: String,
    pub image_url: String,
}

impl ItemDTO {
    /// Converte l'entity risolvendo l'immagine sotto `{public_url}/uploads/`
    pub fn from_entity(item: Item, public_url: &str) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: format!("{}/uploads/{}", public_url, item.image),
        }
    }
}
