//! Point DTOs - Data Transfer Objects per i punti di raccolta

use crate::dtos::ItemDTO;
use crate::entities::Point;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body di `POST /points` (senza id e immagine, assegnati dal server)
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct CreatePointDTO {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub number: String,
    pub uf: String,
    #[validate(length(min = 1, message = "A point must accept at least one item"))]
    pub items: Vec<i64>,
}

/// Risposta di `GET /points/{id}`
#[derive(Serialize, Deserialize, Debug)]
pub struct PointDetailDTO {
    pub point: Point,
    pub items: Vec<ItemDTO>,
}
