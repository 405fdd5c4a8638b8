//! Point entity - Punto di raccolta registrato

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Immagine assegnata ai punti appena creati (upload non supportato)
pub const PLACEHOLDER_IMAGE: &str = "fake.png";

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Point {
    pub id: i64,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub number: String,
    pub uf: String,
}
