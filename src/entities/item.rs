//! Item entity - Categoria di materiale raccolto (dati di riferimento)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub title: String,
    /// Nome del file immagine, l'URL completo viene costruito nel DTO
    pub image: String,
}
