//! PointItem entity - Associazione punto <-> item (tabella points_items)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointItem {
    pub point_id: i64,
    pub item_id: i64,
}
