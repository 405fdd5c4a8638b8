//! ItemRepository - Repository per il catalogo degli item

use crate::entities::Item;
use sqlx::{Error, SqlitePool};
use tracing::{debug, instrument};

pub struct ItemRepository {
    connection_pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Full item catalog, ordered by id
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Item>, Error> {
        let items = sqlx::query_as::<_, Item>("SELECT id, title, image FROM items ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Loaded {} items", items.len());
        Ok(items)
    }

    /// Items accepted by a point, resolved through `points_items`
    #[instrument(skip(self), fields(point_id = %point_id))]
    pub async fn find_many_by_point_id(&self, point_id: &i64) -> Result<Vec<Item>, Error> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT items.id, items.title, items.image
            FROM items
            INNER JOIN points_items ON items.id = points_items.item_id
            WHERE points_items.point_id = ?
            ORDER BY items.id
            "#,
        )
        .bind(point_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Point has {} items", items.len());
        Ok(items)
    }
}
