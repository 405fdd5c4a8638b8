//! PointRepository - Repository per i punti di raccolta

use super::{Create, Read};
use crate::dtos::{CreatePointDTO, PointFilter};
use crate::entities::point::PLACEHOLDER_IMAGE;
use crate::entities::{Point, PointItem};
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

pub struct PointRepository {
    connection_pool: SqlitePool,
}

impl PointRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Points in `city`/`uf` accepting at least one of `filter.items`.
    /// A point matching several items is returned once (DISTINCT on the result set).
    #[instrument(skip(self, filter), fields(city = %filter.city, uf = %filter.uf, items = ?filter.items))]
    pub async fn find_by_filter(&self, filter: &PointFilter) -> Result<Vec<Point>, Error> {
        if filter.items.is_empty() {
            debug!("Empty item filter, nothing can match");
            return Ok(Vec::new());
        }

        let mut query_builder = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT DISTINCT points.*
            FROM points
            INNER JOIN points_items ON points.id = points_items.point_id
            WHERE points_items.item_id IN ("#,
        );

        let mut separated = query_builder.separated(", ");
        for item_id in &filter.items {
            separated.push_bind(*item_id);
        }
        separated.push_unseparated(")");

        query_builder.push(" AND points.city = ");
        query_builder.push_bind(filter.city.clone());
        query_builder.push(" AND points.uf = ");
        query_builder.push_bind(filter.uf.clone());
        query_builder.push(" ORDER BY points.id");

        let points = query_builder
            .build_query_as::<Point>()
            .fetch_all(&self.connection_pool)
            .await?;

        info!("Found {} points matching filter", points.len());
        Ok(points)
    }
}

impl Create<Point, CreatePointDTO> for PointRepository {
    /// Inserts the point and its `points_items` rows as a single unit of work.
    /// Any failure before `commit` drops the transaction, which rolls back the point insert.
    #[instrument(skip(self, data), fields(name = %data.name, items = data.items.len()))]
    async fn create(&self, data: &CreatePointDTO) -> Result<Point, Error> {
        debug!("Creating new point");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO points (image, name, email, whatsapp, latitude, longitude, city, number, uf)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(PLACEHOLDER_IMAGE)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.whatsapp)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.city)
        .bind(&data.number)
        .bind(&data.uf)
        .execute(&mut *tx)
        .await?;

        let point_id = result.last_insert_rowid();

        // un item selezionato due volte produce una sola associazione
        let mut seen = HashSet::with_capacity(data.items.len());
        let associations: Vec<PointItem> = data
            .items
            .iter()
            .copied()
            .filter(|item_id| seen.insert(*item_id))
            .map(|item_id| PointItem { point_id, item_id })
            .collect();

        for association in &associations {
            sqlx::query("INSERT INTO points_items (point_id, item_id) VALUES (?, ?)")
                .bind(association.point_id)
                .bind(association.item_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(
            "Point created with id {} and {} items",
            point_id,
            associations.len()
        );

        Ok(Point {
            id: point_id,
            image: PLACEHOLDER_IMAGE.to_string(),
            name: data.name.clone(),
            email: data.email.clone(),
            whatsapp: data.whatsapp.clone(),
            latitude: data.latitude,
            longitude: data.longitude,
            city: data.city.clone(),
            number: data.number.clone(),
            uf: data.uf.clone(),
        })
    }
}

impl Read<Point, i64> for PointRepository {
    #[instrument(skip(self), fields(point_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Point>, Error> {
        debug!("Reading point by id");
        let point = sqlx::query_as::<_, Point>(
            r#"
            SELECT id, image, name, email, whatsapp, latitude, longitude, city, number, uf
            FROM points
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if point.is_some() {
            debug!("Point found");
        } else {
            debug!("Point not found");
        }

        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    fn new_point(city: &str, uf: &str, items: Vec<i64>) -> CreatePointDTO {
        CreatePointDTO {
            name: "Cooperativa Reciclar".to_string(),
            email: "contato@reciclar.org".to_string(),
            whatsapp: "81999990000".to_string(),
            latitude: -8.0476,
            longitude: -34.877,
            city: city.to_string(),
            number: "120".to_string(),
            uf: uf.to_string(),
            items,
        }
    }

    fn filter(city: &str, uf: &str, items: Vec<i64>) -> PointFilter {
        PointFilter {
            city: city.to_string(),
            uf: uf.to_string(),
            items,
        }
    }

    async fn count_points(pool: &SqlitePool) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM points")
            .fetch_one(pool)
            .await
    }

    /*------------------------------------------- */
    /* Unit tests: create                         */
    /*------------------------------------------- */

    #[sqlx::test]
    async fn test_create_point_with_items(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool.clone());

        let point = repo.create(&new_point("Recife", "PE", vec![3, 1])).await?;

        assert_eq!(point.image, PLACEHOLDER_IMAGE);
        assert_eq!(point.city, "Recife");

        let stored = repo.read(&point.id).await?.expect("point should exist");
        assert_eq!(stored, point);

        let associations = sqlx::query_as::<_, PointItem>(
            "SELECT point_id, item_id FROM points_items WHERE point_id = ? ORDER BY item_id",
        )
        .bind(point.id)
        .fetch_all(&pool)
        .await?;
        assert_eq!(
            associations,
            vec![
                PointItem { point_id: point.id, item_id: 1 },
                PointItem { point_id: point.id, item_id: 3 },
            ]
        );

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_point_collapses_duplicate_items(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool.clone());

        let point = repo.create(&new_point("Recife", "PE", vec![5, 2, 5, 2, 2])).await?;

        let item_ids = sqlx::query_scalar::<_, i64>(
            "SELECT item_id FROM points_items WHERE point_id = ? ORDER BY rowid",
        )
        .bind(point.id)
        .fetch_all(&pool)
        .await?;
        assert_eq!(item_ids, vec![5, 2]);

        Ok(())
    }

    /// Un item inesistente viola la foreign key: il punto non deve restare nel database
    #[sqlx::test]
    async fn test_create_point_rolls_back_on_invalid_item(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool.clone());

        let result = repo.create(&new_point("Recife", "PE", vec![1, 999])).await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(count_points(&pool).await?, 0);

        let visible = repo.find_by_filter(&filter("Recife", "PE", vec![1])).await?;
        assert!(visible.is_empty());

        Ok(())
    }

    /*------------------------------------------- */
    /* Unit tests: read / find_by_filter          */
    /*------------------------------------------- */

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("points")))]
    async fn test_read_missing_point(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool);

        assert!(repo.read(&999).await?.is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("points")))]
    async fn test_find_by_filter_has_no_duplicates(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool);

        // point 1 accetta sia l'item 1 che il 2
        let points = repo.find_by_filter(&filter("Recife", "PE", vec![1, 2])).await?;
        let ids: Vec<i64> = points.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("points")))]
    async fn test_find_by_filter_matches_city_and_uf(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool);

        let recife = repo.find_by_filter(&filter("Recife", "PE", vec![1, 3])).await?;
        let ids: Vec<i64> = recife.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let olinda = repo.find_by_filter(&filter("Olinda", "PE", vec![1])).await?;
        assert_eq!(olinda.len(), 1);
        assert_eq!(olinda[0].name, "Papelaria Central");

        // uf diversa, stessa città
        let wrong_uf = repo.find_by_filter(&filter("Recife", "SP", vec![1])).await?;
        assert!(wrong_uf.is_empty());

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("points")))]
    async fn test_find_by_filter_is_case_sensitive(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool);

        let points = repo.find_by_filter(&filter("recife", "pe", vec![1])).await?;
        assert!(points.is_empty());

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("points")))]
    async fn test_find_by_filter_empty_items(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PointRepository::new(pool);

        let points = repo.find_by_filter(&filter("Recife", "PE", vec![])).await?;
        assert!(points.is_empty());

        Ok(())
    }
}
