//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene i repository e la configurazione necessaria agli handler HTTP.
//! Il pool di connessioni viene creato dal chiamante e passato esplicitamente,
//! così i test possono usare un database isolato.

use crate::repositories::{ItemRepository, PointRepository};
use sqlx::SqlitePool;

/// Stato condiviso tra tutte le route
pub struct AppState {
    /// Repository per il catalogo degli item
    pub item: ItemRepository,

    /// Repository per i punti di raccolta
    pub point: PointRepository,

    /// Base URL pubblico, usato per costruire gli `image_url`
    pub public_url: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    /// * `public_url` - Base URL con cui il server è raggiungibile dai client
    pub fn new(pool: SqlitePool, public_url: String) -> Self {
        Self {
            item: ItemRepository::new(pool.clone()),
            point: PointRepository::new(pool),
            public_url,
        }
    }
}
