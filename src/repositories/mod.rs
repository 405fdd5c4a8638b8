//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità
//! e riceve il pool di connessioni dal costruttore (nessun handle globale).
//!
//! Le query usano le funzioni runtime di sqlx (`query`, `query_as`, `QueryBuilder`)
//! con entity che derivano `FromRow`: la build non richiede un database attivo.
//! Metodi disponibili sulle query:
//!   .execute(...)        -> INSERT/UPDATE/DELETE senza RETURNING
//!   .fetch_optional(...) -> zero o una riga
//!   .fetch_one(...)      -> esattamente una riga (errore se vuoto)
//!   .fetch_all(...)      -> Vec di righe

pub mod item;
pub mod point;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Read};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use item::ItemRepository;
pub use point::PointRepository;
