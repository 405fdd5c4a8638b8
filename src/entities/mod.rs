//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod item;
pub mod point;
pub mod point_item;

// Re-exports per facilitare l'import
pub use item::Item;
pub use point::Point;
pub use point_item::PointItem;
