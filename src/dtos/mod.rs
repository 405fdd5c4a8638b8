//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod item;
pub mod point;
pub mod query;

pub use item::ItemDTO;
pub use point::{CreatePointDTO, PointDetailDTO};
pub use query::{PointFilter, PointsQuery};
