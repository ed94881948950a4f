//! Data models
//!
//! Shared between the Moteka backend (via API) and the client.
//! All IDs are `i64`; timestamps are carried as the ISO-8601 strings
//! the backend emits.

pub mod cliente;
pub mod dashboard;
pub mod herramienta;
pub mod marca;
pub mod modelo;
pub mod motocicleta;
pub mod orden;
pub mod reporte;
pub mod role;
pub mod usuario;

// Re-exports
pub use cliente::*;
pub use dashboard::*;
pub use herramienta::*;
pub use marca::*;
pub use modelo::*;
pub use motocicleta::*;
pub use orden::*;
pub use reporte::*;
pub use role::*;
pub use usuario::*;
