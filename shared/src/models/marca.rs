//! Marca Model

use serde::{Deserialize, Serialize};

/// Motorcycle brand entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marca {
    pub id: i64,
    pub nombre: String,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
}

/// Create brand payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarcaCreate {
    pub nombre: String,
}

/// Update brand payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarcaUpdate {
    pub nombre: Option<String>,
}
