//! Modelo Model

use serde::{Deserialize, Serialize};

use super::marca::Marca;

/// Motorcycle model entity (unique per brand + name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modelo {
    pub id: i64,
    pub nombre: String,
    pub marca_id: i64,
    #[serde(default)]
    pub marca: Option<Marca>,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
}

/// Create model payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeloCreate {
    pub nombre: String,
    pub marca_id: i64,
}

/// Update model payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModeloUpdate {
    pub nombre: Option<String>,
    pub marca_id: Option<i64>,
}
