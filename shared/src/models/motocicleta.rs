//! Motocicleta Model

use serde::{Deserialize, Serialize};

use super::cliente::Cliente;
use super::marca::Marca;
use super::modelo::Modelo;

/// Motorcycle entity
///
/// `cliente`/`modelo`/`marca` are embedded when the API was asked to
/// include relations; list endpoints populate them, payloads omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motocicleta {
    pub id: i64,
    pub cliente_id: i64,
    pub modelo_id: Option<i64>,
    pub placa: Option<String>,
    pub vin: Option<String>,
    pub anio: Option<i32>,
    pub cilindraje_cc: Option<i32>,
    pub color: Option<String>,
    pub kilometraje_km: Option<i64>,
    pub ultima_revision: Option<String>,
    pub notas: Option<String>,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
    #[serde(default)]
    pub cliente: Option<Cliente>,
    #[serde(default)]
    pub modelo: Option<Modelo>,
    #[serde(default)]
    pub marca: Option<Marca>,
}

/// Create motorcycle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotocicletaCreate {
    pub cliente_id: i64,
    pub modelo_id: Option<i64>,
    pub placa: Option<String>,
    pub vin: Option<String>,
    pub anio: Option<i32>,
    pub cilindraje_cc: Option<i32>,
    pub color: Option<String>,
    pub kilometraje_km: Option<i64>,
    pub notas: Option<String>,
}

/// Query filters for listing motorcycles (`GET /api/motocicletas`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct MotoFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    /// Free-text search over plate/VIN/customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Update motorcycle payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotocicletaUpdate {
    pub cliente_id: Option<i64>,
    pub modelo_id: Option<i64>,
    pub placa: Option<String>,
    pub vin: Option<String>,
    pub anio: Option<i32>,
    pub cilindraje_cc: Option<i32>,
    pub color: Option<String>,
    pub kilometraje_km: Option<i64>,
    pub ultima_revision: Option<String>,
    pub notas: Option<String>,
}
