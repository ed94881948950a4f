//! OrdenTrabajo Model

use serde::{Deserialize, Serialize};

use super::cliente::Cliente;
use super::motocicleta::Motocicleta;

/// Work order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoOrden {
    EnEspera,
    EnReparacion,
    Finalizada,
    Cancelada,
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoPago {
    Efectivo,
    Tarjeta,
    Transferencia,
}

/// Work order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdenTrabajo {
    pub id: i64,
    pub cliente_id: i64,
    pub motocicleta_id: i64,
    pub mecanico_asignado_id: Option<i64>,
    pub estado: EstadoOrden,
    pub fecha_ingreso: Option<String>,
    pub fecha_salida: Option<String>,
    pub observaciones: Option<String>,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
    #[serde(default)]
    pub mecanico_asignado_nombre: Option<String>,
    #[serde(default)]
    pub cliente: Option<Cliente>,
    #[serde(default)]
    pub motocicleta: Option<Motocicleta>,
}

/// Work order state-change history entry (`GET /api/ordenes/:id/historial`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorialEstado {
    pub id: i64,
    pub orden_id: i64,
    pub estado: EstadoOrden,
    pub notas: Option<String>,
    pub creado_en: Option<String>,
}

/// Payment registered against a work order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pago {
    pub id: i64,
    pub orden_id: i64,
    pub tipo: TipoPago,
    pub monto: f64,
    pub pagado_en: Option<String>,
}

/// Create work order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdenCreate {
    pub cliente_id: i64,
    pub motocicleta_id: i64,
    pub observaciones: Option<String>,
    pub mecanico_id: Option<i64>,
}

/// State-change payload (`PATCH /api/ordenes/:id/estado`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CambioEstado {
    pub estado: EstadoOrden,
    pub notas: Option<String>,
}

/// Query filters for listing work orders (`GET /api/ordenes`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrdenFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motocicleta_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mecanico_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoOrden>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desde: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hasta: Option<String>,
}
