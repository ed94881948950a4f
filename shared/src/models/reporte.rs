//! ReporteTrabajo Model

use serde::{Deserialize, Serialize};

/// Technical work report attached to a work order.
///
/// The `*_nombre`/`moto_*` fields are a snapshot of the context at the
/// moment the report was written; they do not follow later edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporteTrabajo {
    pub id: i64,
    pub orden_id: i64,
    pub mecanico_id: i64,
    pub mecanico_nombre: Option<String>,
    pub descripcion: String,
    pub creado_en: Option<String>,
    pub cliente_nombre: Option<String>,
    pub moto_placa: Option<String>,
    pub moto_vin: Option<String>,
    pub modelo_nombre: Option<String>,
    pub marca_nombre: Option<String>,
}

/// Create report payload (`POST /api/reportes_trabajo`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporteTrabajoCreate {
    pub orden_id: i64,
    pub descripcion: String,
}

/// Create report response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporteGuardado {
    pub mensaje: String,
    pub reporte: ReporteTrabajo,
}
