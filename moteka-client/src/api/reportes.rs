//! Technical work report endpoints

use serde::Serialize;
use shared::models::reporte::{ReporteGuardado, ReporteTrabajo, ReporteTrabajoCreate};

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Serialize)]
struct OrdenQuery {
    orden_id: i64,
}

#[derive(Serialize)]
struct ExportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    mecanico_id: Option<i64>,
}

impl ApiClient {
    /// Reports for one work order. Mechanics only see their own; the
    /// backend filters from the token.
    pub async fn list_reportes_trabajo(&self, orden_id: i64) -> ClientResult<Vec<ReporteTrabajo>> {
        self.get_query("/api/reportes_trabajo", &OrdenQuery { orden_id }).await
    }

    pub async fn create_reporte_trabajo(
        &self,
        reporte: &ReporteTrabajoCreate,
    ) -> ClientResult<ReporteGuardado> {
        self.post("/api/reportes_trabajo", reporte).await
    }

    /// CSV export of technical reports, optionally narrowed to one
    /// mechanic (the backend narrows further for mechanic callers)
    pub async fn export_reportes_trabajo(&self, mecanico_id: Option<i64>) -> ClientResult<Vec<u8>> {
        self.get_bytes("/api/reportes_trabajo/export", &ExportQuery { mecanico_id })
            .await
    }
}
