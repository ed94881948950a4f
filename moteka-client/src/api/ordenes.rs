//! Work order endpoints

use shared::models::dashboard::DashboardHoy;
use shared::models::orden::{
    CambioEstado, HistorialEstado, OrdenCreate, OrdenFilter, OrdenTrabajo,
};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// List work orders. Mechanics only receive their own assignments;
    /// the backend enforces that from the token.
    pub async fn list_ordenes(&self, filter: &OrdenFilter) -> ClientResult<Vec<OrdenTrabajo>> {
        self.get_query("/api/ordenes", filter).await
    }

    pub async fn create_orden(&self, orden: &OrdenCreate) -> ClientResult<OrdenTrabajo> {
        self.post("/api/ordenes", orden).await
    }

    /// Change a work order's state.
    ///
    /// Role rules live server-side: a mechanic may only touch assigned
    /// orders and may not cancel.
    pub async fn cambiar_estado_orden(
        &self,
        id: i64,
        cambio: &CambioEstado,
    ) -> ClientResult<OrdenTrabajo> {
        self.patch(&format!("/api/ordenes/{id}/estado"), cambio).await
    }

    /// State-change history, oldest first
    pub async fn historial_orden(&self, id: i64) -> ClientResult<Vec<HistorialEstado>> {
        self.get(&format!("/api/ordenes/{id}/historial")).await
    }

    /// Today's counts and active orders
    pub async fn dashboard_hoy(&self) -> ClientResult<DashboardHoy> {
        self.get("/api/ordenes/dashboard_hoy").await
    }
}
