//! Motorcycle endpoints
//!
//! Note the wire prefix is `/api/motocicletas` even though the page
//! route is `/motos`.

use shared::client::Mensaje;
use shared::models::motocicleta::{MotoFilter, Motocicleta, MotocicletaCreate, MotocicletaUpdate};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// List motorcycles, relations included
    pub async fn list_motocicletas(&self, filter: &MotoFilter) -> ClientResult<Vec<Motocicleta>> {
        self.get_query("/api/motocicletas", filter).await
    }

    pub async fn create_motocicleta(&self, moto: &MotocicletaCreate) -> ClientResult<Motocicleta> {
        self.post("/api/motocicletas", moto).await
    }

    /// The backend rejects changing the owning customer here
    pub async fn update_motocicleta(
        &self,
        id: i64,
        moto: &MotocicletaUpdate,
    ) -> ClientResult<Motocicleta> {
        self.put(&format!("/api/motocicletas/{id}"), moto).await
    }

    /// Fails with a conflict when the motorcycle has work orders
    pub async fn delete_motocicleta(&self, id: i64) -> ClientResult<Mensaje> {
        self.delete(&format!("/api/motocicletas/{id}")).await
    }
}
