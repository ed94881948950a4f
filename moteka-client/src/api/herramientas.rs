//! Tool inventory endpoints

use shared::client::Mensaje;
use shared::models::herramienta::{Herramienta, HerramientaCreate, HerramientaUpdate};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_herramientas(&self) -> ClientResult<Vec<Herramienta>> {
        self.get("/api/herramientas").await
    }

    pub async fn create_herramienta(&self, herramienta: &HerramientaCreate) -> ClientResult<Herramienta> {
        self.post("/api/herramientas", herramienta).await
    }

    pub async fn update_herramienta(
        &self,
        id: i64,
        herramienta: &HerramientaUpdate,
    ) -> ClientResult<Herramienta> {
        self.put(&format!("/api/herramientas/{id}"), herramienta).await
    }

    pub async fn delete_herramienta(&self, id: i64) -> ClientResult<Mensaje> {
        self.delete(&format!("/api/herramientas/{id}")).await
    }
}
