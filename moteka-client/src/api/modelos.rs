//! Model endpoints

use shared::client::Mensaje;
use shared::models::modelo::{Modelo, ModeloCreate, ModeloUpdate};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_modelos(&self) -> ClientResult<Vec<Modelo>> {
        self.get("/api/modelos").await
    }

    pub async fn create_modelo(&self, modelo: &ModeloCreate) -> ClientResult<Modelo> {
        self.post("/api/modelos", modelo).await
    }

    pub async fn update_modelo(&self, id: i64, modelo: &ModeloUpdate) -> ClientResult<Modelo> {
        self.put(&format!("/api/modelos/{id}"), modelo).await
    }

    pub async fn delete_modelo(&self, id: i64) -> ClientResult<Mensaje> {
        self.delete(&format!("/api/modelos/{id}")).await
    }
}
