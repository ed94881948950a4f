//! Brand endpoints

use shared::client::Mensaje;
use shared::models::marca::{Marca, MarcaCreate, MarcaUpdate};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_marcas(&self) -> ClientResult<Vec<Marca>> {
        self.get("/api/marcas").await
    }

    pub async fn create_marca(&self, marca: &MarcaCreate) -> ClientResult<Marca> {
        self.post("/api/marcas", marca).await
    }

    pub async fn update_marca(&self, id: i64, marca: &MarcaUpdate) -> ClientResult<Marca> {
        self.put(&format!("/api/marcas/{id}"), marca).await
    }

    pub async fn delete_marca(&self, id: i64) -> ClientResult<Mensaje> {
        self.delete(&format!("/api/marcas/{id}")).await
    }
}
