//! Customer endpoints

use shared::client::Mensaje;
use shared::models::cliente::{Cliente, ClienteCreate, ClienteUpdate};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_clientes(&self) -> ClientResult<Vec<Cliente>> {
        self.get("/api/clientes").await
    }

    pub async fn create_cliente(&self, cliente: &ClienteCreate) -> ClientResult<Cliente> {
        self.post("/api/clientes", cliente).await
    }

    pub async fn update_cliente(&self, id: i64, cliente: &ClienteUpdate) -> ClientResult<Cliente> {
        self.put(&format!("/api/clientes/{id}"), cliente).await
    }

    /// Fails with a conflict when the customer still owns motorcycles
    pub async fn delete_cliente(&self, id: i64) -> ClientResult<Mensaje> {
        self.delete(&format!("/api/clientes/{id}")).await
    }
}
