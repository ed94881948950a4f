//! User administration endpoints

use shared::models::role::{Rol, RolCreate};
use shared::models::usuario::{Mecanico, Usuario, UsuarioCreado, UsuarioCreate};
use shared::client::Mensaje;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// List users (gerente only)
    pub async fn list_usuarios(&self) -> ClientResult<Vec<Usuario>> {
        self.get("/api/usuarios").await
    }

    /// Create a user (gerente only). The backend creates the employee
    /// row itself when `nombre_empleado` is given instead of an id.
    pub async fn create_usuario(&self, usuario: &UsuarioCreate) -> ClientResult<UsuarioCreado> {
        self.post("/api/usuarios", usuario).await
    }

    /// Role catalog
    pub async fn list_roles(&self) -> ClientResult<Vec<Rol>> {
        self.get("/api/roles").await
    }

    pub async fn create_rol(&self, rol: &RolCreate) -> ClientResult<Rol> {
        self.post("/api/roles", rol).await
    }

    pub async fn delete_rol(&self, id: i64) -> ClientResult<Mensaje> {
        self.delete(&format!("/api/roles/{id}")).await
    }

    /// Active employees holding the mechanic role
    pub async fn list_mecanicos(&self) -> ClientResult<Vec<Mecanico>> {
        self.get("/api/mecanicos").await
    }
}
