//! Usuario Model

use serde::{Deserialize, Serialize};

use super::role::{Rol, Role};

/// Workshop employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empleado {
    pub id: i64,
    pub nombre: String,
    pub activo: bool,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
}

/// User row as the admin listing returns it (role flattened to its name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub usuario: String,
    pub correo: Option<String>,
    pub rol: Option<Role>,
    #[serde(default)]
    pub empleado: Option<Empleado>,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
}

/// User detail as `/api/auth/me` returns it (role embedded as catalog entry)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioDetalle {
    pub id: i64,
    pub usuario: String,
    pub correo: Option<String>,
    pub rol: Option<Rol>,
    #[serde(default)]
    pub empleado: Option<Empleado>,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
}

/// Compact mechanic row (`GET /api/mecanicos`), used when assigning orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mecanico {
    pub id: i64,
    pub nombre: String,
}

/// Create user payload (`POST /api/usuarios`)
///
/// `nombre_empleado` is required by the backend when no `empleado_id` is
/// given; the server creates the employee row itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioCreate {
    pub usuario: String,
    pub contrasena: String,
    pub rol: Role,
    pub correo: Option<String>,
    pub nombre_empleado: Option<String>,
    pub empleado_id: Option<i64>,
}

/// Create user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioCreado {
    pub mensaje: String,
    pub usuario: Usuario,
}
