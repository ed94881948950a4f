//! Auth-related types shared between backend and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::role::Role;
use crate::models::usuario::UsuarioDetalle;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (`POST /api/auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub contrasena: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: SessionUser,
}

/// The user record carried in a session.
///
/// This is the compact shape the login endpoint returns and the one the
/// session store persists. A role outside the closed [`Role`] set fails
/// deserialization, so a tampered or stale record reads as no user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub usuario: String,
    pub rol: Role,
    pub rol_id: i64,
}

/// Register request (`POST /api/auth/register`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub usuario: String,
    pub contrasena: String,
    pub correo: Option<String>,
    pub rol_id: i64,
    pub empleado_id: Option<i64>,
}

/// Register response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub mensaje: String,
    pub usuario: UsuarioDetalle,
}

/// Plain `{"mensaje": ...}` acknowledgement (logout, deletes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mensaje {
    pub mensaje: String,
}
