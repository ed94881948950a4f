//! Shared wire types for the Moteka API
//!
//! Request/response types used in communication with the Moteka REST
//! backend. These mirror the JSON the backend emits field-for-field;
//! the client crate builds on top of them.

pub mod client;
pub mod models;

pub use client::{LoginRequest, LoginResponse, Mensaje, RegisterRequest, RegisterResponse, SessionUser};
pub use models::role::{InvalidRole, Rol, Role};
