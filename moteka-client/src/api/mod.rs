//! Typed endpoint wrappers
//!
//! One module per backend resource, mirroring the REST surface the
//! pages consume. All calls are thin and fire-once; the transport in
//! [`crate::http`] supplies the bearer token.

mod auth;
mod clientes;
mod dashboard;
mod herramientas;
mod marcas;
mod modelos;
mod motos;
mod ordenes;
mod reportes;
mod usuarios;
