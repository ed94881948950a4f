//! Moteka Client - session, authorization and API access for the Moteka
//! workshop management backend
//!
//! The application core, kept deliberately small: a two-scope session
//! store, a token freshness check, a role predicate and the guarded
//! route table, plus a thin bearer-token HTTP client with typed
//! endpoint wrappers.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod router;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use router::{Navigation, Router, Screen};
pub use session::{SessionService, SessionStore, SessionValidity};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, SessionUser};
pub use shared::models::role::Role;
