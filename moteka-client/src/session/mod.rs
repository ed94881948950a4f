//! Session and authorization layer
//!
//! A session is a bearer token paired with the user it belongs to,
//! held in one of two storage scopes: durable (a JSON file, survives
//! restarts) or tab (in-memory, dies with the process). Freshness is
//! judged from the token's `exp` claim alone; the client never
//! verifies signatures.

mod service;
mod store;
mod token;

pub use service::SessionService;
pub use store::{SessionError, SessionStore, StoredSession};
pub use token::{SessionValidity, is_token_expired, token_expires_at};
