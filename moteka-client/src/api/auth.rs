//! Auth endpoints

use shared::client::{LoginRequest, LoginResponse, Mensaje, RegisterRequest, RegisterResponse, SessionUser};
use shared::models::usuario::UsuarioDetalle;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// Log in and open a session.
    ///
    /// The only endpoint that writes the session store: on success the
    /// token and user land in the durable scope when `remember` is set,
    /// otherwise in the tab scope.
    pub async fn login(
        &self,
        usuario: &str,
        contrasena: &str,
        remember: bool,
    ) -> ClientResult<SessionUser> {
        let req = LoginRequest {
            usuario: usuario.to_string(),
            contrasena: contrasena.to_string(),
        };
        let resp: LoginResponse = self.post("/api/auth/login", &req).await?;
        self.session()
            .set_session(&resp.access_token, resp.user.clone(), remember)?;
        tracing::info!(usuario = %resp.user.usuario, "Logged in");
        Ok(resp.user)
    }

    /// Current user as the backend sees it
    pub async fn me(&self) -> ClientResult<UsuarioDetalle> {
        self.get("/api/auth/me").await
    }

    /// Log out: tell the backend, then drop the local session either way
    pub async fn logout(&self) -> ClientResult<()> {
        let result: ClientResult<Mensaje> = self.post_empty("/api/auth/logout").await;
        self.session().invalidate();
        tracing::info!("Logged out");
        result.map(|_| ())
    }

    /// Register a user (open for the first user, gerente-only afterwards)
    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<RegisterResponse> {
        self.post("/api/auth/register", req).await
    }
}
