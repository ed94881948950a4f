//! Route table and navigation
//!
//! The declarative route surface of the application: URL path, screen,
//! guard. [`Router::resolve`] runs the guard for a path and yields
//! where the navigation actually lands. Rendering is out of scope; a
//! screen is just an identifier.

mod guards;

pub use guards::Guard;

use guards::GuardVerdict;
use shared::models::role::Role::{self, Encargado, Gerente, Mecanico};

use crate::session::SessionService;

/// Screens the application can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    Marcas,
    Modelos,
    Clientes,
    Motos,
    Ordenes,
    Usuarios,
    Herramientas,
}

/// Where a navigation ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Screen),
    Redirect(&'static str),
    NotFound,
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";

/// A single route table entry
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub screen: Screen,
    pub guard: Guard,
}

/// Roles allowed into the catalog/admin screens
const CATALOGO: &[Role] = &[Gerente, Encargado];
/// Roles allowed onto the workshop floor screens
const TALLER: &[Role] = &[Gerente, Encargado, Mecanico];

/// The static route surface
pub const ROUTES: &[Route] = &[
    Route { path: LOGIN_PATH, screen: Screen::Login, guard: Guard::Public },
    Route { path: "/", screen: Screen::Home, guard: Guard::RequireAuth },
    Route { path: HOME_PATH, screen: Screen::Home, guard: Guard::RequireAuth },
    Route { path: "/marcas", screen: Screen::Marcas, guard: Guard::RequireRole(CATALOGO) },
    Route { path: "/modelos", screen: Screen::Modelos, guard: Guard::RequireRole(CATALOGO) },
    Route { path: "/clientes", screen: Screen::Clientes, guard: Guard::RequireRole(CATALOGO) },
    Route { path: "/motos", screen: Screen::Motos, guard: Guard::RequireRole(CATALOGO) },
    Route { path: "/usuarios", screen: Screen::Usuarios, guard: Guard::RequireRole(CATALOGO) },
    Route { path: "/ordenes", screen: Screen::Ordenes, guard: Guard::RequireRole(TALLER) },
    Route { path: "/herramientas", screen: Screen::Herramientas, guard: Guard::RequireRole(TALLER) },
];

/// Path-to-screen resolver gated by the guards
#[derive(Debug)]
pub struct Router<'a> {
    session: &'a SessionService,
}

impl<'a> Router<'a> {
    pub fn new(session: &'a SessionService) -> Self {
        Self { session }
    }

    /// Resolve a navigation against the wall clock
    pub fn resolve(&self, path: &str) -> Navigation {
        self.resolve_at(path, chrono::Utc::now().timestamp())
    }

    /// Resolve a navigation at an explicit `now` (Unix seconds)
    pub fn resolve_at(&self, path: &str, now: i64) -> Navigation {
        let Some(route) = ROUTES.iter().find(|r| r.path == path) else {
            return Navigation::NotFound;
        };
        match route.guard.check(self.session, now) {
            GuardVerdict::Allow => Navigation::Render(route.screen),
            GuardVerdict::ToLogin => Navigation::Redirect(LOGIN_PATH),
            GuardVerdict::ToHome => Navigation::Redirect(HOME_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use shared::SessionUser;

    const NOW: i64 = 1_700_000_000;

    fn make_token(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#).as_bytes());
        format!("{header}.{body}.sig")
    }

    fn service_with(rol: Option<Role>, exp: i64) -> (tempfile::TempDir, SessionService) {
        let dir = tempfile::tempdir().unwrap();
        let service = SessionService::new(SessionStore::new(dir.path()));
        if let Some(rol) = rol {
            let user = SessionUser {
                id: 1,
                usuario: "ana".to_string(),
                rol,
                rol_id: 1,
            };
            service.set_session(&make_token(exp), user, false).unwrap();
        }
        (dir, service)
    }

    #[test]
    fn no_session_redirects_every_guarded_route_to_login() {
        let (_dir, service) = service_with(None, 0);
        let router = Router::new(&service);

        for route in ROUTES {
            if matches!(route.guard, Guard::Public) {
                continue;
            }
            assert_eq!(
                router.resolve_at(route.path, NOW),
                Navigation::Redirect(LOGIN_PATH),
                "path {}",
                route.path
            );
        }
    }

    #[test]
    fn login_route_is_public() {
        let (_dir, service) = service_with(None, 0);
        let router = Router::new(&service);
        assert_eq!(router.resolve_at("/login", NOW), Navigation::Render(Screen::Login));
    }

    #[test]
    fn mecanico_is_redirected_home_from_catalog_routes() {
        let (_dir, service) = service_with(Some(Role::Mecanico), NOW + 3600);
        let router = Router::new(&service);

        assert_eq!(router.resolve_at("/marcas", NOW), Navigation::Redirect(HOME_PATH));
        assert_eq!(router.resolve_at("/usuarios", NOW), Navigation::Redirect(HOME_PATH));
        // But the floor routes let the mechanic through.
        assert_eq!(router.resolve_at("/ordenes", NOW), Navigation::Render(Screen::Ordenes));
        assert_eq!(
            router.resolve_at("/herramientas", NOW),
            Navigation::Render(Screen::Herramientas)
        );
    }

    #[test]
    fn gerente_reaches_every_screen() {
        let (_dir, service) = service_with(Some(Role::Gerente), NOW + 3600);
        let router = Router::new(&service);

        for route in ROUTES {
            assert_eq!(
                router.resolve_at(route.path, NOW),
                Navigation::Render(route.screen),
                "path {}",
                route.path
            );
        }
    }

    #[test]
    fn home_needs_only_authentication() {
        let (_dir, service) = service_with(Some(Role::Mecanico), NOW + 3600);
        let router = Router::new(&service);
        assert_eq!(router.resolve_at("/", NOW), Navigation::Render(Screen::Home));
        assert_eq!(router.resolve_at("/home", NOW), Navigation::Render(Screen::Home));
    }

    #[test]
    fn expired_session_redirects_to_login_and_clears_both_scopes() {
        // Expired one second ago.
        let (_dir, service) = service_with(Some(Role::Gerente), NOW - 1);
        let router = Router::new(&service);

        assert_eq!(router.resolve_at("/home", NOW), Navigation::Redirect(LOGIN_PATH));
        // The guard invalidated the session as a side effect.
        assert_eq!(service.token(), None);
        assert_eq!(service.validity_at(NOW), crate::session::SessionValidity::Missing);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let (_dir, service) = service_with(Some(Role::Gerente), NOW + 3600);
        let router = Router::new(&service);
        assert_eq!(router.resolve_at("/facturas", NOW), Navigation::NotFound);
    }
}
