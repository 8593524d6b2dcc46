use uuid::Uuid;

use crate::domain::session::SessionSnapshot;

/// Navigable portal routes
///
/// The actual path matching and nested layouts belong to the client-side
/// router; this enum is the canonical route table the guards and the
/// service layer agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    DashboardCapacitaciones,
    DashboardAnuncios,
    DashboardCertificados,
    DashboardUsuarios,
    UserDashboard,
    UserCapacitacion,
    UserCertificados,
    UserPerfil,
    Curso(Uuid),
}

/// Access level a route demands from the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword => "/reset-password".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::DashboardCapacitaciones => "/dashboard/capacitaciones".to_string(),
            Route::DashboardAnuncios => "/dashboard/anuncios".to_string(),
            Route::DashboardCertificados => "/dashboard/certificados".to_string(),
            Route::DashboardUsuarios => "/dashboard/usuarios".to_string(),
            Route::UserDashboard => "/user-dashboard".to_string(),
            Route::UserCapacitacion => "/user-dashboard/capacitacion".to_string(),
            Route::UserCertificados => "/user-dashboard/certificados".to_string(),
            Route::UserPerfil => "/user-dashboard/perfil".to_string(),
            Route::Curso(id) => format!("/user-dashboard/curso/{id}"),
        }
    }

    /// Resolve a path into a route, or `None` when nothing matches
    pub fn parse(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" | "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/forgot-password" => Some(Route::ForgotPassword),
            "/reset-password" => Some(Route::ResetPassword),
            "/dashboard" => Some(Route::Dashboard),
            "/dashboard/capacitaciones" => Some(Route::DashboardCapacitaciones),
            "/dashboard/anuncios" => Some(Route::DashboardAnuncios),
            "/dashboard/certificados" => Some(Route::DashboardCertificados),
            "/dashboard/usuarios" => Some(Route::DashboardUsuarios),
            "/user-dashboard" => Some(Route::UserDashboard),
            "/user-dashboard/capacitacion" => Some(Route::UserCapacitacion),
            "/user-dashboard/certificados" => Some(Route::UserCertificados),
            "/user-dashboard/perfil" => Some(Route::UserPerfil),
            other => {
                let id = other.strip_prefix("/user-dashboard/curso/")?;
                Uuid::parse_str(id).ok().map(Route::Curso)
            }
        }
    }

    fn access(&self) -> Access {
        match self {
            Route::Login | Route::Register | Route::ForgotPassword | Route::ResetPassword => {
                Access::Public
            }
            Route::Dashboard
            | Route::DashboardCapacitaciones
            | Route::DashboardAnuncios
            | Route::DashboardCertificados
            | Route::DashboardUsuarios => Access::Admin,
            Route::UserDashboard
            | Route::UserCapacitacion
            | Route::UserCertificados
            | Route::UserPerfil
            | Route::Curso(_) => Access::Authenticated,
        }
    }
}

/// Gate a route against the current session snapshot
///
/// Unauthenticated or wrong-role access to a protected route redirects
/// back to the login screen.
pub fn guard(route: &Route, session: Option<&SessionSnapshot>) -> GuardDecision {
    match route.access() {
        Access::Public => GuardDecision::Allow,
        Access::Authenticated => match session {
            Some(_) => GuardDecision::Allow,
            None => GuardDecision::RedirectToLogin,
        },
        Access::Admin => match session {
            Some(s) if s.is_admin() => GuardDecision::Allow,
            _ => GuardDecision::RedirectToLogin,
        },
    }
}
