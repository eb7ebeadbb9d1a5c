//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects,
//! role-based landing routes and service-status gating of the patient dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use schema::{Role, ServiceStatus, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(User::role)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Route a freshly authenticated user lands on.
    pub fn landing_route(&self) -> &'static str {
        self.role().map_or("/login", landing_route)
    }

    pub fn can_enter(&self, area: Area) -> bool {
        self.role().is_some_and(|role| can_enter(role, area))
    }
}

/// Guarded sections of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    /// Patient dashboard and report pages.
    Patient,
    /// Stats, reports and variant database.
    BackOffice,
    /// Analyst permission management.
    AdminOnly,
    Reception,
}

pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin | Role::Analyst => "/admin",
        Role::Reception => "/reception",
        Role::Patient => "/dashboard",
    }
}

pub fn can_enter(role: Role, area: Area) -> bool {
    match area {
        Area::Patient => role == Role::Patient,
        Area::BackOffice => matches!(role, Role::Admin | Role::Analyst),
        Area::AdminOnly => role == Role::Admin,
        Area::Reception => matches!(role, Role::Admin | Role::Reception),
    }
}

/// Which patient dashboard screen the service status allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceGate {
    /// No kit purchased: show the offer screen.
    NoPurchased,
    /// Sample in progress: show the waiting screen.
    Pending,
    /// Report available: show the full dashboard.
    Ready,
}

impl ServiceGate {
    pub fn for_status(status: ServiceStatus) -> Self {
        match status.effective() {
            ServiceStatus::Completed => Self::Ready,
            ServiceStatus::Pending => Self::Pending,
            _ => Self::NoPurchased,
        }
    }

    pub fn for_user(user: &User) -> Self {
        Self::for_status(user.service_status)
    }
}
