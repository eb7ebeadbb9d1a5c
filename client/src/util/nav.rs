//! Sidebar navigation entries per area and role.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use schema::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

const fn item(path: &'static str, label: &'static str) -> NavItem {
    NavItem { path, label }
}

pub const PATIENT_NAV: [NavItem; 7] = [
    item("/dashboard", "Inicio"),
    item("/dashboard/ancestria", "Ancestría"),
    item("/dashboard/rasgos", "Rasgos"),
    item("/dashboard/farmacogenetica", "Farmacogenética"),
    item("/dashboard/biomarcadores", "Biomarcadores"),
    item("/dashboard/biometricas", "Biométricas"),
    item("/dashboard/enfermedades", "Enfermedades"),
];

const ADMIN_HOME: NavItem = item("/admin", "Inicio");
const REPORTS: NavItem = item("/admin/reports", "Administrar reportes genéticos");
const VARIANTS: NavItem = item("/admin/variants", "Ver variantes en base de datos");
const ANALYSTS: NavItem = item("/admin/analysts", "Acceso de analistas");
const RECEPTION: NavItem = item("/reception", "Recepción de muestras");

/// Back-office entries visible to `role`.
pub fn back_office_nav(role: Role) -> Vec<NavItem> {
    match role {
        Role::Admin => vec![ADMIN_HOME, REPORTS, VARIANTS, ANALYSTS, RECEPTION],
        Role::Analyst => vec![ADMIN_HOME, REPORTS, VARIANTS],
        Role::Reception => vec![RECEPTION],
        Role::Patient => Vec::new(),
    }
}

/// Exact match for section roots, prefix match below them.
pub fn is_active(item_path: &str, current: &str) -> bool {
    let current = current.trim_end_matches('/');
    if matches!(item_path, "/dashboard" | "/admin") {
        current == item_path
    } else {
        current == item_path || current.starts_with(&format!("{item_path}/"))
    }
}
