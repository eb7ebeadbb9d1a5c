//! Analyst access management state (admin only).

#[cfg(test)]
#[path = "analysts_test.rs"]
mod analysts_test;

use schema::User;

use super::request::Remote;

#[derive(Clone, Debug, Default)]
pub struct AnalystsState {
    pub remote: Remote<Vec<User>>,
    pub search: String,
    pub saving: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Name shown in the list: `first last` when both exist, otherwise the
/// first non-empty identifier.
pub fn list_name(user: &User) -> String {
    if !user.first_name.trim().is_empty() && !user.last_name.trim().is_empty() {
        format!("{} {}", user.first_name.trim(), user.last_name.trim())
    } else {
        user.display_name().to_owned()
    }
}

pub fn grant_message(granted: bool) -> String {
    format!("Permiso de Analista {} correctamente.", if granted { "asignado" } else { "revocado" })
}

impl AnalystsState {
    pub fn users(&self) -> &[User] {
        self.remote.data.as_deref().unwrap_or_default()
    }

    pub fn analyst_count(&self) -> usize {
        self.users().iter().filter(|u| u.is_analyst_user()).count()
    }

    /// Everyone but the signed-in admin, filtered by name, email or username.
    pub fn visible(&self, self_id: Option<i64>) -> Vec<User> {
        let needle = self.search.trim().to_lowercase();
        self.users()
            .iter()
            .filter(|u| Some(u.id) != self_id)
            .filter(|u| {
                needle.is_empty()
                    || [list_name(u), u.email.clone(), u.username.clone()]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    pub fn begin_toggle(&mut self) {
        self.saving = true;
        self.error = None;
        self.message = None;
    }

    /// Apply a grant/revoke result to the matching row.
    pub fn apply_toggle(&mut self, user_id: i64, granted: bool) {
        self.saving = false;
        if let Some(users) = self.remote.data.as_mut() {
            if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
                user.apply_analyst(granted);
            }
        }
        self.message = Some(grant_message(granted));
    }

    pub fn fail(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }
}
