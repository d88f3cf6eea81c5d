use contracts::domain::a004_audit_entry::AuditAction;
use contracts::system::navigation::{self, Navigation, Role};
use leptos::prelude::*;

use super::storage;
use crate::domain::a004_audit_entry::api as audit;

/// Currently selected role tag.
///
/// The raw tag is kept, not a parsed [`Role`]: an unrecognised value read
/// back from storage still counts as signed in and simply resolves to an
/// empty menu.
#[derive(Clone, Copy)]
pub struct RoleContext {
    tag: RwSignal<Option<String>>,
}

impl RoleContext {
    /// Restores the tag saved by the previous session.
    pub fn restore() -> Self {
        Self {
            tag: RwSignal::new(storage::get_role()),
        }
    }

    pub fn tag(&self) -> Option<String> {
        self.tag.get()
    }

    pub fn tag_untracked(&self) -> Option<String> {
        self.tag.get_untracked()
    }

    pub fn is_selected(&self) -> bool {
        self.tag.with(|t| t.is_some())
    }

    pub fn role(&self) -> Option<Role> {
        self.tag.with(|t| t.as_deref().and_then(Role::parse))
    }

    pub fn role_untracked(&self) -> Option<Role> {
        self.tag.with_untracked(|t| t.as_deref().and_then(Role::parse))
    }

    pub fn navigation(&self) -> Navigation {
        self.tag
            .with(|t| t.as_deref().map(navigation::resolve).unwrap_or_else(Navigation::empty))
    }

    /// Called by the role selection page only. Reports the login.
    pub fn select(&self, role: Role) {
        storage::save_role(role.as_str());
        leptos::logging::log!("Role selected: {}", role.as_str());
        audit::report_in_background(
            AuditAction::Login,
            format!("Signed in as {}", role.label()),
            Some(role.as_str().to_string()),
        );
        self.tag.set(Some(role.as_str().to_string()));
    }

    /// "Switch role": report the logout, forget the tag and go back to the
    /// selection page. The logout is sent with the tag being dropped.
    pub fn switch(&self) {
        let leaving = self.tag.get_untracked();
        if leaving.is_some() {
            audit::report_in_background(AuditAction::Logout, String::new(), leaving);
        }
        storage::clear_role();
        self.tag.set(None);
    }
}

/// Hook to access the role context
pub fn use_role() -> RoleContext {
    use_context::<RoleContext>().expect("RoleContext not found in component tree")
}
