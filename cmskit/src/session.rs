//! The persisted session and the header gate over it.
//!
//! The original storage keys (`token`, `userRole`) are kept, but every read
//! and write goes through [`SessionStore`] so the role/token invariant is
//! enforceable in one place: a non-guest role implies a non-null token.

use std::cell::RefCell;
use std::collections::HashMap;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "userRole";

/// Who the current user is, as persisted in browser storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Doctor,
    /// Anonymous visitor browsing as a patient.
    Patient,
    /// Authenticated patient.
    LoggedPatient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
            Role::LoggedPatient => "loggedPatient",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "patient" => Some(Role::Patient),
            "loggedPatient" => Some(Role::LoggedPatient),
            _ => None,
        }
    }

    /// Roles that must be backed by a bearer token.
    pub fn requires_token(&self) -> bool {
        !matches!(self, Role::Patient)
    }

    /// Dashboard route the role lands on after login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Doctor => "/doctor/dashboard",
            Role::Patient | Role::LoggedPatient => "/patient/dashboard",
        }
    }
}

/// Snapshot of the persisted session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// True when a role that needs credentials has none.
    pub fn is_inconsistent(&self) -> bool {
        matches!(self.role, Some(role) if role.requires_token()) && self.token.is_none()
    }
}

/// Key/value persistence for the session. The browser app backs this with
/// local storage; tests use [`MemoryStorage`].
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

/// The single typed accessor over the persisted session.
#[derive(Debug, Clone, Copy)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> Session {
        Session {
            token: self.backend.get(TOKEN_KEY),
            role: self.backend.get(ROLE_KEY).as_deref().and_then(Role::parse),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    pub fn role(&self) -> Option<Role> {
        self.backend.get(ROLE_KEY).as_deref().and_then(Role::parse)
    }

    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    pub fn select_role(&self, role: Role) {
        self.backend.set(ROLE_KEY, role.as_str());
    }

    /// Full logout: drop both keys.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(ROLE_KEY);
    }

    /// Drop only the role, used when forcing re-login on a broken session.
    pub fn clear_role(&self) {
        self.backend.remove(ROLE_KEY);
    }

    /// Patient logout keeps the base role so login/sign-up show again.
    pub fn logout_patient(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.set(ROLE_KEY, Role::Patient.as_str());
    }
}

/// What the header should do for the current location and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The site root always starts anonymous: wipe the session.
    ClearAll,
    /// A privileged role with no token: clear the role, alert, go to root.
    ForceLogout,
    /// Render the nav variant for a consistent session.
    Render(NavVariant),
}

/// The four disjoint navigation variants the header can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    Admin,
    Doctor,
    LoggedPatient,
    Anonymous,
}

/// Root pages: "/", "" and the static index page.
pub fn is_root_path(path: &str) -> bool {
    path == "/" || path.is_empty() || path.ends_with("/index.html")
}

pub fn gate(at_root: bool, session: &Session) -> GateDecision {
    if at_root {
        return GateDecision::ClearAll;
    }
    if session.is_inconsistent() {
        return GateDecision::ForceLogout;
    }

    let variant = match session.role {
        Some(Role::Admin) => NavVariant::Admin,
        Some(Role::Doctor) => NavVariant::Doctor,
        Some(Role::LoggedPatient) => NavVariant::LoggedPatient,
        Some(Role::Patient) | None => NavVariant::Anonymous,
    };
    GateDecision::Render(variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: Option<&str>, role: Option<Role>) -> Session {
        Session {
            token: token.map(str::to_string),
            role,
        }
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Doctor, Role::Patient, Role::LoggedPatient] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn test_is_root_path() {
        assert!(is_root_path("/"));
        assert!(is_root_path(""));
        assert!(is_root_path("/pages/index.html"));
        assert!(!is_root_path("/admin/dashboard"));
    }

    #[test]
    fn test_gate_at_root_always_clears() {
        // Regardless of what was stored before.
        let stale = session(Some("tok"), Some(Role::Admin));
        assert_eq!(gate(true, &stale), GateDecision::ClearAll);
        assert_eq!(gate(true, &Session::default()), GateDecision::ClearAll);
    }

    #[test]
    fn test_gate_role_without_token_forces_logout() {
        for role in [Role::Admin, Role::Doctor, Role::LoggedPatient] {
            assert_eq!(
                gate(false, &session(None, Some(role))),
                GateDecision::ForceLogout
            );
        }
    }

    #[test]
    fn test_gate_variants() {
        assert_eq!(
            gate(false, &session(Some("tok"), Some(Role::Admin))),
            GateDecision::Render(NavVariant::Admin)
        );
        assert_eq!(
            gate(false, &session(Some("tok"), Some(Role::Doctor))),
            GateDecision::Render(NavVariant::Doctor)
        );
        assert_eq!(
            gate(false, &session(Some("tok"), Some(Role::LoggedPatient))),
            GateDecision::Render(NavVariant::LoggedPatient)
        );
        // An anonymous patient needs no token.
        assert_eq!(
            gate(false, &session(None, Some(Role::Patient))),
            GateDecision::Render(NavVariant::Anonymous)
        );
        assert_eq!(
            gate(false, &Session::default()),
            GateDecision::Render(NavVariant::Anonymous)
        );
    }

    #[test]
    fn test_store_round_trip() {
        let store = SessionStore::new(MemoryStorage::default());
        assert_eq!(store.load(), Session::default());

        store.set_token("tok-1");
        store.select_role(Role::Doctor);
        assert_eq!(store.load(), session(Some("tok-1"), Some(Role::Doctor)));

        store.clear();
        assert_eq!(store.load(), Session::default());
    }

    #[test]
    fn test_logout_patient_keeps_base_role() {
        let store = SessionStore::new(MemoryStorage::default());
        store.set_token("tok-1");
        store.select_role(Role::LoggedPatient);

        store.logout_patient();
        let after = store.load();
        assert!(after.token.is_none());
        assert_eq!(after.role, Some(Role::Patient));
    }

    #[test]
    fn test_unknown_stored_role_reads_as_none() {
        let storage = MemoryStorage::default();
        storage.set(ROLE_KEY, "bogus");
        let store = SessionStore::new(storage);
        assert_eq!(store.role(), None);
        assert_eq!(store.load().role, None);
    }
}
