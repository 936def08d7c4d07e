/// Session kinds the authenticator recognizes. Any other label may still
/// start a session, it just never authenticates.
pub const STANDARD_SESSION: &str = "standard";
pub const ADMIN_SESSION: &str = "admin";

/// Login state for a single terminal run.
///
/// Two states only: no session, or an active session of some kind.
/// Starting a session marks it logged in immediately, before any
/// credential check happens; a failed login does not clear it.
#[derive(Debug, Default)]
pub struct Session {
    kind: Option<String>,
    logged_in: bool,
}

impl Session {
    pub fn begin(&mut self, kind: &str) {
        self.kind = Some(kind.to_owned());
        self.logged_in = true;
    }

    pub fn clear(&mut self) {
        self.kind = None;
        self.logged_in = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}
