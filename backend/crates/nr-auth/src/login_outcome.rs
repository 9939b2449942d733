use crate::SessionBinding;

use nr_core::Identity;

/// Result of a login attempt.
///
/// Unknown email and wrong password produce the same rejected outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub authenticated: bool,
    pub identity: Option<Identity>,
}

impl LoginOutcome {
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            authenticated: true,
            identity: Some(identity),
        }
    }

    pub fn rejected() -> Self {
        Self {
            authenticated: false,
            identity: None,
        }
    }

    /// The session binding the transport should apply, if any
    pub fn session_binding(&self) -> Option<SessionBinding> {
        match (&self.identity, self.authenticated) {
            (Some(identity), true) => Some(SessionBinding {
                identity_id: identity.id,
                first_name: identity.first_name.clone(),
            }),
            _ => None,
        }
    }
}
