use std::fmt;

/// An identity that has passed validation but has no id yet.
#[derive(Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credential: String,
    pub profile_picture: Option<Vec<u8>>,
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("credential", &"<redacted>")
            .finish_non_exhaustive()
    }
}
