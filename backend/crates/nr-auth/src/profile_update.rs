use std::fmt;

/// Replacement values for every mutable field of an identity.
///
/// There is no "keep the current password" form: an update always carries a
/// new plaintext password and always replaces the credential.
#[derive(Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub profile_picture: Option<Vec<u8>>,
}

impl fmt::Debug for ProfileUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileUpdate")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}
