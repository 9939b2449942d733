//! Identity entity - a registered nurse.

use crate::NewIdentity;

use std::fmt;

/// A stored nurse record.
///
/// `credential` always holds the PHC-encoded hash produced by the credential
/// hasher, never a plaintext password. `Debug` output redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    /// Assigned by the identity store on creation
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credential: String,
    pub profile_picture: Option<Vec<u8>>,
}

impl Identity {
    /// Attach a store-assigned id to a freshly created record
    pub fn from_new(id: i64, new: NewIdentity) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            credential: new.credential,
            profile_picture: new.profile_picture,
        }
    }

    /// Case-insensitive email comparison used for the uniqueness rule
    pub fn has_email_ignore_case(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("credential", &"<redacted>")
            .field(
                "profile_picture",
                &self.profile_picture.as_ref().map(|bytes| bytes.len()),
            )
            .finish()
    }
}
