use crate::profile_picture;

use nr_core::Identity;

use serde::Serialize;

/// Public view of a nurse; never carries the credential
#[derive(Debug, Serialize)]
pub struct NurseDto {
    pub nurse_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Base64 (standard alphabet, padded)
    pub profile_picture: Option<String>,
}

impl From<Identity> for NurseDto {
    fn from(n: Identity) -> Self {
        Self {
            nurse_id: n.id,
            first_name: n.first_name,
            last_name: n.last_name,
            email: n.email,
            profile_picture: n.profile_picture.as_deref().map(profile_picture::encode),
        }
    }
}
