use crate::{ApiResult, profile_picture};

use nr_auth::ProfileUpdate;

use serde::Deserialize;

/// Full replacement of a nurse's mutable fields
#[derive(Deserialize)]
pub struct UpdateNurseRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,

    /// Base64-encoded image bytes; omitting it clears the picture
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl UpdateNurseRequest {
    pub fn into_update(self) -> ApiResult<ProfileUpdate> {
        Ok(ProfileUpdate {
            profile_picture: profile_picture::decode(self.profile_picture)?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
        })
    }
}
