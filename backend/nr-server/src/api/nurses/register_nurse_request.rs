use crate::{ApiResult, profile_picture};

use nr_auth::RegistrationRequest;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterNurseRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,

    /// Base64-encoded image bytes
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl RegisterNurseRequest {
    pub fn into_registration(self) -> ApiResult<RegistrationRequest> {
        Ok(RegistrationRequest {
            profile_picture: profile_picture::decode(self.profile_picture)?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
        })
    }
}
