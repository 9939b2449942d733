use crate::NurseDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NurseResponse {
    pub nurse: NurseDto,
}
