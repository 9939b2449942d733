use crate::NurseDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NurseListResponse {
    pub nurses: Vec<NurseDto>,
}
