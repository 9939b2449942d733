pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod session_registry;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    nurses::{
        login_request::LoginRequest,
        login_response::LoginResponse,
        nurse_dto::NurseDto,
        nurse_list_response::NurseListResponse,
        nurse_response::NurseResponse,
        nurses::{
            delete_nurse, find_nurse_by_name, get_nurse, list_nurses, login_nurse,
            register_nurse, update_nurse,
        },
        profile_picture,
        register_nurse_request::RegisterNurseRequest,
        update_nurse_request::UpdateNurseRequest,
    },
};
pub use app_state::AppState;
pub use bootstrap::{SeedNurse, SeedReport, seed_nurses};
pub use session_registry::{SessionMarker, SessionRegistry};

pub use crate::routes::build_router;
