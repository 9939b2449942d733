pub mod login_request;
pub mod login_response;
pub mod nurse_dto;
pub mod nurse_list_response;
pub mod nurse_response;
pub mod nurses;
pub mod profile_picture;
pub mod register_nurse_request;
pub mod update_nurse_request;
