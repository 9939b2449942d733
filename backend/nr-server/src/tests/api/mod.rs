mod error;
mod nurse_dto;
mod profile_picture;
