pub mod identity;
pub mod new_identity;
