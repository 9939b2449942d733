use crate::{Result as ServiceErrorResult, ServiceError};

use nr_core::Validator;

/// Syntax checks shared by registration and profile update.
///
/// Order matters: email, then password, then names.
pub(crate) fn check_submission(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> ServiceErrorResult<()> {
    if !Validator::validate_email(email) {
        return Err(ServiceError::invalid_email(email));
    }

    if !Validator::validate_password(password) {
        return Err(ServiceError::invalid_password());
    }

    if !Validator::validate_name(first_name) {
        return Err(ServiceError::invalid_name("first_name"));
    }

    if !Validator::validate_name(last_name) {
        return Err(ServiceError::invalid_name("last_name"));
    }

    Ok(())
}
