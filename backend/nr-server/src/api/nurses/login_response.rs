use serde::Serialize;

/// Same body for every failed login, whatever the cause
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}
