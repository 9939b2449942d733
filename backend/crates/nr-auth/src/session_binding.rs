/// Instruction to the transport: bind the caller's session to this identity.
///
/// The services never hold session state themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBinding {
    pub identity_id: i64,
    pub first_name: String,
}
