use serde_derive::Serialize;

/// Body of `POST /api/auth/local/register`.
///
/// Field order is the wire order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
