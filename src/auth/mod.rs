pub mod registration;

use serde_derive::Deserialize;
use std::fmt;

/// Role every freshly registered account receives.
pub const DEFAULT_ROLE: &str = "reguser";
/// Role the test account is meant to be promoted to by hand.
pub const ADMIN_ROLE: &str = "sysadmin";

/// Identifier the service assigned to a user.
///
/// Numeric on the stock service, but some deployments hand out string ids.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(id) => write!(f, "{id}"),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct RegisteredUser {
    pub id: UserId,
}

/// Body returned by the service on a successful registration.
#[derive(Deserialize, Debug, Clone)]
pub struct RegistrationResponse {
    pub user: RegisteredUser,
    pub jwt: String,
}

#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
    /// Account created, access token within.
    Created { user_id: UserId, jwt: String },
    /// The service answered with something other than 200.
    Rejected { status: u16, body: String },
}

impl From<RegistrationResponse> for RegistrationOutcome {
    fn from(response: RegistrationResponse) -> Self {
        RegistrationOutcome::Created {
            user_id: response.user.id,
            jwt: response.jwt,
        }
    }
}

/// Statement an operator runs against the user table to promote `user_id`.
pub fn role_update_statement(user_id: &UserId) -> String {
    format!("UPDATE up_users SET userRole='{ADMIN_ROLE}' WHERE id={user_id};")
}
