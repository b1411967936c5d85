use crate::auth::registration::RegistrationRequest;

/// Where the authentication service lives when nothing else is said.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1341";

pub const DEFAULT_USERNAME: &str = "testsysadmin";
pub const DEFAULT_EMAIL: &str = "testsysadmin@test.com";
pub const DEFAULT_PASSWORD: &str = "TestAdmin123!";

pub trait Configuration {
    fn base_url(&self) -> &str;

    fn registration(&self) -> RegistrationRequest;
}

/// The hardcoded test account against the local development server.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defaults;

impl Configuration for Defaults {
    fn base_url(&self) -> &str {
        DEFAULT_BASE_URL
    }

    fn registration(&self) -> RegistrationRequest {
        RegistrationRequest::new(DEFAULT_USERNAME, DEFAULT_EMAIL, DEFAULT_PASSWORD)
    }
}
