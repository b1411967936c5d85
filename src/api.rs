use crate::auth::registration::RegistrationRequest;
use crate::auth::{RegistrationOutcome, RegistrationResponse};
use crate::errors::Result;
use log::{debug, warn};
use reqwest::StatusCode;

/// Where the local-auth register endpoint lives.
pub const REGISTER_PATH: &str = "/api/auth/local/register";

/// Simple API client for the registration endpoint.
pub struct APIClient {
    pub url: String,
    client: reqwest::Client,
}

impl APIClient {
    /// Create a new API client pointing at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), REGISTER_PATH)
    }

    /// Register a new account.
    ///
    /// A 200 answer is decoded into [`RegistrationOutcome::Created`]; any other
    /// status comes back as [`RegistrationOutcome::Rejected`] with the raw body.
    /// Transport failures and a 200 body of the wrong shape are errors.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationOutcome> {
        let endpoint = self.endpoint();
        debug!("registering {} at {}", request.username, endpoint);

        let response = self
            .client
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .inspect_err(|e| warn!("register request to {} failed: {}", endpoint, e))?;

        let status = response.status();
        debug!("register responded with {}", status);
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Ok(RegistrationOutcome::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RegistrationResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}
