pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod report;

use crate::api::APIClient;
use crate::config::Configuration;
use std::io::{self, Write};

/// Register the configured account and report what happened to `out`.
///
/// Registration failures of any kind end up as console lines; only a failure
/// to write to `out` is returned.
pub async fn run<C: Configuration, W: Write>(config: &C, out: &mut W) -> io::Result<()> {
    report::step(out)?;

    let client = APIClient::new(config.base_url());
    match client.register(&config.registration()).await {
        Ok(outcome) => report::outcome(out, &outcome),
        Err(e) => report::error(out, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockService, unreachable_url};
    use crate::auth::registration::RegistrationRequest;
    use crate::config::Defaults;

    struct At(String);

    impl Configuration for At {
        fn base_url(&self) -> &str {
            &self.0
        }

        fn registration(&self) -> RegistrationRequest {
            Defaults.registration()
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    async fn output_for(config: &At) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(config, &mut out).await?;
        Ok(String::from_utf8(out)?)
    }

    #[tokio::test]
    async fn success_prints_id_and_token_once() -> anyhow::Result<()> {
        init_logger();
        let service =
            MockService::start(200, r#"{"jwt":"eyJhbGciOi.payload.sig","user":{"id":314}}"#).await?;
        let text = output_for(&At(service.url.clone())).await?;

        assert!(text.starts_with("Step 1: Registering test user...\n"));
        assert_eq!(text.matches("✅ User created with ID: 314").count(), 1);
        assert_eq!(text.matches("eyJhbGciOi.payload.sig").count(), 1);
        assert!(text.contains("UPDATE up_users SET userRole='sysadmin' WHERE id=314;"));
        Ok(())
    }

    #[tokio::test]
    async fn bad_request_prints_status_and_body() -> anyhow::Result<()> {
        init_logger();
        let body = r#"{"data":null,"error":{"status":400,"name":"ApplicationError","message":"Email or Username are already taken"}}"#;
        let service = MockService::start(400, body).await?;
        let text = output_for(&At(service.url.clone())).await?;

        assert!(text.contains("❌ Registration failed: 400"));
        assert!(text.contains(body));
        assert!(!text.contains("JWT Token"));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_host_prints_connection_error() -> anyhow::Result<()> {
        init_logger();
        let text = output_for(&At(unreachable_url()?)).await?;

        let error_line = text
            .lines()
            .find(|line| line.starts_with("❌ Error: "))
            .expect("error line");
        assert!(error_line.to_lowercase().contains("connect"), "{error_line}");
        assert!(!text.contains("JWT Token"));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_success_body_prints_error() -> anyhow::Result<()> {
        init_logger();
        let service = MockService::start(200, r#"{"user":{}}"#).await?;
        let text = output_for(&At(service.url.clone())).await?;

        assert!(text.contains("❌ Error: malformed registration response"));
        assert!(!text.contains("JWT Token"));
        Ok(())
    }
}
