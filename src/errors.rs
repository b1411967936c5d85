use thiserror::Error;

/// Common result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type that unifies reqwest HTTP errors and response decoding errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors produced by reqwest HTTP client.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 200 but the body did not have the expected shape.
    #[error("malformed registration response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `err` followed by every error in its source chain, joined by `": "`.
///
/// reqwest keeps the interesting part (e.g. `Connection refused`) a few
/// levels down, so the top-level message alone is rarely enough.
pub fn chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // thiserror's `{0}` already inlines the direct source
        if !rendered.ends_with(&cause_text) {
            rendered.push_str(": ");
            rendered.push_str(&cause_text);
        }
        source = cause.source();
    }
    rendered
}
