use thiserror::Error;

/// Terminal outcomes of a single client call.
///
/// None of these is retried or recovered internally; the presentation
/// layer turns them into user-facing messages.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request URL construction failed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Transport error or HTTP status other than 200. Carries the
    /// status code; [`ClientError::NO_RESPONSE`] means no HTTP
    /// response was received at all.
    #[error("request failed with status code: {0}")]
    RequestFailed(i32),

    /// Response body did not match the expected JSON shape. The
    /// underlying parse error is logged and discarded.
    #[error("failed to decode server response")]
    Decoding,

    /// The geocode query matched nothing.
    #[error("no matching result found")]
    NoResult,
}

impl ClientError {
    /// Sentinel status code for "no HTTP response at all": DNS or
    /// connection failures, timeouts, a dropped connection mid-body.
    pub const NO_RESPONSE: i32 = -1;
}
