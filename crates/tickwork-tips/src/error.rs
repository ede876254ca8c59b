use std::fmt;

/// Why a tip could not be produced.
///
/// Never shown to the user verbatim; the task swaps it for [`crate::FALLBACK_TIP`].
#[derive(Debug, Clone, PartialEq)]
pub enum TipError {
    /// No API key was configured for a networked source.
    MissingApiKey,
    /// The request never got a response (DNS, TLS, connect, timeout).
    Transport(String),
    /// The service answered with a non-success status.
    Status { code: u16, body: String },
    /// The response body was not the expected JSON shape.
    Decode(String),
    /// The service answered but produced no text.
    Empty,
}

impl fmt::Display for TipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipError::MissingApiKey => write!(f, "tip service: no API key configured"),
            TipError::Transport(e) => write!(f, "tip service transport error: {e}"),
            TipError::Status { code, body } => {
                write!(f, "tip service returned HTTP {code}: {body}")
            }
            TipError::Decode(e) => write!(f, "tip service response could not be decoded: {e}"),
            TipError::Empty => write!(f, "tip service returned no text"),
        }
    }
}

impl std::error::Error for TipError {}

impl From<reqwest::Error> for TipError {
    /// Drops the request URL from the message so endpoint details stay out
    /// of the logs.
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_decode() {
            TipError::Decode(e.to_string())
        } else {
            TipError::Transport(e.to_string())
        }
    }
}
