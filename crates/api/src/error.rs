use serde::Deserialize;
use thiserror::Error;

/// Failures crossing the HTTP boundary. `Transport` covers everything that
/// never produced a status line (DNS, refused connection, timeout); `Status`
/// is a completed exchange the server rejected.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("respuesta inválida del servidor: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Status-only failure, `HTTP <status>`. Used on reads, where the body is
    /// not consulted.
    pub fn from_status(status: u16) -> Self {
        Self::Status { status, detail: format!("HTTP {status}") }
    }

    /// Failure for a write, preferring the server's `{"error": "..."}`
    /// explanation over the bare status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Status { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
