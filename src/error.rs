use std::fmt;

use reqwest::StatusCode;

/// Failures surfaced by [`Client`](crate::Client) operations.
///
/// The taxonomy is deliberately flat: anything that goes wrong between
/// building the request and receiving a 2xx body is `Transport`; a 2xx
/// body that does not match the mandatory wire schema is `Decode`. The
/// API's own error payloads are folded into the `Transport` message
/// rather than modeled as a separate kind.
#[derive(Debug)]
pub enum Error {
    /// Connection failure, timeout, unbuildable request, or non-2xx status.
    Transport {
        /// HTTP status code, when the server answered at all.
        status: Option<u16>,
        message: String,
    },

    /// The response body did not decode into the expected wire schema.
    Decode {
        /// Request URL, for context in logs.
        url: String,
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Error::Transport {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { message, .. } => write!(f, "{message}"),
            Error::Decode { url, source } => {
                write!(f, "failed to parse API JSON (url={url}): {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport { .. } => None,
            Error::Decode { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ListenErrorResponse {
    #[serde(default)]
    pub(crate) message: Option<String>,
    // Some endpoints respond with {"error": ...} instead.
    #[serde(default)]
    pub(crate) error: Option<String>,
}

/// Builds the `Transport` error for a non-2xx response, pulling the server
/// message out of the body when it parses as a Listen Notes error payload.
pub(crate) fn transport_from_status(status: StatusCode, url: &str, body: &str) -> Error {
    let server_msg = serde_json::from_str::<ListenErrorResponse>(body)
        .ok()
        .and_then(|e| e.message.or(e.error));

    let mut message = match server_msg {
        Some(m) => format!("API request failed: HTTP {status} for url ({url})\n{m}"),
        None => format!("API request failed: HTTP {status} for url ({url})"),
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        message.push_str(
            "\n- Check that LISTENAPI_KEY (or the key in .listenapirc) is a valid Listen Notes API key\n- Ensure the key has not expired or run out of quota",
        );
    }

    Error::Transport {
        status: Some(status.as_u16()),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_2xx_keeps_status_and_server_message() {
        let err = transport_from_status(
            StatusCode::NOT_FOUND,
            "http://x/api/v2/podcasts/nope",
            r#"{"message":"podcast not found"}"#,
        );
        match err {
            Error::Transport { status, message } => {
                assert_eq!(status, Some(404));
                assert!(message.contains("podcast not found"));
                assert!(message.contains("HTTP 404"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn unauthorized_adds_key_hint() {
        let err = transport_from_status(StatusCode::UNAUTHORIZED, "http://x", "not json");
        let text = err.to_string();
        assert!(text.contains("LISTENAPI_KEY"));
    }

    #[test]
    fn error_body_variant_is_recognized() {
        let err = transport_from_status(
            StatusCode::BAD_REQUEST,
            "http://x",
            r#"{"error":"page out of range"}"#,
        );
        assert!(err.to_string().contains("page out of range"));
    }
}
