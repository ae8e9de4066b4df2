//! Error taxonomy for forecast acquisition.

use thiserror::Error;

/// A network-level failure reported by an [`HttpFetch`] implementation.
///
/// [`HttpFetch`]: crate::http::HttpFetch
#[derive(Debug, Clone, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Failure to turn raw bytes into a [`Forecast`].
///
/// Note that only tokenizer and structural failures abort a parse;
/// individual malformed measurement attributes degrade to absent fields.
///
/// [`Forecast`]: crate::model::Forecast
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The bytes are not a well-formed XML document.
    #[error("XML syntax error: {0}")]
    Syntax(String),
    /// The document is well-formed XML but not a forecast report.
    #[error("unexpected document structure: {0}")]
    Structure(&'static str),
}

/// What went wrong while acquiring a forecast.
#[derive(Debug, Clone, Error)]
pub enum AcquisitionError {
    /// The HTTP request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The remote API answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
    /// The response (or cached) document could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_failed_stage() {
        let transport: AcquisitionError = TransportError("connection refused".into()).into();
        assert!(transport.to_string().contains("transport failure"));

        assert_eq!(
            AcquisitionError::HttpStatus(500).to_string(),
            "unexpected HTTP status 500"
        );

        let parse: AcquisitionError = ParseError::Structure("missing report root").into();
        assert!(parse.to_string().contains("missing report root"));
    }
}
