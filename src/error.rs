//! Content negotiation error types.

use thiserror::Error;

/// Result type for negotiation operations.
pub type Result<T> = std::result::Result<T, NegotiationError>;

/// Content negotiation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NegotiationError {
	/// A handler was registered for a wildcard or malformed media type.
	/// Registration only supports fully-specified `type/subtype` strings.
	#[error("invalid media type for registration: {0}")]
	InvalidMediaType(String),

	/// No registered media type satisfies the request's Accept header.
	/// The host is expected to answer with HTTP 406 Not Acceptable.
	#[error("no acceptable content type")]
	NotAcceptable,
}
