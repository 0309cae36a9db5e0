//! # bycontent
//!
//! Content negotiation for HTTP responses based on the request's Accept
//! header (RFC 7231 §5.3.2).
//!
//! Handlers are registered against fully-specified media types with a small
//! builder, then the best match for an Accept header is selected and
//! invoked. The crate owns no I/O: the host framework supplies the header
//! value and translates [`NegotiationError::NotAcceptable`] into an
//! HTTP 406 response.
//!
//! ## Example
//!
//! ```
//! use bycontent::ByContent;
//!
//! let spec = ByContent::new()
//!     .json(|| { /* render json */ })
//!     .html(|| { /* render html */ });
//!
//! // Exact entries beat wildcards, quality breaks ties within a kind,
//! // registration order breaks the rest.
//! spec.respond("text/html;q=0.8, application/json;q=0.9").unwrap();
//!
//! assert!(spec.respond("application/xml").is_err()); // 406 for the host
//! ```

pub mod accept;
pub mod by_content;
pub mod error;
pub mod media_type;

pub use accept::AcceptHeader;
pub use by_content::{ByContent, Handler};
pub use error::{NegotiationError, Result};
pub use media_type::MediaType;
