//! Registration and selection of response handlers by requested content type

use std::fmt;

use crate::accept::{AcceptHeader, Preference};
use crate::error::{NegotiationError, Result};
use crate::media_type::MediaType;

/// A zero-argument response-producing callback. What the handler does
/// (typically writing a response) is opaque to the negotiator.
pub type Handler = Box<dyn Fn() + Send>;

/// A specification of how to respond to a request, based on the requested
/// content type (the request's Accept header).
///
/// Handlers are registered in order against fully-specified media types;
/// [`resolve`](ByContent::resolve) then picks the best match for an Accept
/// header per RFC 7231 §5.3.2. Registration order is significant: the
/// first-registered entry wins when the client expresses no preference, and
/// breaks ties between equally acceptable types.
///
/// A `ByContent` value is built and consulted within a single
/// request-handling invocation; it carries no state across requests.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use bycontent::ByContent;
///
/// let served = Arc::new(AtomicUsize::new(0));
/// let json_served = served.clone();
/// let html_served = served.clone();
///
/// let spec = ByContent::new()
///     .json(move || json_served.store(1, Ordering::SeqCst))
///     .html(move || html_served.store(2, Ordering::SeqCst));
///
/// spec.respond("text/html;q=0.9, application/json").unwrap();
/// assert_eq!(served.load(Ordering::SeqCst), 1); // json has higher quality
/// ```
pub struct ByContent {
	registrations: Vec<(MediaType, Handler)>,
}

impl ByContent {
	/// Creates an empty specification
	pub fn new() -> Self {
		Self {
			registrations: Vec::new(),
		}
	}

	/// Registers a handler for the given fully-specified media type
	///
	/// Fails with [`NegotiationError::InvalidMediaType`] when the string is
	/// malformed or contains a wildcard segment; the registration list is
	/// left untouched in that case. Parameters in the string (such as
	/// `;q=0.5`) are accepted but ignored: only the `type/subtype` range
	/// participates in matching. Re-registering an already-registered type
	/// replaces its handler but keeps the original position.
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::ByContent;
	///
	/// let spec = ByContent::new()
	///     .type_("application/vnd.api+json", || {})
	///     .unwrap();
	/// assert_eq!(spec.len(), 1);
	///
	/// assert!(ByContent::new().type_("text/*", || {}).is_err());
	/// ```
	pub fn type_(mut self, mime_type: &str, handler: impl Fn() + Send + 'static) -> Result<Self> {
		let media_type = MediaType::parse(mime_type)
			.filter(MediaType::is_concrete)
			.ok_or_else(|| NegotiationError::InvalidMediaType(mime_type.to_string()))?;
		self.insert(media_type, Box::new(handler));
		Ok(self)
	}

	/// Registers a handler for `text/plain`
	pub fn plain_text(self, handler: impl Fn() + Send + 'static) -> Self {
		self.known("text", "plain", handler)
	}

	/// Registers a handler for `text/html`
	pub fn html(self, handler: impl Fn() + Send + 'static) -> Self {
		self.known("text", "html", handler)
	}

	/// Registers a handler for `application/json`
	pub fn json(self, handler: impl Fn() + Send + 'static) -> Self {
		self.known("application", "json", handler)
	}

	/// Registers a handler for `application/xml`
	pub fn xml(self, handler: impl Fn() + Send + 'static) -> Self {
		self.known("application", "xml", handler)
	}

	fn known(mut self, main_type: &str, subtype: &str, handler: impl Fn() + Send + 'static) -> Self {
		self.insert(MediaType::new(main_type, subtype), Box::new(handler));
		self
	}

	fn insert(&mut self, media_type: MediaType, handler: Handler) {
		let existing = self.registrations.iter_mut().find(|(registered, _)| {
			registered.main_type == media_type.main_type && registered.subtype == media_type.subtype
		});
		match existing {
			Some(slot) => slot.1 = handler,
			None => self.registrations.push((media_type, handler)),
		}
	}

	/// Selects the registered handler that best satisfies the Accept header
	///
	/// For each registration, the header's best matching entry is computed
	/// (exact match beats `type/*` beats `*/*`; same specificity is ranked
	/// by quality). The registration with the best preference wins, with
	/// ties going to the earliest registration. An empty header accepts
	/// anything. Selection is pure: calling `resolve` twice with the same
	/// header picks the same handler.
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::{ByContent, NegotiationError};
	///
	/// let spec = ByContent::new().json(|| {}).html(|| {});
	///
	/// assert!(spec.resolve("text/html").is_ok());
	/// assert!(matches!(
	///     spec.resolve("application/xml"),
	///     Err(NegotiationError::NotAcceptable)
	/// ));
	/// ```
	pub fn resolve(&self, accept_header: &str) -> Result<&Handler> {
		let accept = AcceptHeader::parse(accept_header);

		let mut best: Option<(Preference, usize)> = None;
		for (index, (media_type, _)) in self.registrations.iter().enumerate() {
			if let Some(preference) = accept.preference_for(media_type) {
				match &best {
					// Strict outranking keeps the earliest registration on ties.
					Some((current, _)) if !preference.outranks(current) => {}
					_ => best = Some((preference, index)),
				}
			}
		}

		match best {
			Some((_, index)) => {
				let (media_type, handler) = &self.registrations[index];
				tracing::debug!(media_type = %media_type, "selected content type");
				Ok(handler)
			}
			None => {
				tracing::debug!(accept = accept_header, "no acceptable content type");
				Err(NegotiationError::NotAcceptable)
			}
		}
	}

	/// Resolves the Accept header and invokes the selected handler
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::ByContent;
	///
	/// let spec = ByContent::new().plain_text(|| println!("hello"));
	/// spec.respond("*/*").unwrap();
	/// ```
	pub fn respond(&self, accept_header: &str) -> Result<()> {
		let handler = self.resolve(accept_header)?;
		handler();
		Ok(())
	}

	/// Returns the number of registered media types
	pub fn len(&self) -> usize {
		self.registrations.len()
	}

	/// Returns true when no handlers are registered
	pub fn is_empty(&self) -> bool {
		self.registrations.is_empty()
	}
}

impl Default for ByContent {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ByContent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let types: Vec<String> = self
			.registrations
			.iter()
			.map(|(media_type, _)| media_type.to_string())
			.collect();
		f.debug_struct("ByContent")
			.field("registrations", &types)
			.finish()
	}
}
