//! Media type values and wildcard-aware matching

use std::fmt;

/// How specifically an Accept entry matches a concrete media type.
///
/// Ordered from least to most specific, so `Exact` compares greater than
/// the wildcard kinds.
///
/// # Examples
///
/// ```
/// use bycontent::media_type::Specificity;
///
/// assert!(Specificity::Exact > Specificity::SubtypeWildcard);
/// assert!(Specificity::SubtypeWildcard > Specificity::FullWildcard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Specificity {
	/// Matched through `*/*`.
	FullWildcard,
	/// Matched through `type/*`.
	SubtypeWildcard,
	/// Matched an exact `type/subtype`.
	Exact,
}

/// Represents a media type with quality factor
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
	/// Main type (e.g., "text", "application", or "*")
	pub main_type: String,
	/// Subtype (e.g., "html", "json", or "*")
	pub subtype: String,
	/// Quality factor (0.0 to 1.0)
	pub quality: f32,
}

impl MediaType {
	/// Creates a new MediaType with quality 1.0
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::MediaType;
	///
	/// let html = MediaType::new("text", "html");
	/// assert_eq!(html.main_type, "text");
	/// assert_eq!(html.subtype, "html");
	/// assert_eq!(html.quality, 1.0);
	/// ```
	pub fn new(main_type: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			main_type: main_type.into(),
			subtype: subtype.into(),
			quality: 1.0,
		}
	}

	/// Parses a media type string (e.g., "text/html;q=0.9")
	///
	/// Type and subtype are lowercased. A `q` parameter is honored and
	/// clamped to [0.0, 1.0]; other parameters are ignored. Returns `None`
	/// when the range is not a well-formed `type/subtype` pair.
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::MediaType;
	///
	/// let html = MediaType::parse("text/html;q=0.9").unwrap();
	/// assert_eq!(html.main_type, "text");
	/// assert_eq!(html.subtype, "html");
	/// assert_eq!(html.quality, 0.9);
	///
	/// let any = MediaType::parse("*/*").unwrap();
	/// assert_eq!(any.main_type, "*");
	///
	/// assert!(MediaType::parse("html").is_none());
	/// assert!(MediaType::parse("text/").is_none());
	/// ```
	pub fn parse(s: &str) -> Option<Self> {
		let mut parts = s.split(';');
		let range = parts.next()?.trim();
		let (main_type, subtype) = range.split_once('/')?;
		let main_type = main_type.trim();
		let subtype = subtype.trim();

		if main_type.is_empty() || subtype.is_empty() {
			return None;
		}
		if main_type.contains(char::is_whitespace)
			|| subtype.contains(char::is_whitespace)
			|| subtype.contains('/')
		{
			return None;
		}

		let mut quality = 1.0;
		for param in parts {
			let param = param.trim();
			if let Some((key, value)) = param.split_once('=')
				&& key.trim() == "q"
				&& let Ok(q) = value.trim().parse::<f32>()
				&& q.is_finite()
			{
				quality = q.clamp(0.0, 1.0);
			}
		}

		Some(Self {
			main_type: main_type.to_lowercase(),
			subtype: subtype.to_lowercase(),
			quality,
		})
	}

	/// Checks if this media type matches another (considering wildcards)
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::MediaType;
	///
	/// let any = MediaType::new("*", "*");
	/// let text_any = MediaType::new("text", "*");
	/// let html = MediaType::new("text", "html");
	/// let json = MediaType::new("application", "json");
	///
	/// assert!(any.matches(&json));
	/// assert!(text_any.matches(&html));
	/// assert!(!text_any.matches(&json));
	/// assert!(html.matches(&html));
	/// ```
	pub fn matches(&self, other: &MediaType) -> bool {
		let type_matches = self.main_type == "*"
			|| other.main_type == "*"
			|| self.main_type == other.main_type;
		let subtype_matches =
			self.subtype == "*" || other.subtype == "*" || self.subtype == other.subtype;
		type_matches && subtype_matches
	}

	/// Returns how specifically this entry matches a concrete media type,
	/// or `None` when it does not match at all
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::{MediaType, media_type::Specificity};
	///
	/// let html = MediaType::new("text", "html");
	///
	/// let exact = MediaType::parse("text/html").unwrap();
	/// assert_eq!(exact.match_specificity(&html), Some(Specificity::Exact));
	///
	/// let text_any = MediaType::parse("text/*").unwrap();
	/// assert_eq!(
	///     text_any.match_specificity(&html),
	///     Some(Specificity::SubtypeWildcard)
	/// );
	///
	/// let json = MediaType::parse("application/json").unwrap();
	/// assert_eq!(json.match_specificity(&html), None);
	/// ```
	pub fn match_specificity(&self, concrete: &MediaType) -> Option<Specificity> {
		if !self.matches(concrete) {
			return None;
		}
		if self.main_type == "*" {
			Some(Specificity::FullWildcard)
		} else if self.subtype == "*" {
			Some(Specificity::SubtypeWildcard)
		} else {
			Some(Specificity::Exact)
		}
	}

	/// Returns true when neither segment is a wildcard
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::MediaType;
	///
	/// assert!(MediaType::new("application", "json").is_concrete());
	/// assert!(!MediaType::new("text", "*").is_concrete());
	/// assert!(!MediaType::new("*", "*").is_concrete());
	/// ```
	pub fn is_concrete(&self) -> bool {
		self.main_type != "*" && self.subtype != "*"
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.subtype)
	}
}
