//! Accept header parsing

use crate::media_type::{MediaType, Specificity};

/// The preference an Accept header assigns to a concrete media type:
/// the most specific matching entry, at its quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preference {
	/// Match kind of the best matching Accept entry.
	pub specificity: Specificity,
	/// Quality of that entry.
	pub quality: f32,
}

impl Preference {
	/// Returns true when this preference strictly outranks `other`:
	/// more specific match kind first, then higher quality.
	pub fn outranks(&self, other: &Preference) -> bool {
		self.specificity > other.specificity
			|| (self.specificity == other.specificity && self.quality > other.quality)
	}
}

/// Represents an Accept header
#[derive(Debug, Clone)]
pub struct AcceptHeader {
	pub media_types: Vec<MediaType>,
}

impl AcceptHeader {
	/// Parses an Accept header string into an AcceptHeader struct
	///
	/// Entries are kept in header order. Unparseable entries and entries
	/// with quality 0 (explicit client rejection) are dropped. A missing or
	/// empty header means the client accepts anything.
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("application/json, text/html; q=0.9");
	/// assert_eq!(accept.media_types.len(), 2);
	/// assert_eq!(accept.media_types[0].quality, 1.0);
	/// assert_eq!(accept.media_types[1].quality, 0.9);
	///
	/// let rejected = AcceptHeader::parse("text/html;q=0, application/json");
	/// assert_eq!(rejected.media_types.len(), 1);
	/// assert_eq!(rejected.media_types[0].subtype, "json");
	///
	/// let empty = AcceptHeader::parse("");
	/// assert_eq!(empty.media_types[0].main_type, "*");
	/// ```
	pub fn parse(header: &str) -> Self {
		if header.trim().is_empty() {
			return Self::any();
		}

		let media_types = header
			.split(',')
			.filter_map(|s| MediaType::parse(s.trim()))
			.filter(|media_type| media_type.quality > 0.0)
			.collect();

		Self { media_types }
	}

	/// Creates an AcceptHeader that accepts anything (`*/*` at quality 1.0)
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::AcceptHeader;
	///
	/// let any = AcceptHeader::any();
	/// assert_eq!(any.media_types.len(), 1);
	/// assert_eq!(any.media_types[0].quality, 1.0);
	/// ```
	pub fn any() -> Self {
		Self {
			media_types: vec![MediaType::new("*", "*")],
		}
	}

	/// Computes the preference this header assigns to a concrete media type
	///
	/// Scans every entry and keeps the best (specificity, quality) pair.
	/// Returns `None` when no entry matches.
	///
	/// # Examples
	///
	/// ```
	/// use bycontent::{AcceptHeader, MediaType};
	/// use bycontent::media_type::Specificity;
	///
	/// let accept = AcceptHeader::parse("text/*;q=0.5, text/html;q=0.9");
	/// let html = MediaType::new("text", "html");
	///
	/// let preference = accept.preference_for(&html).unwrap();
	/// assert_eq!(preference.specificity, Specificity::Exact);
	/// assert_eq!(preference.quality, 0.9);
	///
	/// let json = MediaType::new("application", "json");
	/// assert!(accept.preference_for(&json).is_none());
	/// ```
	pub fn preference_for(&self, available: &MediaType) -> Option<Preference> {
		let mut best: Option<Preference> = None;
		for entry in &self.media_types {
			if let Some(specificity) = entry.match_specificity(available) {
				let candidate = Preference {
					specificity,
					quality: entry.quality,
				};
				match best {
					Some(current) if !candidate.outranks(&current) => {}
					_ => best = Some(candidate),
				}
			}
		}
		best
	}
}
