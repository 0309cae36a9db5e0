use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bycontent::{ByContent, NegotiationError};

const PLAIN: usize = 1;
const HTML: usize = 2;
const JSON: usize = 3;
const XML: usize = 4;

fn probed(probe: &Arc<AtomicUsize>, value: usize) -> impl Fn() + Send + 'static {
	let probe = probe.clone();
	move || probe.store(value, Ordering::SeqCst)
}

fn full_spec(probe: &Arc<AtomicUsize>) -> ByContent {
	ByContent::new()
		.plain_text(probed(probe, PLAIN))
		.html(probed(probe, HTML))
		.json(probed(probe, JSON))
		.xml(probed(probe, XML))
}

#[test]
fn test_full_wildcard_selects_first_registration() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = full_spec(&probe);

	spec.respond("*/*").unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), PLAIN); // first registered wins
}

#[test]
fn test_empty_header_selects_first_registration() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = full_spec(&probe);

	spec.respond("").unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), PLAIN);
}

#[test]
fn test_exact_match_beats_registration_order() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = full_spec(&probe);

	spec.respond("application/json").unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), JSON);
}

#[test]
fn test_higher_quality_wins() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new()
		.html(probed(&probe, HTML))
		.json(probed(&probe, JSON));

	spec.respond("text/html;q=0.8, application/json;q=0.9")
		.unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), JSON);
}

#[test]
fn test_no_match_is_not_acceptable() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new()
		.json(probed(&probe, JSON))
		.html(probed(&probe, HTML));

	let err = spec.respond("application/xml").unwrap_err();
	assert_eq!(err, NegotiationError::NotAcceptable);
	assert_eq!(probe.load(Ordering::SeqCst), 0); // no handler invoked
}

#[test]
fn test_wildcard_registration_rejected_without_mutation() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new().json(probed(&probe, JSON));
	assert_eq!(spec.len(), 1);

	let err = ByContent::new().type_("text/*", || {}).unwrap_err();
	assert_eq!(
		err,
		NegotiationError::InvalidMediaType("text/*".to_string())
	);

	// a failed registration mid-chain reports the error and drops the spec
	let result = ByContent::new()
		.json(probed(&probe, JSON))
		.type_("*/*", || {});
	assert!(result.is_err());
}

#[test]
fn test_resolution_is_idempotent() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = full_spec(&probe);
	let header = "text/html;q=0.7, application/xml;q=0.7";

	spec.respond(header).unwrap();
	let first = probe.load(Ordering::SeqCst);
	spec.respond(header).unwrap();
	let second = probe.load(Ordering::SeqCst);

	assert_eq!(first, HTML); // equal quality, html registered earlier
	assert_eq!(first, second);
}

#[test]
fn test_subtype_wildcard_matches_only_same_type() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new()
		.json(probed(&probe, JSON))
		.html(probed(&probe, HTML));

	spec.respond("text/*").unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), HTML);
}

#[test]
fn test_specificity_beats_quality() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new()
		.json(probed(&probe, JSON))
		.html(probed(&probe, HTML));

	// json only matches via */*; html matches exactly despite lower quality
	spec.respond("*/*;q=1.0, text/html;q=0.3").unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), HTML);
}

#[test]
fn test_rejected_entry_excluded_from_matching() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new()
		.json(probed(&probe, JSON))
		.html(probed(&probe, HTML));

	// the q=0 json entry is dropped, leaving html as the only match
	spec.respond("application/json;q=0, text/html;q=0.5")
		.unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), HTML);
}

#[test]
fn test_custom_media_type_registration() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new()
		.json(probed(&probe, JSON))
		.type_("application/vnd.api+json", probed(&probe, XML))
		.unwrap();

	spec.respond("application/vnd.api+json").unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), XML);
}

#[test]
fn test_resolve_returns_handler_without_invoking() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = full_spec(&probe);

	let handler = spec.resolve("application/xml").unwrap();
	assert_eq!(probe.load(Ordering::SeqCst), 0); // selection alone has no effect

	handler();
	assert_eq!(probe.load(Ordering::SeqCst), XML);
}

#[test]
fn test_all_entries_rejected_is_not_acceptable() {
	let probe = Arc::new(AtomicUsize::new(0));
	let spec = ByContent::new().json(probed(&probe, JSON));

	let err = spec.respond("application/json;q=0").unwrap_err();
	assert_eq!(err, NegotiationError::NotAcceptable);
}
