//! Behavioural coverage for decoding review records at the input boundary.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use reviewlens_core::{ReviewInput, ReviewRecord};

/// Raw JSON payload under test.
#[fixture]
pub fn payload() -> RefCell<Option<&'static str>> {
    RefCell::new(None)
}

/// Decoded pipeline input, recorded for assertions.
#[fixture]
pub fn decoded() -> RefCell<Option<ReviewInput>> {
    RefCell::new(None)
}

#[given("a scraped review with a star string rating")]
fn star_string_review(payload: &RefCell<Option<&'static str>>) {
    *payload.borrow_mut() = Some(r#"{"text":"Great food!","rating":"5 stars"}"#);
}

#[given("a scraped review with an unreadable rating")]
fn unreadable_review(payload: &RefCell<Option<&'static str>>) {
    *payload.borrow_mut() = Some(r#"{"text":"Fine","rating":"no stars given"}"#);
}

#[given("a stored review without text")]
fn textless_review(payload: &RefCell<Option<&'static str>>) {
    *payload.borrow_mut() = Some(r#"{"text":null,"rating":4,"platform":"google"}"#);
}

#[when("I decode the review record")]
fn decode_record(
    payload: &RefCell<Option<&'static str>>,
    decoded: &RefCell<Option<ReviewInput>>,
) {
    let raw = payload
        .borrow()
        .unwrap_or_else(|| panic!("payload must be initialised"));
    let record: ReviewRecord = match serde_json::from_str(raw) {
        Ok(record) => record,
        Err(err) => panic!("review record should decode: {err}"),
    };
    *decoded.borrow_mut() = Some(record.to_input());
}

fn with_input(decoded: &RefCell<Option<ReviewInput>>, check: impl FnOnce(&ReviewInput)) {
    let binding = decoded.borrow();
    let input = binding
        .as_ref()
        .unwrap_or_else(|| panic!("decoded input must be recorded"));
    check(input);
}

#[then("the pipeline input has rating 5")]
fn rating_is_five(decoded: &RefCell<Option<ReviewInput>>) {
    with_input(decoded, |input| assert_eq!(input.rating, 5));
}

#[then("the pipeline input has rating 0")]
fn rating_is_zero(decoded: &RefCell<Option<ReviewInput>>) {
    with_input(decoded, |input| assert_eq!(input.rating, 0));
}

#[then("the pipeline input keeps the review text")]
fn text_is_kept(decoded: &RefCell<Option<ReviewInput>>) {
    with_input(decoded, |input| assert_eq!(input.text, "Great food!"));
}

#[then("the pipeline input has empty text")]
fn text_is_empty(decoded: &RefCell<Option<ReviewInput>>) {
    with_input(decoded, |input| assert!(input.text.is_empty()));
}

#[scenario(path = "tests/features/review_records.feature", index = 0)]
fn star_strings_become_ratings(
    payload: RefCell<Option<&'static str>>,
    decoded: RefCell<Option<ReviewInput>>,
) {
    let _ = (payload, decoded);
}

#[scenario(path = "tests/features/review_records.feature", index = 1)]
fn unreadable_ratings_fall_back(
    payload: RefCell<Option<&'static str>>,
    decoded: RefCell<Option<ReviewInput>>,
) {
    let _ = (payload, decoded);
}

#[scenario(path = "tests/features/review_records.feature", index = 2)]
fn missing_text_becomes_empty(
    payload: RefCell<Option<&'static str>>,
    decoded: RefCell<Option<ReviewInput>>,
) {
    let _ = (payload, decoded);
}
