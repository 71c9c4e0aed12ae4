//! Field extractors.
//!
//! Each field is tried as an ordered list of pattern families, and inside a
//! family as an ordered list of patterns. The first candidate that survives
//! cleanup wins; later patterns are never consulted once one has matched.
//! Absence is reported with the sentinel, never as an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{absent, Tag};
use super::keywords::{compile, KeywordSignals};

// ════════════════════════════════════════════════════════════════════════════
// Itinerary
// ════════════════════════════════════════════════════════════════════════════

static ITINERARY_LABELS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\bitinerary(?:\s*(?:number|num|no\.?|id))?[\s:#.-]*([a-z]?\s?\d{6,12})\b"),
        compile(r"(?i)\bitin\b\.?[\s:#.-]*([a-z]?\s?\d{6,12})\b"),
    ]
});

static ITINERARY_BARE_CODES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\b(h\d{6,12})\b"),
        compile(r"(?i)\b([a-z]\d{7,12})\b"),
    ]
});

/// Uppercase with internal whitespace removed.
fn canonical_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// `Itinerary # H123456`, `Itinerary Number: 123456789`, `Itin: H1234567`.
pub fn itinerary_from_label(text: &str) -> Option<String> {
    first_capture(text, &ITINERARY_LABELS, |raw| Some(canonical_code(raw)))
}

/// A booking-shaped code anywhere in the text (`H` prefix preferred).
pub fn itinerary_from_bare_code(text: &str) -> Option<String> {
    first_capture(text, &ITINERARY_BARE_CODES, |raw| Some(canonical_code(raw)))
}

pub fn extract_itinerary(text: &str) -> String {
    itinerary_from_label(text)
        .or_else(|| itinerary_from_bare_code(text))
        .unwrap_or_else(absent)
}

// ════════════════════════════════════════════════════════════════════════════
// Guest name
// ════════════════════════════════════════════════════════════════════════════

/// Vocabulary that shows up where a name should be in messy pastes.
const STRUCTURAL_WORDS: &[&str] = &[
    "agent", "all", "amount", "booking", "call", "chargeback", "check", "checkin",
    "checkout", "confirmation", "customer", "date", "dates", "dear", "dispute", "email",
    "fw", "fwd", "from", "guest", "guests", "hello", "hi", "hotel", "inn", "internal",
    "itin", "itinerary", "madam", "name", "note", "notes", "phone", "priority", "property",
    "re", "refund", "regards", "requester", "reservation", "reservations", "resort",
    "review", "room", "rooms", "sincerely", "sir", "status", "subject", "suites",
    "support", "team", "thank", "thanks", "ticket", "to", "total", "travel", "valued", "via",
];

fn is_structural(word: &str) -> bool {
    let bare = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    STRUCTURAL_WORDS.contains(&bare.as_str())
}

static GUEST_LABELS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i:\bguest(?:'s|s)?\s*name)\s*[:#-]\s*([A-Za-z][A-Za-z'.-]*(?:[ ][A-Z][A-Za-z'.-]*){0,4})"),
        compile(r"(?i:\b(?:requester|requested\s+by|cardholder(?:\s+name)?|customer\s+name|lead\s+guest))\s*[:#-]?\s*([A-Za-z][A-Za-z'.-]*(?:[ ][A-Z][A-Za-z'.-]*){0,4})"),
        compile(r"(?im:^name)\s*[:#-]\s*([A-Za-z][A-Za-z'.-]*(?:[ ][A-Z][A-Za-z'.-]*){0,4})"),
    ]
});

static GUEST_SALUTATIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i:\bdear)\s+\[?([A-Z][A-Za-z'.-]*(?:[ ][A-Z][A-Za-z'.-]*){0,3})"),
        compile(r"(?im:^to)\s*:\s*([A-Z][A-Za-z'.-]*(?:[ ][A-Z][A-Za-z'.-]*){0,3})"),
    ]
});

/// Keeps the words before the first structural word. A candidate that starts
/// with one is rejected outright.
fn clean_name_candidate(raw: &str) -> Option<String> {
    let kept: Vec<&str> = raw
        .split(' ')
        .take_while(|word| !word.is_empty() && !is_structural(word))
        .collect();

    let name = kept
        .join(" ")
        .trim_end_matches(|c| matches!(c, '.' | '-' | '\''))
        .to_string();

    (name.chars().filter(|c| c.is_alphabetic()).count() >= 2).then_some(name)
}

pub fn guest_from_label(text: &str) -> Option<String> {
    first_capture(text, &GUEST_LABELS, clean_name_candidate)
}

pub fn guest_from_salutation(text: &str) -> Option<String> {
    first_capture(text, &GUEST_SALUTATIONS, clean_name_candidate)
}

fn is_title_case_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            chars.all(|c| c.is_alphabetic() || matches!(c, '\'' | '.' | '-'))
        }
        _ => false,
    }
}

/// Last resort: the first line made of 2 to 4 title-case words that are not
/// structural vocabulary. Known to misfire on any two-word title-case line.
pub fn guest_from_short_line(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let words: Vec<&str> = line.split(' ').collect();
        if !(2..=4).contains(&words.len()) {
            return None;
        }
        if line.chars().any(|c| c.is_ascii_digit() || matches!(c, ':' | '@' | '#')) {
            return None;
        }
        if !words.iter().all(|w| is_title_case_word(w)) || words.iter().any(|w| is_structural(w)) {
            return None;
        }
        Some(line.to_string())
    })
}

pub fn extract_guest_name(text: &str) -> String {
    guest_from_label(text)
        .or_else(|| guest_from_salutation(text))
        .or_else(|| guest_from_short_line(text))
        .unwrap_or_else(absent)
}

// ════════════════════════════════════════════════════════════════════════════
// Hotel name
// ════════════════════════════════════════════════════════════════════════════

static HOTEL_LABELS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\bhotel(?:\s*name)?\s*[:#-]\s*([^\n]{3,80})"),
        compile(r"(?i)\bproperty(?:\s*name)?\s*[:#-]\s*([^\n]{3,80})"),
    ]
});

static HOTEL_PREPOSITIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i:\breservation\s+at)\s+(?:(?i:the)\s+)?([A-Z0-9][A-Za-z0-9&'().,\- ]{2,79})"),
        compile(r"(?i:\bstaying\s+at)\s+(?:(?i:the)\s+)?([A-Z0-9][A-Za-z0-9&'().,\- ]{2,79})"),
        compile(r"(?i:\bat\s+the)\s+([A-Z0-9][A-Za-z0-9&'().,\- ]{2,79})"),
    ]
});

/// Cuts a hotel candidate at the next structural keyword or clause break.
static HOTEL_TRAILING_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"(?i)\s*(?:[;!?|]|\b(?:rooms?|status|itinerary|itin|check[\s-]?in|check[\s-]?out",
        r"|for|guests?|phone|email|confirmation|dates?|nights?|arriv(?:al|ing|es)",
        r"|depart(?:ure|ing|s)?|says|said|and\s+the\s+guest)\b).*$",
    ))
});

fn clean_hotel_candidate(raw: &str) -> Option<String> {
    let truncated = HOTEL_TRAILING_CLAUSE.replace(raw, "");
    let hotel = truncated
        .trim()
        .trim_end_matches(|c| matches!(c, '.' | ',' | '-' | '(' | ':'))
        .trim()
        .to_string();

    (hotel.chars().count() >= 3).then_some(hotel)
}

pub fn hotel_from_label(text: &str) -> Option<String> {
    first_capture(text, &HOTEL_LABELS, clean_hotel_candidate)
}

pub fn hotel_from_preposition(text: &str) -> Option<String> {
    first_capture(text, &HOTEL_PREPOSITIONS, clean_hotel_candidate)
}

pub fn extract_hotel_name(text: &str) -> String {
    hotel_from_label(text)
        .or_else(|| hotel_from_preposition(text))
        .unwrap_or_else(absent)
}

// ════════════════════════════════════════════════════════════════════════════
// Tags
// ════════════════════════════════════════════════════════════════════════════

/// Tags in [`Tag::ALL`] order; each appears at most once.
pub fn extract_tags(signals: &KeywordSignals) -> Vec<Tag> {
    Tag::ALL
        .into_iter()
        .filter(|tag| match tag {
            Tag::Refund => signals.refund,
            Tag::Chargeback => signals.chargeback,
            Tag::CallReview => signals.call_review,
            Tag::Escalation => signals.escalation,
            Tag::NonRefundable => signals.non_refundable,
            Tag::PhoneNumber => signals.phone_number,
        })
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Shared
// ════════════════════════════════════════════════════════════════════════════

/// Walks patterns in order and, within a pattern, matches left to right;
/// returns the first capture group 1 that `accept` keeps.
fn first_capture<F>(text: &str, patterns: &[Regex], accept: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    patterns.iter().find_map(|pattern| {
        pattern
            .captures_iter(text)
            .find_map(|caps| caps.get(1).and_then(|m| accept(m.as_str())))
    })
}
