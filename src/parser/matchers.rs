//! Field matchers for free-text participant lines
//!
//! Each matcher finds the first occurrence of its pattern and returns the
//! matched value together with the text that remains once that occurrence is
//! cut out. Matchers know nothing about each other; ordering lives in
//! [`super::parse_line`].

use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

// Optional +1 country code, area code bare or in balanced parentheses, then
// 3-4 digits. A parenthesized area code may be followed by one space:
// "(123) 456-7890". Unbalanced forms like "555)123-4567" are not phones.
const PHONE_PATTERN: &str = r"(?:\+?1[-.]?)?(?:\([0-9]{3}\)\s?|[0-9]{3}[-.]?)[0-9]{3}[-.]?[0-9]{4}";

const AMOUNT_PATTERN: &str = r"\$?\s*([0-9]+(?:\.[0-9]{1,2})?)";

const NAME_SEPARATORS: &[char] = &[',', '|', ';'];

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern"))
}

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(AMOUNT_PATTERN).expect("amount pattern"))
}

/// Remove the byte range `start..end` from `text`
fn cut(text: &str, start: usize, end: usize) -> String {
    let mut rest = String::with_capacity(text.len() - (end - start));
    rest.push_str(&text[..start]);
    rest.push_str(&text[end..]);
    rest
}

fn take_first(re: &Regex, text: &str) -> (Option<String>, String) {
    match re.find(text) {
        Some(m) => (Some(m.as_str().to_string()), cut(text, m.start(), m.end())),
        None => (None, text.to_string()),
    }
}

/// Extract the first `local@domain.tld` address
pub fn extract_email(text: &str) -> (Option<String>, String) {
    take_first(email_regex(), text)
}

/// Extract the first North-American style phone number, as written
pub fn extract_phone(text: &str) -> (Option<String>, String) {
    take_first(phone_regex(), text)
}

/// Extract the first monetary amount
///
/// The returned value is the bare number (`"25.50"`); the removed text also
/// covers any leading `$` and whitespace.
pub fn extract_amount(text: &str) -> (Option<String>, String) {
    match amount_regex().captures(text) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| (m.start(), m.end()));
            let number = caps.get(1).map(|m| m.as_str().to_string());
            match whole {
                Some((start, end)) => (number, cut(text, start, end)),
                None => (None, text.to_string()),
            }
        }
        None => (None, text.to_string()),
    }
}

/// Turn leftover text into a display name
///
/// Separators become spaces, whitespace runs collapse, ends are trimmed.
pub fn clean_name(text: &str) -> String {
    text.replace(NAME_SEPARATORS, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
