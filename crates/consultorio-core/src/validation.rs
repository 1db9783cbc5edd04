//! Field validators for patient records.

use std::sync::OnceLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap())
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9\-\s+()]+$").unwrap())
}

/// A DNI is a numeric string of 7 or 8 digits.
pub fn is_valid_dni(dni: &str) -> bool {
    (7..=8).contains(&dni.len()) && dni.chars().all(|c| c.is_ascii_digit())
}

/// Names allow letters and spaces only, at least 2 characters after trimming.
pub fn is_valid_name(name: &str) -> bool {
    let stripped: String = name.chars().filter(|c| *c != ' ').collect();
    !stripped.is_empty()
        && stripped.chars().all(char::is_alphabetic)
        && name.trim().chars().count() >= 2
}

/// Phones allow digits, spaces, hyphens, plus and parentheses, with at
/// least 8 characters remaining once spaces and hyphens are stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();
    phone_regex().is_match(phone) && compact.chars().count() >= 8
}

/// Two-part local@domain.tld address.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Title-case a name: uppercase after every non-letter, lowercase otherwise.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
