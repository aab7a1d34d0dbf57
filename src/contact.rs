//! Customer contact fields on the order form.

use crate::commands::CustomerInfo;

pub const PHONE_DIGITS: usize = 10;

/// Reformat phone input as the customer types: keep digits only (at most ten)
/// and render them as `(555) 123-4567`, filling in progressively.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({}", digits),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// One of the three contact inputs on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone Number",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Name => "text",
            ContactField::Email => "email",
            ContactField::Phone => "tel",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Phone => "(555) 123-4567",
            _ => "",
        }
    }

    pub fn value(self, info: &CustomerInfo) -> &str {
        match self {
            ContactField::Name => &info.name,
            ContactField::Email => &info.email,
            ContactField::Phone => &info.phone,
        }
    }

    /// Store raw input; phone input is reformatted on the way in.
    pub fn set(self, info: &mut CustomerInfo, input: String) {
        match self {
            ContactField::Name => info.name = input,
            ContactField::Email => info.email = input,
            ContactField::Phone => info.phone = format_phone(&input),
        }
    }
}

/// Whether every contact field has something in it. The backend does the
/// stricter checks at submission.
pub fn is_complete(info: &CustomerInfo) -> bool {
    ContactField::ALL
        .iter()
        .all(|field| !field.value(info).trim().is_empty())
}
