//! Submission-time checks on an order request.
//!
//! The form already clamps what the customer types; these checks repeat the
//! bounds against the catalog's rules so a request from anywhere is held to
//! the same limits.

use serde::Serialize;

use super::types::{CustomerInfo, CustomizationPayload, OrderRequest, FONTS};
use crate::catalog::{Limits, Product};

const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every problem with the request, in form order. Empty means valid.
pub fn validate_order(product: &Product, request: &OrderRequest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_customization(product, request.customization.as_ref(), &mut issues);
    check_customer(&request.customer, &mut issues);
    if !request.pickup_confirmed {
        issues.push(ValidationIssue::new(
            "pickup_confirmed",
            "Please confirm you understand this is pickup only.",
        ));
    }
    issues
}

fn check_customer(customer: &CustomerInfo, issues: &mut Vec<ValidationIssue>) {
    if customer.name.trim().is_empty() {
        issues.push(ValidationIssue::new("name", "Please enter your full name"));
    }

    let email = customer.email.trim();
    if email.is_empty() {
        issues.push(ValidationIssue::new("email", "Please enter your email"));
    } else if !is_email_shaped(email) {
        issues.push(ValidationIssue::new(
            "email",
            "Please enter a valid email address",
        ));
    }

    if phone_digits(&customer.phone) != PHONE_DIGITS {
        issues.push(ValidationIssue::new(
            "phone",
            "Please enter a 10-digit phone number",
        ));
    }
}

fn check_customization(
    product: &Product,
    payload: Option<&CustomizationPayload>,
    issues: &mut Vec<ValidationIssue>,
) {
    match (product.limits(), payload) {
        (Limits::None, _) => {}
        (
            Limits::Names {
                max_names,
                max_chars_per_name,
            },
            Some(CustomizationPayload::Names { names, font }),
        ) => {
            if names.is_empty() {
                issues.push(ValidationIssue::new(
                    "customization",
                    "Please enter at least one name",
                ));
            } else if names.iter().any(|n| n.trim().is_empty()) {
                issues.push(ValidationIssue::new(
                    "customization",
                    "Names cannot be blank",
                ));
            }
            if names.len() > max_names {
                issues.push(ValidationIssue::new(
                    "customization",
                    format!("Enter no more than {} names", max_names),
                ));
            }
            if names.iter().any(|n| n.chars().count() > max_chars_per_name) {
                issues.push(ValidationIssue::new(
                    "customization",
                    format!("Names must be {} characters or fewer", max_chars_per_name),
                ));
            }
            if !FONTS.contains(&font.as_str()) {
                issues.push(ValidationIssue::new(
                    "customization",
                    "Please choose an engraving font",
                ));
            }
        }
        (Limits::Names { .. }, _) => {
            issues.push(ValidationIssue::new(
                "customization",
                format!("Please add names to personalize your {}", product.name),
            ));
        }
        (Limits::Text { max_chars }, Some(CustomizationPayload::Text { text })) => {
            if text.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    "customization",
                    "Please enter your custom text",
                ));
            } else if text.chars().count() > max_chars {
                issues.push(ValidationIssue::new(
                    "customization",
                    format!("Custom text must be {} characters or fewer", max_chars),
                ));
            }
        }
        (Limits::Text { .. }, _) => {
            issues.push(ValidationIssue::new(
                "customization",
                format!("Please add your text to personalize your {}", product.name),
            ));
        }
    }
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

/// `local@domain.tld` with no whitespace.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
