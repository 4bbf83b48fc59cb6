//! Delivery form and validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Egyptian mobile numbers: 11 digits with an `01` prefix.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^01[0-9]{9}$").expect("phone pattern is valid"));

/// Required fields of the delivery form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Phone,
    AddressLine1,
    City,
}

impl Field {
    /// All validated fields, in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::AddressLine1, Field::City];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::AddressLine1 => "address_line1",
            Field::City => "city",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Phone => "Phone Number",
            Field::AddressLine1 => "Delivery Address",
            Field::City => "City",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validation failure on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: Field,
    /// Message to show next to the field.
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The delivery details captured on the checkout screen.
///
/// Transient: lives only as long as the checkout screen and is never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryForm {
    /// Customer name.
    pub name: String,
    /// Customer mobile number.
    pub phone: String,
    /// Street address.
    pub address_line1: String,
    /// Building, apartment, floor. Optional.
    pub address_line2: String,
    /// City.
    pub city: String,
    /// Delivery notes. Optional.
    pub notes: String,
}

impl DeliveryForm {
    /// Validate a single field, the on-blur check.
    pub fn validate_field(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some(FieldError::new(field, "Name is required"))
                } else if name.chars().count() < 3 {
                    Some(FieldError::new(field, "Name must be at least 3 characters"))
                } else {
                    None
                }
            }
            Field::Phone => {
                let phone = self.phone.trim();
                if phone.is_empty() {
                    Some(FieldError::new(field, "Phone number is required"))
                } else if !PHONE_PATTERN.is_match(&normalize_phone(phone)) {
                    Some(FieldError::new(
                        field,
                        "Enter a valid mobile number (01xxxxxxxxx)",
                    ))
                } else {
                    None
                }
            }
            Field::AddressLine1 => {
                let address = self.address_line1.trim();
                if address.is_empty() {
                    Some(FieldError::new(field, "Delivery address is required"))
                } else if address.chars().count() < 5 {
                    Some(FieldError::new(
                        field,
                        "Address must be at least 5 characters",
                    ))
                } else {
                    None
                }
            }
            Field::City => {
                let city = self.city.trim();
                if city.is_empty() {
                    Some(FieldError::new(field, "City is required"))
                } else if city.chars().count() < 2 {
                    Some(FieldError::new(field, "City must be at least 2 characters"))
                } else {
                    None
                }
            }
        }
    }

    /// Validate every field, the on-submit check.
    pub fn validate(&self) -> Vec<FieldError> {
        Field::ALL
            .iter()
            .filter_map(|field| self.validate_field(*field))
            .collect()
    }

    /// Check whether the form passes all field rules.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The phone number in canonical local form.
    ///
    /// International spellings (`+20…`, `0020…`) collapse to the local
    /// `01…` form; this is what goes into the order payload.
    pub fn normalized_phone(&self) -> String {
        normalize_phone(self.phone.trim())
    }
}

/// Collapse separators and an international prefix into local form.
fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if let Some(rest) = digits.strip_prefix("+20") {
        format!("0{rest}")
    } else if let Some(rest) = digits.strip_prefix("0020") {
        format!("0{rest}")
    } else {
        digits
    }
}
