//! Checkout form validation
//!
//! Field-scoped validation, evaluated independently per field so every
//! failing field is reported in the same pass. A validation failure
//! blocks submission entirely; no network call is made.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use shared::models::{OrderPayload, OrderUser};

use crate::error::ClientError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

/// Fixed line (2-digit area code starting with 2-8, 7 trailing digits)
/// or mobile (09 + 8 digits)
static TEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[2-8]\d{7}|09\d{8})$").expect("valid tel pattern"));

/// Checkout failure
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more fields failed validation; no network call was made
    #[error("checkout form is invalid: {0}")]
    Invalid(#[from] FieldErrors),

    /// The order submit or the post-submit cart refresh failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Field-level validation errors, reported together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub name: Option<String>,
    pub tel: Option<String>,
    pub address: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.tel.is_none() && self.address.is_none()
    }

    /// Every field error as `(field, message)` pairs, in form order
    pub fn messages(&self) -> Vec<(&'static str, &str)> {
        [
            ("email", &self.email),
            ("name", &self.name),
            ("tel", &self.tel),
            ("address", &self.address),
        ]
        .into_iter()
        .filter_map(|(field, error)| error.as_deref().map(|message| (field, message)))
        .collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.messages() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Checkout form fields; all required except `message`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub email: String,
    pub name: String,
    pub tel: String,
    pub address: String,
    pub message: String,
}

impl CheckoutForm {
    /// Validate every field independently
    ///
    /// Returns the order payload on success, or every failing field's
    /// error at once.
    pub fn validate(&self) -> Result<OrderPayload, FieldErrors> {
        let errors = FieldErrors {
            email: validate_email(&self.email).err(),
            name: validate_required(&self.name, "name").err(),
            tel: validate_tel(&self.tel).err(),
            address: validate_required(&self.address, "address").err(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(OrderPayload {
            user: OrderUser {
                name: self.name.clone(),
                email: self.email.clone(),
                tel: self.tel.clone(),
                address: self.address.clone(),
            },
            message: self.message.clone(),
        })
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn validate_required(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), String> {
    validate_required(value, "email")?;
    if !EMAIL_RE.is_match(value) {
        return Err("email format is invalid".to_string());
    }
    Ok(())
}

fn validate_tel(value: &str) -> Result<(), String> {
    validate_required(value, "tel")?;
    if !TEL_RE.is_match(value) {
        return Err("tel must be a valid phone number".to_string());
    }
    Ok(())
}
