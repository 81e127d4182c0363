//! Form binding and validation for the HTML surface.

use std::fmt;

use serde::Deserialize;

use super::{Product, ProductDraft, ProductId};

/// Raw fields of a submitted product form, as text.
///
/// Every field is optional so that binding never fails; `validate` decides
/// what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub in_stock: Option<String>,
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors found in one form. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<&Product> for ProductForm {
    /// Prefill a form with a stored product's values.
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id.to_string()),
            name: Some(product.name.clone()),
            description: Some(product.description.clone()),
            price: Some(product.price.to_string()),
            in_stock: Some(product.in_stock.to_string()),
        }
    }
}

impl ProductForm {
    /// The id the form claims to edit. Absent or unparseable yields `None`.
    pub fn declared_id(&self) -> Option<ProductId> {
        self.id.as_deref().and_then(|s| s.trim().parse().ok())
    }

    /// Whether the form carries a non-blank `id` field at all.
    pub fn supplies_id(&self) -> bool {
        self.id.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Check every field and build a draft, or report all failures at once.
    pub fn validate(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = required_text(&self.name);
        if name.is_none() {
            errors.push("name", "The Name field is required.");
        }

        let description = required_text(&self.description);
        if description.is_none() {
            errors.push("description", "The Description field is required.");
        }

        let price = match self.price.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push("price", "The Price field is required.");
                None
            }
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => {
                    errors.push("price", format!("The value '{}' is not a valid price.", raw));
                    None
                }
            },
        };

        let in_stock = match parse_checkbox(self.in_stock.as_deref()) {
            Some(flag) => flag,
            None => {
                errors.push("in_stock", "The InStock field must be true or false.");
                false
            }
        };

        match (name, description, price) {
            (Some(name), Some(description), Some(price)) if errors.is_empty() => {
                Ok(ProductDraft::new(name, description, price, in_stock))
            }
            _ => Err(errors),
        }
    }
}

fn required_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// An unchecked checkbox is not submitted at all, so absence means `false`.
fn parse_checkbox(value: Option<&str>) -> Option<bool> {
    match value.map(|s| s.trim().to_ascii_lowercase()) {
        None => Some(false),
        Some(s) if s.is_empty() || s == "false" => Some(false),
        Some(s) if s == "true" || s == "on" => Some(true),
        Some(_) => None,
    }
}
