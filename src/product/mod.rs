//! Product - the catalog's single entity and its input shapes.
//!
//! `Product` is what the store owns. `ProductDraft` carries the four mutable
//! fields (JSON bodies deserialize into it), and `ProductForm` carries the raw
//! text of a submitted HTML form until it is validated.
//!
//! ## Example
//!
//! ```ignore
//! use product_catalog::{ProductDraft, ProductForm};
//!
//! let draft = ProductDraft::new("Pen", "Blue ink", 1.5, true);
//!
//! let form = ProductForm {
//!     name: Some("Pen".into()),
//!     description: Some("Blue ink".into()),
//!     price: Some("1.5".into()),
//!     ..ProductForm::default()
//! };
//! assert!(form.validate().is_ok());
//! ```

mod form;

use serde::{Deserialize, Serialize};

pub use form::{FieldError, ProductForm, ValidationErrors};

/// Store-assigned product identifier.
pub type ProductId = i64;

/// A stored product.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub in_stock: bool,
}

impl Product {
    /// Overwrite every mutable field with the draft's values.
    ///
    /// Fields are replaced wholesale, never merged. The id is left untouched.
    pub fn overwrite(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.description = draft.description;
        self.in_stock = draft.in_stock;
    }

    /// Copy of the mutable fields, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}

/// The mutable fields of a product, without an id.
///
/// This is the JSON API body type. Any `id` key in a body is ignored and
/// missing keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub in_stock: bool,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            in_stock,
        }
    }

    /// Parse a JSON request body.
    ///
    /// An empty body, a literal `null` and malformed JSON all yield `None`.
    pub fn from_json_body(body: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Option<Self>>(body).ok().flatten()
    }

    /// Attach a store-assigned id.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}

/// Predicate over products, evaluated by the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductFilter {
    /// Products whose `in_stock` equals the flag.
    InStock(bool),
    /// Products whose price is at least the bound.
    MinPrice(f64),
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match *self {
            ProductFilter::InStock(status) => product.in_stock == status,
            ProductFilter::MinPrice(min_price) => product.price >= min_price,
        }
    }
}
