use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id: {}", e))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Product as returned by `GET /products/list`.
///
/// Server-owned: the client never adjusts `stock` itself, it re-fetches the
/// list after any mutating call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Case-insensitive match on name or SKU; a blank query matches everything
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q) || self.sku.to_lowercase().contains(&q)
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Body of `POST /products/add` and `PUT /products/update/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.sku.trim().is_empty()
            || self.price.is_nan()
            || self.price <= 0.0
            || self.stock < 0
        {
            return Err("Please enter valid product details".into());
        }
        Ok(())
    }
}

/// Body of `PUT /products/restock/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockRequest {
    pub quantity: i64,
}

impl RestockRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity <= 0 {
            return Err("Restock quantity must be greater than zero".into());
        }
        Ok(())
    }
}
