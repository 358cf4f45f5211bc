use crate::domain::a001_product::aggregate::ProductId;
use crate::domain::a002_customer::aggregate::CustomerId;
use serde::{Deserialize, Serialize};

/// One `(product_id, quantity)` pair of an invoice draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body of `POST /billing/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub customer_id: CustomerId,
    pub items: Vec<InvoiceItemRequest>,
}
