use serde::{Deserialize, Serialize};

/// Line of a confirmed invoice, priced by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub line_total: f64,
}

/// Response of `POST /billing/create`.
///
/// Displayed verbatim: totals here are authoritative even if they disagree
/// with the cart total the client showed before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceReceipt {
    pub invoice_id: i64,
    pub customer_name: String,
    pub items: Vec<ReceiptLine>,
    pub total_amount: f64,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_decodes() {
        let json = serde_json::json!({
            "invoice_id": 7,
            "customer_name": "Asha",
            "items": [
                {"name": "Tea", "quantity": 2, "price": 100.0, "line_total": 200.0},
                {"name": "Sugar", "quantity": 1, "price": 50.0, "line_total": 50.0}
            ],
            "total_amount": 250.0,
            "message": "Invoice created successfully"
        });
        let r: InvoiceReceipt = serde_json::from_value(json).unwrap();
        assert_eq!(r.invoice_id, 7);
        assert_eq!(r.items.len(), 2);
        assert_eq!(r.total_amount, 250.0);
    }

    #[test]
    fn test_receipt_without_items_is_malformed() {
        let json = serde_json::json!({
            "invoice_id": 7,
            "customer_name": "Asha",
            "total_amount": 250.0
        });
        assert!(serde_json::from_value::<InvoiceReceipt>(json).is_err());
    }
}
