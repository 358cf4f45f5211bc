//! Invoice presenter: holds the last confirmed receipt until dismissed.

use crate::shared::number_format::format_money;
use contracts::domain::a003_invoice::InvoiceReceipt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptPresenter {
    receipt: Option<InvoiceReceipt>,
}

impl ReceiptPresenter {
    pub fn show(&mut self, receipt: InvoiceReceipt) {
        self.receipt = Some(receipt);
    }

    /// Hide the receipt; the cart was already cleared on confirmation
    pub fn dismiss(&mut self) {
        self.receipt = None;
    }

    pub fn current(&self) -> Option<&InvoiceReceipt> {
        self.receipt.as_ref()
    }
}

/// One receipt line as displayed. Amounts are the server's figures,
/// formatted but never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRow {
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

pub fn receipt_rows(receipt: &InvoiceReceipt, currency_symbol: &str) -> Vec<ReceiptRow> {
    receipt
        .items
        .iter()
        .map(|line| ReceiptRow {
            name: line.name.clone(),
            quantity: line.quantity,
            price: format_money(line.price, currency_symbol),
            line_total: format_money(line.line_total, currency_symbol),
        })
        .collect()
}

pub fn receipt_total(receipt: &InvoiceReceipt, currency_symbol: &str) -> String {
    format!("Total: {}", format_money(receipt.total_amount, currency_symbol))
}

/// Open the browser print dialog for the current page
pub fn print_receipt() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.print() {
        log::error!("print failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_invoice::ReceiptLine;

    fn receipt(id: i64) -> InvoiceReceipt {
        InvoiceReceipt {
            invoice_id: id,
            customer_name: "Asha".into(),
            items: vec![],
            total_amount: 0.0,
            message: None,
        }
    }

    #[test]
    fn test_show_and_dismiss() {
        let mut presenter = ReceiptPresenter::default();
        assert!(presenter.current().is_none());

        presenter.show(receipt(7));
        assert_eq!(presenter.current().map(|r| r.invoice_id), Some(7));

        presenter.show(receipt(8));
        assert_eq!(presenter.current().map(|r| r.invoice_id), Some(8));

        presenter.dismiss();
        assert!(presenter.current().is_none());
    }

    #[test]
    fn test_rows_show_server_figures_as_received() {
        let mut r = receipt(7);
        r.items = vec![ReceiptLine {
            name: "Tea".into(),
            quantity: 3,
            price: 0.5,
            // deliberately not price * quantity
            line_total: 1.25,
        }];
        r.total_amount = 1.5;

        let rows = receipt_rows(&r, "₹");
        assert_eq!(
            rows,
            vec![ReceiptRow {
                name: "Tea".into(),
                quantity: 3,
                price: "₹ 0.50".into(),
                line_total: "₹ 1.25".into(),
            }]
        );
        assert_eq!(receipt_total(&r, "₹"), "Total: ₹ 1.50");
    }
}
