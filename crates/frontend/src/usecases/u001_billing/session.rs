//! Billing session: the state behind the billing page.
//!
//! All transitions here are synchronous. The network half of the protocol
//! lives in `workflow`, which reaches the session through `SessionHandle` and
//! never holds it across an await.

use super::cart::Cart;
use super::catalog::{Catalog, CatalogState};
use super::presenter::ReceiptPresenter;
use super::submitter::{BillingError, InvoiceDraft, SubmissionState};
use crate::shared::api_client::ApiError;
use crate::shared::notice::Notice;
use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a002_customer::aggregate::CustomerId;
use contracts::domain::a003_invoice::InvoiceReceipt;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Confirmed { invoice_id: i64 },
    Failed(BillingError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingSession {
    cart: Cart,
    catalog: CatalogState,
    presenter: ReceiptPresenter,
    submission: SubmissionState,
    customer: Option<CustomerId>,
    notice: Option<Notice>,
}

impl BillingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn receipt(&self) -> Option<&InvoiceReceipt> {
        self.presenter.current()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // === Customer ===

    pub fn selected_customer(&self) -> Option<CustomerId> {
        self.customer
    }

    pub fn select_customer(&mut self, customer: Option<CustomerId>) {
        self.customer = customer;
        if customer.is_some() {
            self.clear_error_notice();
        }
    }

    // === Cart ===

    /// Add one unit of a catalog product. Unknown or out-of-stock products
    /// are refused with a notice.
    pub fn add_product(&mut self, id: ProductId) -> bool {
        let Some(product) = self.catalog.find_product(id) else {
            self.notice = Some(Notice::error("Product is not in the loaded catalog"));
            return false;
        };
        if !product.in_stock() {
            self.notice = Some(Notice::error(format!("{} is out of stock", product.name)));
            return false;
        }
        self.cart.add(product);
        self.clear_error_notice();
        true
    }

    pub fn set_quantity(&mut self, id: ProductId, qty: i64) {
        self.cart.set_quantity(id, qty);
    }

    pub fn increment(&mut self, id: ProductId) {
        self.cart.increment(id);
    }

    pub fn decrement(&mut self, id: ProductId) {
        self.cart.decrement(id);
    }

    pub fn remove_line(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    // === Submission ===

    /// Validate and snapshot the cart; moves to `Submitting` on success
    pub fn begin_submission(&mut self) -> Result<InvoiceDraft, BillingError> {
        if self.is_submitting() {
            log::warn!("submission ignored: a request is already in flight");
            return Err(BillingError::SubmissionInFlight);
        }

        match InvoiceDraft::prepare(self.customer, &self.cart) {
            Ok(draft) => {
                self.submission = SubmissionState::Submitting;
                self.notice = None;
                Ok(draft)
            }
            Err(failure) => {
                self.notice = Some(Notice::error(failure.to_string()));
                Err(failure.into())
            }
        }
    }

    /// Apply the server's answer. Success shows the receipt, then clears the
    /// cart and marks the catalog stale. Failure leaves the cart as it was.
    pub fn complete_submission(
        &mut self,
        result: Result<InvoiceReceipt, BillingError>,
    ) -> SubmissionOutcome {
        self.submission = SubmissionState::Idle;
        match result {
            Ok(receipt) => {
                let invoice_id = receipt.invoice_id;
                let text = receipt
                    .message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("Invoice #{} created", invoice_id));
                self.presenter.show(receipt);
                self.cart.clear();
                self.catalog.mark_stale();
                self.notice = Some(Notice::info(text));
                SubmissionOutcome::Confirmed { invoice_id }
            }
            Err(e) => {
                log::error!("{}", e);
                self.notice = Some(Notice::error(e.to_string()));
                SubmissionOutcome::Failed(e)
            }
        }
    }

    pub fn dismiss_receipt(&mut self) {
        self.presenter.dismiss();
    }

    // === Catalog ===

    pub fn begin_catalog_refresh(&mut self) {
        self.catalog.begin_refresh();
    }

    pub fn mark_catalog_stale(&mut self) {
        self.catalog.mark_stale();
    }

    pub fn apply_catalog(&mut self, result: Result<Catalog, ApiError>) {
        if let Some(failure) = self.catalog.apply(result) {
            self.notice = Some(match self.notice.take() {
                // an invoice confirmation stays visible next to the load error
                Some(done) if !done.is_error() => Notice::error(format!(
                    "{}. {}",
                    done.text.trim_end_matches('.'),
                    failure.text
                )),
                _ => failure,
            });
            return;
        }
        if let Some(id) = self.customer {
            if self.catalog.find_customer(id).is_none() {
                log::debug!("selected customer {} no longer listed", id);
                self.customer = None;
            }
        }
    }

    fn clear_error_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_error) {
            self.notice = None;
        }
    }
}

/// Mutable access to a session from async code. `None` means the owner is
/// gone (the page was unmounted).
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut BillingSession) -> R) -> Option<R>;
}

impl SessionHandle for RwSignal<BillingSession> {
    fn with_session<R>(&self, f: impl FnOnce(&mut BillingSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionHandle for Rc<RefCell<BillingSession>> {
    fn with_session<R>(&self, f: impl FnOnce(&mut BillingSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
