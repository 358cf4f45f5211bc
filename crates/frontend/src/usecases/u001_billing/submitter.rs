//! Invoice submitter: validation, draft snapshot, and the creation request.

use super::api::create_invoice;
use super::cart::Cart;
use crate::shared::api_client::{ApiClient, ApiError, Transport};
use contracts::domain::a002_customer::aggregate::CustomerId;
use contracts::domain::a003_invoice::{CreateInvoiceRequest, InvoiceItemRequest, InvoiceReceipt};
use thiserror::Error;

/// Precondition failures, reported before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Please select a customer")]
    MissingCustomer,
    #[error("Cart is empty")]
    EmptyCart,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("An invoice is already being created")]
    SubmissionInFlight,

    #[error("Failed to create invoice: {0}")]
    Transport(String),

    #[error("Failed to create invoice: unexpected response ({0})")]
    DataShape(String),

    #[error("Billing session is no longer available")]
    SessionClosed,
}

impl From<ApiError> for BillingError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Decode(msg) => BillingError::DataShape(msg),
            other => BillingError::Transport(other.to_string()),
        }
    }
}

/// Snapshot of customer + cart taken when submission starts. Owned, so later
/// cart edits cannot reach a request that is already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft(CreateInvoiceRequest);

impl InvoiceDraft {
    /// Checks, in order: a customer is selected, the cart has lines
    pub fn prepare(customer: Option<CustomerId>, cart: &Cart) -> Result<Self, ValidationFailure> {
        let customer_id = customer.ok_or(ValidationFailure::MissingCustomer)?;
        if cart.is_empty() {
            return Err(ValidationFailure::EmptyCart);
        }
        Ok(Self(CreateInvoiceRequest {
            customer_id,
            items: cart.snapshot_items(),
        }))
    }

    pub fn customer_id(&self) -> CustomerId {
        self.0.customer_id
    }

    pub fn items(&self) -> &[InvoiceItemRequest] {
        &self.0.items
    }

    pub fn as_request(&self) -> &CreateInvoiceRequest {
        &self.0
    }
}

/// `Idle -> Submitting -> Idle`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

pub struct InvoiceSubmitter<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> InvoiceSubmitter<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Single creation request, no retry
    pub async fn send(&self, draft: &InvoiceDraft) -> Result<InvoiceReceipt, BillingError> {
        log::info!(
            "creating invoice for customer {} with {} line(s)",
            draft.customer_id(),
            draft.items().len()
        );
        let receipt = create_invoice(self.client, draft.as_request()).await?;
        log::info!("invoice #{} created", receipt.invoice_id);
        Ok(receipt)
    }
}
