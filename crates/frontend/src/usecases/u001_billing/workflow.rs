//! Async driver for catalog refresh and invoice submission

use super::catalog::CatalogLoader;
use super::session::{BillingSession, SessionHandle, SubmissionOutcome};
use super::submitter::{BillingError, InvoiceSubmitter};
use crate::shared::api_client::{ApiClient, ApiError, Transport};

#[derive(Debug, Clone)]
pub struct BillingWorkflow<T> {
    client: ApiClient<T>,
}

impl<T: Transport> BillingWorkflow<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Reload products and customers. Safe to call at any time; a failure
    /// only produces a notice.
    pub async fn refresh_catalog<H: SessionHandle>(&self, session: &H) {
        if session
            .with_session(BillingSession::begin_catalog_refresh)
            .is_none()
        {
            return;
        }
        let result = CatalogLoader::new(&self.client).load().await;
        session.with_session(|s| s.apply_catalog(result));
    }

    /// Validate, send one creation request, reconcile.
    ///
    /// On success the receipt is shown and the cart cleared before the
    /// catalog refresh starts; a failing refresh does not undo either.
    pub async fn submit<H: SessionHandle>(&self, session: &H) -> Result<i64, BillingError> {
        let draft = session
            .with_session(BillingSession::begin_submission)
            .ok_or(BillingError::SessionClosed)??;

        let result = InvoiceSubmitter::new(&self.client).send(&draft).await;

        let outcome = session
            .with_session(|s| s.complete_submission(result))
            .ok_or(BillingError::SessionClosed)?;
        match outcome {
            SubmissionOutcome::Confirmed { invoice_id } => {
                self.refresh_catalog(session).await;
                Ok(invoice_id)
            }
            SubmissionOutcome::Failed(e) => Err(e),
        }
    }

    /// Refresh the catalog after a successful maintenance call (restock,
    /// delete, ...) and hand the call's result back
    pub async fn refresh_after<H: SessionHandle, R>(
        &self,
        session: &H,
        result: Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        if result.is_ok() {
            session.with_session(BillingSession::mark_catalog_stale);
            self.refresh_catalog(session).await;
        }
        result
    }
}
