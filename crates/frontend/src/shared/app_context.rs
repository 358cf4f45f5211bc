use crate::shared::api_client::{ApiClient, ApiError, GlooTransport};
use crate::shared::config::Config;
use crate::usecases::u001_billing::session::BillingSession;
use crate::usecases::u001_billing::workflow::BillingWorkflow;
use leptos::prelude::*;
use std::future::Future;

/// Top-level sections; switched from the header, no router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Billing,
    Inventory,
    Customers,
}

impl AppPage {
    pub const ALL: [AppPage; 3] = [AppPage::Billing, AppPage::Inventory, AppPage::Customers];

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::Billing => "Billing",
            AppPage::Inventory => "Inventory",
            AppPage::Customers => "Customers",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub page: RwSignal<AppPage>,
    pub session: RwSignal<BillingSession>,
    config: StoredValue<Config>,
    workflow: StoredValue<BillingWorkflow<GlooTransport>>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let transport = GlooTransport::from_config(&config.api);
        log::info!("API base: {}", transport.base_url());
        Self {
            page: RwSignal::new(AppPage::default()),
            session: RwSignal::new(BillingSession::new()),
            workflow: StoredValue::new(BillingWorkflow::new(ApiClient::new(transport))),
            config: StoredValue::new(config),
        }
    }

    pub fn currency_symbol(&self) -> String {
        self.config
            .with_value(|c| c.display.currency_symbol.clone())
    }

    pub fn workflow(&self) -> BillingWorkflow<GlooTransport> {
        self.workflow.get_value()
    }

    pub fn open(&self, page: AppPage) {
        self.page.set(page);
    }

    /// Fire-and-forget catalog reload
    pub fn refresh_catalog(&self) {
        let workflow = self.workflow();
        let session = self.session;
        wasm_bindgen_futures::spawn_local(async move {
            workflow.refresh_catalog(&session).await;
        });
    }

    pub fn submit_invoice(&self) {
        let workflow = self.workflow();
        let session = self.session;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = workflow.submit(&session).await {
                log::debug!("invoice not created: {}", e);
            }
        });
    }

    /// Run a maintenance call (add, restock, delete, ...). A successful call
    /// is followed by a catalog refresh before `done` sees the result.
    pub fn spawn_mutation<R, Fut>(
        &self,
        call: impl FnOnce(ApiClient<GlooTransport>) -> Fut + 'static,
        done: impl FnOnce(Result<R, ApiError>) + 'static,
    ) where
        R: 'static,
        Fut: Future<Output = Result<R, ApiError>> + 'static,
    {
        let workflow = self.workflow();
        let session = self.session;
        wasm_bindgen_futures::spawn_local(async move {
            let result = call(workflow.client().clone()).await;
            done(workflow.refresh_after(&session, result).await);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in context")
}
