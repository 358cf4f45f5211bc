use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::shared::app_context::{AppContext, AppPage};
use crate::shared::config::Config;
use crate::usecases::u001_billing::BillingPage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    view! {
        <ConfigProvider>
            <div class="app">
                <header class="app__header">
                    <span class="app__brand">"SmartPOS"</span>
                    <nav class="app__nav">
                        {AppPage::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <Button
                                        appearance=Signal::derive(move || {
                                            if ctx.page.get() == page {
                                                ButtonAppearance::Primary
                                            } else {
                                                ButtonAppearance::Subtle
                                            }
                                        })
                                        on_click=move |_| ctx.open(page)
                                    >
                                        {page.title()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </header>
                <main class="app__main">
                    {move || match ctx.page.get() {
                        AppPage::Billing => view! { <BillingPage /> }.into_any(),
                        AppPage::Inventory => view! { <ProductList /> }.into_any(),
                        AppPage::Customers => view! { <CustomerList /> }.into_any(),
                    }}
                </main>
            </div>
        </ConfigProvider>
    }
}
