use super::cart::CartLine;
use super::receipt_view::InvoiceReceiptView;
use crate::shared::app_context::use_app_context;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a002_customer::aggregate::CustomerId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn BillingPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let symbol = StoredValue::new(ctx.currency_symbol());

    // every entry into billing reloads products and customers
    ctx.refresh_catalog();

    let search = RwSignal::new(String::new());
    let customer_value = RwSignal::new(
        session
            .with_untracked(|s| s.selected_customer())
            .map(|id| id.as_string())
            .unwrap_or_default(),
    );

    // select -> session
    Effect::new(move |_| {
        let picked = CustomerId::from_selection(&customer_value.get());
        if session.with_untracked(|s| s.selected_customer()) != picked {
            session.update(|s| s.select_customer(picked));
        }
    });

    // session -> select (a refresh may drop a customer that vanished)
    Effect::new(move |_| {
        let wanted = session
            .with(|s| s.selected_customer())
            .map(|id| id.as_string())
            .unwrap_or_default();
        if customer_value.get_untracked() != wanted {
            customer_value.set(wanted);
        }
    });

    let is_loading = Memo::new(move |_| session.with(|s| s.catalog().is_loading()));
    let is_submitting = Memo::new(move |_| session.with(|s| s.is_submitting()));
    let has_receipt = Memo::new(move |_| session.with(|s| s.receipt().is_some()));

    let visible_products =
        move || session.with(|s| s.catalog().search_products(&search.get()));

    view! {
        <PageFrame page_id="u001_billing--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Billing"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=move || is_loading.get()
                        on_click=move |_| ctx.refresh_catalog()
                    >
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || {
                session
                    .with(|s| s.notice().cloned())
                    .map(|notice| {
                        view! {
                            <div class=notice.css_class()>
                                <span>{notice.text.clone()}</span>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    on_click=move |_| session.update(|s| s.clear_notice())
                                >
                                    "✕"
                                </Button>
                            </div>
                        }
                    })
            }}

            <div class="page__content billing">
                <Card class="billing__catalog">
                    <Flex gap=FlexGap::Small style="align-items:center;">
                        <Input value=search placeholder="Search by name or SKU" />
                        {move || is_loading.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                    </Flex>
                    <div class="table-wrapper">
                        <Table attr:style="width:100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"SKU"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                    <TableHeaderCell>"Stock"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    visible_products()
                                        .into_iter()
                                        .map(|p| view! { <ProductRow product=p symbol=symbol /> })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </Card>

                <Card class="billing__cart">
                    <div class="form__group">
                        <Label>"Customer"</Label>
                        <Select value=customer_value>
                            <option value="">"-- Select customer --"</option>
                            {move || {
                                session
                                    .with(|s| s.catalog().customers().to_vec())
                                    .into_iter()
                                    .map(|c| view! { <option value=c.id.as_string()>{c.label()}</option> })
                                    .collect_view()
                            }}
                        </Select>
                    </div>

                    <CartTable symbol=symbol />

                    <Flex justify=FlexJustify::SpaceBetween style="align-items:center;">
                        <strong class="billing__total">
                            "Total: "
                            {move || format_money(session.with(|s| s.cart().total()), &symbol.get_value())}
                        </strong>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=move || is_submitting.get()
                            on_click=move |_| ctx.submit_invoice()
                        >
                            {move || if is_submitting.get() { "Creating..." } else { "Create Invoice" }}
                        </Button>
                    </Flex>
                </Card>
            </div>

            <Show when=move || has_receipt.get()>
                <InvoiceReceiptView />
            </Show>
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductRow(product: Product, symbol: StoredValue<String>) -> impl IntoView {
    let session = use_app_context().session;
    let id = product.id;
    let in_stock = product.in_stock();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{product.name.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <code>{product.sku.clone()}</code>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span style="font-variant-numeric:tabular-nums;">
                        {format_money(product.price, &symbol.get_value())}
                    </span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    {if in_stock {
                        view! { <span>{product.stock}</span> }.into_any()
                    } else {
                        view! { <Badge color=BadgeColor::Danger>"Out of stock"</Badge> }.into_any()
                    }}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <Button
                    size=ButtonSize::Small
                    disabled=!in_stock
                    on_click=move |_| {
                        session.update(|s| {
                            s.add_product(id);
                        })
                    }
                >
                    "Add"
                </Button>
            </TableCell>
        </TableRow>
    }
}

#[component]
#[allow(non_snake_case)]
fn CartTable(symbol: StoredValue<String>) -> impl IntoView {
    let session = use_app_context().session;

    let set_quantity = move |id: ProductId, raw: String| {
        // blank or unparsable input removes nothing; wait for a number
        if let Ok(qty) = raw.trim().parse::<i64>() {
            session.update(|s| s.set_quantity(id, qty));
        }
    };

    view! {
        {move || {
            if session.with(|s| s.cart().is_empty()) {
                return view! {
                    <div class="billing__empty">"Cart is empty"</div>
                }
                .into_any();
            }
            let lines = session.with(|s| s.cart().lines().to_vec());
            view! {
                <Table attr:style="width:100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Item"</TableHeaderCell>
                            <TableHeaderCell>"Qty"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {lines
                            .into_iter()
                            .map(|line| {
                                let CartRow { id, name, quantity, price, total } =
                                    CartRow::new(&line, &symbol.get_value());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small style="align-items:center;">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| session.update(|s| s.decrement(id))
                                                >
                                                    "−"
                                                </Button>
                                                <input
                                                    class="billing__qty"
                                                    type="number"
                                                    min="0"
                                                    prop:value=quantity
                                                    on:change=move |ev| set_quantity(id, event_target_value(&ev))
                                                />
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| session.update(|s| s.increment(id))
                                                >
                                                    "+"
                                                </Button>
                                            </Flex>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {price}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong style="font-variant-numeric:tabular-nums;">
                                                    {total}
                                                </strong>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Transparent
                                                on_click=move |_| session.update(|s| s.remove_line(id))
                                            >
                                                "Remove"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            }
            .into_any()
        }}
    }
}

/// Owned display strings for one cart row
#[derive(Debug, Clone, PartialEq, Eq)]
struct CartRow {
    id: ProductId,
    name: String,
    quantity: String,
    price: String,
    total: String,
}

impl CartRow {
    fn new(line: &CartLine, symbol: &str) -> Self {
        Self {
            id: line.product_id,
            name: line.name.clone(),
            quantity: line.quantity.to_string(),
            price: format_money(line.unit_price, symbol),
            total: format_money(line.line_total(), symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_row_formats_price_and_line_total() {
        let line = CartLine {
            product_id: ProductId(4),
            name: "Basmati Rice 5kg".into(),
            unit_price: 625.0,
            quantity: 2,
        };
        let row = CartRow::new(&line, "₹");
        assert_eq!(
            row,
            CartRow {
                id: ProductId(4),
                name: "Basmati Rice 5kg".into(),
                quantity: "2".into(),
                price: "₹ 625.00".into(),
                total: "₹ 1,250.00".into(),
            }
        );
        // the source line is still usable after the row is built
        assert_eq!(line.line_total(), 1250.0);
    }
}
