use super::presenter::{print_receipt, receipt_rows, receipt_total};
use crate::shared::app_context::use_app_context;
use leptos::prelude::*;
use thaw::*;

/// Printable receipt for the last confirmed invoice. Amounts are the
/// server's figures, shown as received.
#[component]
#[allow(non_snake_case)]
pub fn InvoiceReceiptView() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let symbol = ctx.currency_symbol();

    move || {
        let Some(receipt) = session.with(|s| s.receipt().cloned()) else {
            return ().into_any();
        };
        let rows = receipt_rows(&receipt, &symbol);
        let total = receipt_total(&receipt, &symbol);
        let title = format!("Invoice #{}", receipt.invoice_id);
        let customer = format!("Customer: {}", receipt.customer_name);
        let message = receipt.message.clone();

        view! {
            <Card class="receipt">
                <div class="receipt__header">
                    <h2 class="receipt__title">{title}</h2>
                    <span>{customer}</span>
                </div>
                {message.map(|m| view! { <p class="receipt__message">{m}</p> })}
                <Table attr:style="width:100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Item"</TableHeaderCell>
                            <TableHeaderCell>"Qty"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{row.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.quantity}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.price}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.line_total}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
                <div class="receipt__total">
                    <strong>{total}</strong>
                </div>
                <Flex gap=FlexGap::Small class="receipt__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| print_receipt()>
                        "Print"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| session.update(|s| s.dismiss_receipt())
                    >
                        "Close"
                    </Button>
                </Flex>
            </Card>
        }
        .into_any()
    }
}
