pub mod state;

use self::state::{parse_restock, ProductFormState};
use crate::domain::a001_product::api::{add_product, delete_product, restock_product, update_product};
use crate::shared::app_context::use_app_context;
use crate::shared::notice::Notice;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let symbol = StoredValue::new(ctx.currency_symbol());
    ctx.refresh_catalog();

    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let editing = RwSignal::new(None::<ProductId>);
    let name = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());

    let fill_form = move |form: ProductFormState| {
        editing.set(form.editing);
        name.set(form.name);
        sku.set(form.sku);
        price.set(form.price);
        stock.set(form.stock);
    };

    let handle_save = move |_| {
        let form = ProductFormState {
            editing: editing.get_untracked(),
            name: name.get_untracked(),
            sku: sku.get_untracked(),
            price: price.get_untracked(),
            stock: stock.get_untracked(),
        };
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                notice.set(Some(Notice::error(msg)));
                return;
            }
        };

        busy.set(true);
        ctx.spawn_mutation(
            move |client| async move {
                match form.editing {
                    Some(id) => update_product(&client, id, &dto).await,
                    None => add_product(&client, &dto).await,
                }
            },
            move |result| {
                busy.set(false);
                match result {
                    Ok(product) => {
                        notice.set(Some(Notice::info(format!("Saved {}", product.name))));
                        fill_form(ProductFormState::default());
                    }
                    Err(e) => notice.set(Some(Notice::error(e.detail()))),
                }
            },
        );
    };

    let handle_delete = move |product: Product| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {}?", product.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = product.id;
        ctx.spawn_mutation(
            move |client| async move { delete_product(&client, id).await },
            move |result| match result {
                Ok(()) => {
                    notice.set(Some(Notice::info(format!("Deleted {}", product.name))));
                    if editing.get_untracked() == Some(id) {
                        fill_form(ProductFormState::default());
                    }
                }
                Err(e) => notice.set(Some(Notice::error(e.detail()))),
            },
        );
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.refresh_catalog()>
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || notice.get().map(|n| view! { <div class=n.css_class()>{n.text.clone()}</div> })}

            <Card>
                <Flex gap=FlexGap::Small style="align-items:flex-end;flex-wrap:wrap;">
                    <div class="form__group">
                        <Label>"Name"</Label>
                        <Input value=name />
                    </div>
                    <div class="form__group">
                        <Label>"SKU"</Label>
                        <Input value=sku />
                    </div>
                    <div class="form__group">
                        <Label>"Price"</Label>
                        <Input value=price input_type=InputType::Number />
                    </div>
                    <div class="form__group">
                        <Label>"Stock"</Label>
                        <Input value=stock input_type=InputType::Number />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=move || busy.get()
                        on_click=handle_save
                    >
                        {move || if editing.get().is_some() { "Update Product" } else { "Add Product" }}
                    </Button>
                    <Show when=move || editing.get().is_some()>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| fill_form(ProductFormState::default())
                        >
                            "Cancel"
                        </Button>
                    </Show>
                </Flex>
            </Card>

            <div class="table-wrapper">
                <Table attr:style="width:100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"SKU"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Stock"</TableHeaderCell>
                            <TableHeaderCell>"Restock"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            session
                                .with(|s| s.catalog().products().to_vec())
                                .into_iter()
                                .map(|p| {
                                    let for_edit = p.clone();
                                    let for_delete = p.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{p.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><code>{p.sku.clone()}</code></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(p.price, &symbol.get_value())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{p.stock}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RestockCell id=p.id notice=notice />
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| fill_form(ProductFormState::for_edit(&for_edit))
                                                    >
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Transparent
                                                        on_click=move |_| handle_delete(for_delete.clone())
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn RestockCell(id: ProductId, notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let ctx = use_app_context();
    let quantity = RwSignal::new(String::new());

    let handle_restock = move |_| {
        let request = match parse_restock(&quantity.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                notice.set(Some(Notice::error(msg)));
                return;
            }
        };
        ctx.spawn_mutation(
            move |client| async move { restock_product(&client, id, &request).await },
            move |result| match result {
                Ok(product) => {
                    quantity.set(String::new());
                    notice.set(Some(Notice::info(format!(
                        "{} restocked, {} in stock",
                        product.name, product.stock
                    ))));
                }
                Err(e) => notice.set(Some(Notice::error(e.detail()))),
            },
        );
    };

    view! {
        <Flex gap=FlexGap::Small style="align-items:center;">
            <Input value=quantity input_type=InputType::Number attr:style="width:6em;" />
            <Button size=ButtonSize::Small on_click=handle_restock>"Restock"</Button>
        </Flex>
    }
}
