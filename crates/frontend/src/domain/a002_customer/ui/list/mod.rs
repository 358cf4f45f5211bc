pub mod state;

use self::state::CustomerFormState;
use crate::domain::a002_customer::api::add_customer;
use crate::shared::app_context::use_app_context;
use crate::shared::notice::Notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    ctx.refresh_catalog();

    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let handle_add = move |_| {
        let form = CustomerFormState {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
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
            move |client| async move { add_customer(&client, &dto).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(customer) => {
                        notice.set(Some(Notice::info(format!("Added {}", customer.name))));
                        name.set(String::new());
                        phone.set(String::new());
                        email.set(String::new());
                    }
                    Err(e) => notice.set(Some(Notice::error(e.detail()))),
                }
            },
        );
    };

    view! {
        <PageFrame page_id="a002_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
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
                        <Label>"Phone"</Label>
                        <Input value=phone />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email placeholder="Optional" />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=move || busy.get()
                        on_click=handle_add
                    >
                        "Add Customer"
                    </Button>
                </Flex>
            </Card>

            <div class="table-wrapper">
                <Table attr:style="width:100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <TableHeaderCell>"Email"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            session
                                .with(|s| s.catalog().customers().to_vec())
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{c.name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{c.phone.unwrap_or_else(|| "-".into())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{c.email.unwrap_or_else(|| "-".into())}</TableCellLayout>
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
