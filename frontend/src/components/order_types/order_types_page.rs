use shared::{format_amount, OrderType, OrderTypeQuery, PaginationParams};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::order_type_modal::OrderTypeModal;
use crate::hooks::use_order_types::use_order_types;
use crate::services::api::ApiClient;

const PAGE_SIZES: [u32; 3] = [10, 20, 50];

#[derive(Properties, PartialEq)]
pub struct OrderTypesPageProps {
    pub api_client: ApiClient,
    pub restaurant_id: i64,
}

#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Create,
    Edit(OrderType),
}

#[function_component(OrderTypesPage)]
pub fn order_types_page(props: &OrderTypesPageProps) -> Html {
    let query = use_state(|| OrderTypeQuery {
        pagination: PaginationParams { limit: 10, ..PaginationParams::default() },
        search: String::new(),
    });
    let modal = use_state(|| ModalState::Closed);
    let order_types = use_order_types(&props.api_client, props.restaurant_id, &query);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.search = input.value();
            next.pagination.page = 1;
            query.set(next);
        })
    };

    let on_limit = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(limit) = select.value().parse() {
                let mut next = (*query).clone();
                next.pagination.limit = limit;
                next.pagination.page = 1;
                query.set(next);
            }
        })
    };

    let sort_by = |column: &'static str| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(OrderTypeQuery {
                pagination: query.pagination.sorted_by(column),
                ..(*query).clone()
            });
        })
    };

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::Create))
    };

    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Closed))
    };

    let on_modal_success = {
        let modal = modal.clone();
        let refresh = order_types.actions.refresh.clone();
        Callback::from(move |_: ()| {
            modal.set(ModalState::Closed);
            refresh.emit(());
        })
    };

    let on_retry = order_types.actions.refresh.reform(|_: MouseEvent| ());

    let header_arrow = |column: &str| {
        if query.pagination.order_by == column {
            format!(" {}", query.pagination.order_direction.arrow())
        } else {
            String::new()
        }
    };

    let editing = match &*modal {
        ModalState::Edit(order_type) => Some(order_type.clone()),
        _ => None,
    };

    html! {
        <div class="order-types-page">
            <div class="page-toolbar">
                <h2>{"Order types"}</h2>
                <input
                    class="order-type-search"
                    type="text"
                    placeholder="Search order types..."
                    value={query.search.clone()}
                    oninput={on_search}
                />
                <select class="page-size" onchange={on_limit}>
                    {for PAGE_SIZES.into_iter().map(|size| html! {
                        <option value={size.to_string()} selected={query.pagination.limit == size}>
                            {format!("{} per page", size)}
                        </option>
                    })}
                </select>
                <button class="btn btn-primary add-order-type" onclick={on_add}>{"Add order type"}</button>
            </div>

            {if let Some(error) = &order_types.state.error {
                html! {
                    <div class="error-message">
                        <p>{error}</p>
                        <button onclick={on_retry}>{"Try again"}</button>
                    </div>
                }
            } else {
                html! {}
            }}

            {if order_types.state.loading {
                html! { <div class="loading">{"Loading order types..."}</div> }
            } else {
                html! {
                    <table class="order-types-table">
                        <thead>
                            <tr>
                                <th class="id">{"ID"}</th>
                                <th class="sortable sort-name" onclick={sort_by("name")}>
                                    {format!("Name{}", header_arrow("name"))}
                                </th>
                                <th class="sortable sort-price numeric" onclick={sort_by("price")}>
                                    {format!("Price{}", header_arrow("price"))}
                                </th>
                                <th>{"Active"}</th>
                                <th class="actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {if order_types.state.order_types.is_empty() {
                                html! { <tr><td class="empty" colspan="5">{"No order types found"}</td></tr> }
                            } else {
                                html! {
                                    <>
                                        {for order_types.state.order_types.iter().map(|order_type| {
                                            view_row(order_type, &modal, &order_types.actions.set_active, &order_types.actions.delete)
                                        })}
                                    </>
                                }
                            }}
                        </tbody>
                    </table>
                }
            }}

            <OrderTypeModal
                api_client={props.api_client.clone()}
                restaurant_id={props.restaurant_id}
                is_open={*modal != ModalState::Closed}
                editing={editing}
                on_success={on_modal_success}
                on_close={on_modal_close}
            />
        </div>
    }
}

fn view_row(
    order_type: &OrderType,
    modal: &UseStateHandle<ModalState>,
    set_active: &Callback<(i64, bool)>,
    delete: &Callback<i64>,
) -> Html {
    let id = order_type.id;

    let on_active = set_active.reform(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (id, input.checked())
    });

    let on_edit = {
        let modal = modal.clone();
        let order_type = order_type.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::Edit(order_type.clone())))
    };

    let on_delete = {
        let delete = delete.clone();
        let name = order_type.name.clone();
        Callback::from(move |_: MouseEvent| {
            if gloo::dialogs::confirm(&format!("Delete order type \"{}\"?", name)) {
                delete.emit(id);
            }
        })
    };

    html! {
        <tr key={id}>
            <td class="id">{id}</td>
            <td>{&order_type.name}</td>
            <td class="numeric">{format_amount(order_type.price)}</td>
            <td>
                <input type="checkbox" class="active-toggle" checked={order_type.is_active} onchange={on_active} />
            </td>
            <td class="actions">
                <button class="btn btn-secondary edit-order-type" onclick={on_edit}>{"Edit"}</button>
                <button class="btn btn-danger delete-order-type" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
