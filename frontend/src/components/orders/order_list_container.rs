use shared::{Order, OrderFilters, Restaurant};
use yew::prelude::*;

use super::edit_order_modal::EditOrderModal;
use super::order_filters::OrderFiltersBar;
use super::order_table::OrderTable;
use crate::hooks::use_orders::use_orders;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct OrderListContainerProps {
    pub api_client: ApiClient,
    pub restaurant: Restaurant,
}

/// Filter bar, error banner and order table for one restaurant
#[function_component(OrderListContainer)]
pub fn order_list_container(props: &OrderListContainerProps) -> Html {
    let filters = use_state(|| OrderFilters::initial(today()));
    let orders = use_orders(&props.api_client, Some(props.restaurant.id), &filters);

    let on_filters_change = {
        let filters = filters.clone();
        Callback::from(move |next: OrderFilters| {
            Logger::debug_with_component("order-list", &format!("Filters changed: {:?}", next));
            filters.set(next);
        })
    };

    let on_toggle_direction = {
        let filters = filters.clone();
        Callback::from(move |_: ()| {
            filters.set(OrderFilters {
                direction: filters.direction.toggled(),
                ..(*filters).clone()
            });
        })
    };

    let on_retry = orders.actions.refresh_orders.reform(|_: MouseEvent| ());

    let editing = use_state(|| Option::<Order>::None);
    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |order: Order| editing.set(Some(order)))
    };
    let on_edit_close = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };
    let on_edit_saved = {
        let editing = editing.clone();
        let refresh_orders = orders.actions.refresh_orders.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            refresh_orders.emit(());
        })
    };

    html! {
        <section class="order-list">
            <div class="order-list-header">
                <h2>{format!("Orders: {}", props.restaurant.name)}</h2>
            </div>

            <OrderFiltersBar
                filters={(*filters).clone()}
                order_types={orders.state.order_types.clone()}
                on_change={on_filters_change}
            />

            {if let Some(error) = &orders.state.error {
                html! {
                    <div class="error-message">
                        <span>{error}</span>
                        <button type="button" class="retry-button" onclick={on_retry}>{"Retry"}</button>
                    </div>
                }
            } else {
                html! {}
            }}

            <OrderTable
                orders={orders.state.orders.clone()}
                loading={orders.state.loading}
                direction={filters.direction}
                on_toggle_direction={on_toggle_direction}
                on_edit={on_edit}
            />

            <EditOrderModal
                api_client={props.api_client.clone()}
                order={(*editing).clone()}
                order_types={orders.state.order_types.clone()}
                on_saved={on_edit_saved}
                on_close={on_edit_close}
            />
        </section>
    }
}
