use shared::{Order, OrderFilters, OrderType, OrderTypeQuery};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const LOAD_ERROR: &str = "Could not load orders. Please try again.";

#[derive(Clone, PartialEq)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub order_types: Vec<OrderType>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseOrdersResult {
    pub state: OrdersState,
    pub actions: UseOrdersActions,
}

#[derive(Clone)]
pub struct UseOrdersActions {
    pub refresh_orders: Callback<()>,
}

/// Orders and order types for one restaurant.
///
/// Orders are re-fetched whenever the restaurant or any filter changes.
/// Responses to superseded requests are dropped, so the table always shows
/// the result of the latest filters.
#[hook]
pub fn use_orders(api_client: &ApiClient, restaurant_id: Option<i64>, filters: &OrderFilters) -> UseOrdersResult {
    let orders = use_state(Vec::<Order>::new);
    let order_types = use_state(Vec::<OrderType>::new);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let generation = use_mut_ref(|| 0u64);

    let refresh_orders = {
        let api_client = api_client.clone();
        let orders = orders.clone();
        let loading = loading.clone();
        let error = error.clone();
        let generation = generation.clone();

        use_callback((restaurant_id, filters.clone()), move |_: (), (restaurant_id, filters)| {
            let Some(restaurant_id) = *restaurant_id else {
                orders.set(Vec::new());
                return;
            };

            *generation.borrow_mut() += 1;
            let request_id = *generation.borrow();

            let api_client = api_client.clone();
            let filters = filters.clone();
            let orders = orders.clone();
            let loading = loading.clone();
            let error = error.clone();
            let generation = generation.clone();

            spawn_local(async move {
                loading.set(true);
                let result = api_client.get_orders(restaurant_id, &filters).await;
                if *generation.borrow() != request_id {
                    Logger::debug_with_component("use-orders", &format!("Dropping stale response #{}", request_id));
                    return;
                }

                match result {
                    Ok(data) => {
                        Logger::debug_with_component("use-orders", &format!("Loaded {} orders", data.len()));
                        orders.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("use-orders", &format!("Failed to fetch orders: {}", e));
                        error.set(Some(LOAD_ERROR.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Order types only depend on the restaurant
    {
        let api_client = api_client.clone();
        let order_types = order_types.clone();
        use_effect_with(restaurant_id, move |restaurant_id| {
            match *restaurant_id {
                Some(restaurant_id) => spawn_local(async move {
                    match api_client.get_order_types(restaurant_id, &OrderTypeQuery::default()).await {
                        Ok(data) => order_types.set(data),
                        Err(e) => {
                            Logger::warn_with_component("use-orders", &format!("Failed to fetch order types: {}", e));
                        }
                    }
                }),
                None => order_types.set(Vec::new()),
            }
            || ()
        });
    }

    // Auto-refresh when the restaurant or filters change
    use_effect_with((restaurant_id, filters.clone()), {
        let refresh_orders = refresh_orders.clone();
        move |_| {
            refresh_orders.emit(());
            || ()
        }
    });

    let state = OrdersState {
        orders: (*orders).clone(),
        order_types: (*order_types).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseOrdersResult {
        state,
        actions: UseOrdersActions { refresh_orders },
    }
}
