use shared::{OrderType, OrderTypeQuery, OrderTypeUpdate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const LOAD_ERROR: &str = "Could not load order types. Please try again.";

#[derive(Clone, PartialEq)]
pub struct OrderTypesState {
    pub order_types: Vec<OrderType>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseOrderTypesResult {
    pub state: OrderTypesState,
    pub actions: UseOrderTypesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseOrderTypesActions {
    pub refresh: Callback<()>,
    /// (order type id, active)
    pub set_active: Callback<(i64, bool)>,
    pub delete: Callback<i64>,
}

/// Order types of one restaurant, with the list's inline actions
#[hook]
pub fn use_order_types(api_client: &ApiClient, restaurant_id: i64, query: &OrderTypeQuery) -> UseOrderTypesResult {
    let order_types = use_state(Vec::<OrderType>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let generation = use_mut_ref(|| 0u64);

    let refresh = {
        let api_client = api_client.clone();
        let order_types = order_types.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((restaurant_id, query.clone()), move |_: (), (restaurant_id, query)| {
            *generation.borrow_mut() += 1;
            let request_id = *generation.borrow();

            let api_client = api_client.clone();
            let restaurant_id = *restaurant_id;
            let query = query.clone();
            let order_types = order_types.clone();
            let loading = loading.clone();
            let error = error.clone();
            let generation = generation.clone();

            spawn_local(async move {
                loading.set(true);
                let result = api_client.get_order_types(restaurant_id, &query).await;
                if *generation.borrow() != request_id {
                    return;
                }
                match result {
                    Ok(data) => {
                        Logger::debug_with_component("use-order-types", &format!("Loaded {} order types", data.len()));
                        order_types.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("use-order-types", &format!("Failed to fetch order types: {}", e));
                        error.set(Some(LOAD_ERROR.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    use_effect_with((restaurant_id, query.clone()), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let set_active = {
        let api_client = api_client.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        use_callback((restaurant_id, refresh), move |(order_type_id, is_active): (i64, bool), (restaurant_id, refresh)| {
            let api_client = api_client.clone();
            let update = OrderTypeUpdate::active(*restaurant_id, is_active);
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api_client.update_order_type(order_type_id, &update).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "use-order-types",
                            &format!("Order type {} active: {}", order_type_id, is_active),
                        );
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use-order-types", &format!("Failed to update status: {}", e));
                        error.set(Some("Could not update the status.".to_string()));
                    }
                }
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        use_callback(refresh, move |order_type_id: i64, refresh| {
            let api_client = api_client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api_client.delete_order_type(order_type_id).await {
                    Ok(()) => {
                        Logger::info_with_component("use-order-types", &format!("Deleted order type {}", order_type_id));
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use-order-types", &format!("Failed to delete order type: {}", e));
                        error.set(Some("Could not delete the order type.".to_string()));
                    }
                }
            });
        })
    };

    let state = OrderTypesState {
        order_types: (*order_types).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseOrderTypesResult {
        state,
        actions: UseOrderTypesActions { refresh, set_active, delete },
    }
}
