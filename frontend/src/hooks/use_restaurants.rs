use shared::{PaginationParams, Restaurant};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage::{selected_restaurant_id, store_selected_restaurant_id};

#[derive(Clone, PartialEq)]
pub struct RestaurantsState {
    pub restaurants: Vec<Restaurant>,
    pub selected_id: Option<i64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RestaurantsState {
    pub fn selected(&self) -> Option<&Restaurant> {
        let id = self.selected_id?;
        self.restaurants.iter().find(|restaurant| restaurant.id == id)
    }
}

pub struct UseRestaurantsResult {
    pub state: RestaurantsState,
    pub actions: UseRestaurantsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseRestaurantsActions {
    pub select_restaurant: Callback<Option<i64>>,
}

/// Restaurant list plus the persisted selection
#[hook]
pub fn use_restaurants(api_client: &ApiClient) -> UseRestaurantsResult {
    let restaurants = use_state(Vec::<Restaurant>::new);
    let selected_id = use_state(selected_restaurant_id);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let api_client = api_client.clone();
        let restaurants = restaurants.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_restaurants(&PaginationParams::default()).await {
                    Ok(data) => {
                        Logger::info_with_component("use-restaurants", &format!("Loaded {} restaurants", data.len()));
                        restaurants.set(data);
                    }
                    Err(e) => {
                        Logger::error_with_component("use-restaurants", &format!("Failed to fetch restaurants: {}", e));
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let select_restaurant = {
        let selected_id = selected_id.clone();
        use_callback((), move |restaurant_id: Option<i64>, _| {
            store_selected_restaurant_id(restaurant_id);
            selected_id.set(restaurant_id);
        })
    };

    let state = RestaurantsState {
        restaurants: (*restaurants).clone(),
        selected_id: *selected_id,
        loading: *loading,
        error: (*error).clone(),
    };

    UseRestaurantsResult {
        state,
        actions: UseRestaurantsActions { select_restaurant },
    }
}
