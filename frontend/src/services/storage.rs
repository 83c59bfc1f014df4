use gloo::storage::{LocalStorage, Storage};

use crate::services::logging::Logger;

/// The bearer token is stored as a plain string, not JSON
const TOKEN_KEY: &str = "token";
const SELECTED_RESTAURANT_KEY: &str = "selectedRestaurantId";

pub fn auth_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_auth_token(token: &str) {
    if LocalStorage::raw().set_item(TOKEN_KEY, token).is_err() {
        Logger::warn_with_component("storage", "Failed to persist the session token");
    }
}

pub fn clear_auth_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Restaurant chosen in an earlier session, if any
pub fn selected_restaurant_id() -> Option<i64> {
    LocalStorage::get::<i64>(SELECTED_RESTAURANT_KEY).ok()
}

pub fn store_selected_restaurant_id(restaurant_id: Option<i64>) {
    match restaurant_id {
        Some(id) => {
            if let Err(e) = LocalStorage::set(SELECTED_RESTAURANT_KEY, id) {
                Logger::warn_with_component("storage", &format!("Failed to persist restaurant {}: {}", id, e));
            }
        }
        None => LocalStorage::delete(SELECTED_RESTAURANT_KEY),
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_auth_token_is_stored_raw() {
        store_auth_token("abc.def");
        assert_eq!(auth_token().as_deref(), Some("abc.def"));
        assert_eq!(LocalStorage::raw().get_item("token").unwrap().as_deref(), Some("abc.def"));

        clear_auth_token();
        assert_eq!(auth_token(), None);
    }

    #[wasm_bindgen_test]
    fn test_selected_restaurant_round_trip() {
        store_selected_restaurant_id(Some(12));
        assert_eq!(selected_restaurant_id(), Some(12));

        store_selected_restaurant_id(None);
        assert_eq!(selected_restaurant_id(), None);
    }
}
