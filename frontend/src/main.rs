use shared::LoginResponse;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::header::{Header, Page};
use components::login_form::LoginForm;
use components::order_types::order_types_page::OrderTypesPage;
use components::orders::new_order_page::NewOrderPage;
use components::orders::order_list_container::OrderListContainer;
use hooks::use_restaurants::use_restaurants;
use services::api::ApiClient;
use services::config::ConsoleConfig;
use services::logging::Logger;
use services::storage;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let signed_in = use_state(|| storage::auth_token().is_some());

    let on_login = {
        let signed_in = signed_in.clone();
        Callback::from(move |response: LoginResponse| {
            storage::store_auth_token(response.access_token());
            if storage::selected_restaurant_id().is_none() {
                storage::store_selected_restaurant_id(response.default_restaurant_id());
            }
            signed_in.set(true);
        })
    };

    let on_logout = {
        let signed_in = signed_in.clone();
        Callback::from(move |_: ()| {
            Logger::info_with_component("app", "Signing out");
            storage::clear_auth_token();
            signed_in.set(false);
        })
    };

    if *signed_in {
        html! { <Console api_client={(*api_client).clone()} {on_logout} /> }
    } else {
        html! { <LoginForm api_client={(*api_client).clone()} {on_login} /> }
    }
}

#[derive(Properties, PartialEq)]
struct ConsoleProps {
    api_client: ApiClient,
    on_logout: Callback<()>,
}

/// Everything behind the login: header, navigation and the selected page
#[function_component(Console)]
fn console(props: &ConsoleProps) -> Html {
    let restaurants = use_restaurants(&props.api_client);
    let page = use_state(|| Page::Orders);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };
    let to_orders = {
        let page = page.clone();
        Callback::from(move |_: ()| page.set(Page::Orders))
    };

    let content = if let Some(error) = &restaurants.state.error {
        html! {
            <div class="error-message">
                {format!("Could not load restaurants: {}", error)}
            </div>
        }
    } else if let Some(restaurant) = restaurants.state.selected() {
        let key = restaurant.id.to_string();
        let api_client = props.api_client.clone();
        match *page {
            Page::Orders => html! {
                <OrderListContainer key={key} {api_client} restaurant={restaurant.clone()} />
            },
            Page::NewOrder => html! {
                <NewOrderPage
                    key={key}
                    {api_client}
                    restaurant_id={restaurant.id}
                    on_created={to_orders.clone()}
                    on_cancel={to_orders}
                />
            },
            Page::OrderTypes => html! {
                <OrderTypesPage key={key} {api_client} restaurant_id={restaurant.id} />
            },
        }
    } else if restaurants.state.loading {
        html! { <div class="loading">{"Loading restaurants..."}</div> }
    } else {
        html! { <div class="empty-state">{"Please select a restaurant"}</div> }
    };

    html! {
        <>
            <Header
                restaurants={restaurants.state.clone()}
                restaurant_actions={restaurants.actions.clone()}
                page={*page}
                {on_navigate}
                on_logout={props.on_logout.clone()}
            />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
        </>
    }
}

fn main() {
    let config = ConsoleConfig::default();
    Logger::init(config.log_level);
    Logger::info_with_component("app", &format!("Order console starting, API at {}", config.api_base()));
    yew::Renderer::<App>::new().render();
}
