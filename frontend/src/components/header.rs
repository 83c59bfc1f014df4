use yew::prelude::*;

use super::restaurant_selector::RestaurantSelector;
use crate::hooks::use_restaurants::{RestaurantsState, UseRestaurantsActions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Orders,
    NewOrder,
    OrderTypes,
}

impl Page {
    pub const NAV: [Page; 3] = [Page::Orders, Page::NewOrder, Page::OrderTypes];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Orders => "Orders",
            Page::NewOrder => "New order",
            Page::OrderTypes => "Order types",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub restaurants: RestaurantsState,
    pub restaurant_actions: UseRestaurantsActions,
    pub page: Page,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let title = match props.restaurants.selected() {
        Some(restaurant) => format!("{} {}", restaurant.name, props.page.label()),
        None => "Order Console".to_string(),
    };

    let on_logout = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <header class="header">
            <div class="container">
                <h1>{title}</h1>
                <nav class="header-nav">
                    {for Page::NAV.into_iter().map(|page| {
                        let onclick = props.on_navigate.reform(move |_: MouseEvent| page);
                        let class = classes!("nav-link", (page == props.page).then_some("active"));
                        html! { <button {class} {onclick}>{page.label()}</button> }
                    })}
                </nav>
                <div class="header-right">
                    <RestaurantSelector
                        restaurants={props.restaurants.restaurants.clone()}
                        selected_id={props.restaurants.selected_id}
                        loading={props.restaurants.loading}
                        on_select={props.restaurant_actions.select_restaurant.clone()}
                    />
                    <button class="btn btn-secondary logout" onclick={on_logout}>{"Log out"}</button>
                </div>
            </div>
        </header>
    }
}
