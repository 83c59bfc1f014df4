use shared::Restaurant;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RestaurantSelectorProps {
    pub restaurants: Vec<Restaurant>,
    pub selected_id: Option<i64>,
    pub loading: bool,
    pub on_select: Callback<Option<i64>>,
}

#[function_component(RestaurantSelector)]
pub fn restaurant_selector(props: &RestaurantSelectorProps) -> Html {
    let on_change = props.on_select.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value().parse::<i64>().ok()
    });

    html! {
        <div class="restaurant-selector">
            <label for="restaurant-select">{"Restaurant"}</label>
            <select id="restaurant-select" onchange={on_change} disabled={props.loading}>
                <option value="" selected={props.selected_id.is_none()}>
                    {if props.loading { "Loading..." } else { "Select a restaurant" }}
                </option>
                {for props.restaurants.iter().map(|restaurant| html! {
                    <option
                        key={restaurant.id.to_string()}
                        value={restaurant.id.to_string()}
                        selected={props.selected_id == Some(restaurant.id)}
                    >
                        {&restaurant.name}
                    </option>
                })}
            </select>
        </div>
    }
}
