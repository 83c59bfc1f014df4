use shared::{DateRange, LocationFilter, OrderFilters, OrderStatus, OrderType, StatusFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::date_range_picker::DateRangePicker;

#[derive(Properties, PartialEq)]
pub struct OrderFiltersBarProps {
    pub filters: OrderFilters,
    pub order_types: Vec<OrderType>,
    /// Receives a full copy of the filters with one field changed
    pub on_change: Callback<OrderFilters>,
}

#[function_component(OrderFiltersBar)]
pub fn order_filters_bar(props: &OrderFiltersBarProps) -> Html {
    let on_search = {
        let filters = props.filters.clone();
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            OrderFilters { search: input.value(), ..filters.clone() }
        })
    };

    let on_range = {
        let filters = props.filters.clone();
        props.on_change.reform(move |range: DateRange| OrderFilters {
            date_range: Some(range),
            ..filters.clone()
        })
    };

    let on_status = {
        let filters = props.filters.clone();
        props.on_change.reform(move |e: Event| OrderFilters {
            status: StatusFilter::from_value(&select_value(&e)),
            ..filters.clone()
        })
    };

    let on_order_type = {
        let filters = props.filters.clone();
        props.on_change.reform(move |e: Event| OrderFilters {
            order_type_id: select_value(&e).parse().ok(),
            ..filters.clone()
        })
    };

    let on_location = {
        let filters = props.filters.clone();
        props.on_change.reform(move |e: Event| OrderFilters {
            location: LocationFilter::from_value(&select_value(&e)),
            ..filters.clone()
        })
    };

    let selected_type = props.filters.order_type_id;

    html! {
        <div class="order-filters">
            <div class="filter search">
                <label for="order-search">{"Search"}</label>
                <input
                    id="order-search"
                    type="text"
                    placeholder="Search orders..."
                    value={props.filters.search.clone()}
                    oninput={on_search}
                />
            </div>

            <div class="filter">
                <label>{"Period"}</label>
                <DateRangePicker value={props.filters.date_range} on_change={on_range} />
            </div>

            <div class="filter">
                <label for="order-status">{"Status"}</label>
                <select id="order-status" onchange={on_status}>
                    <option value="all" selected={props.filters.status == StatusFilter::All}>{"All"}</option>
                    {for OrderStatus::KNOWN.into_iter().map(|status| {
                        let selected = props.filters.status == StatusFilter::Only(status.clone());
                        html! { <option value={status.as_str()} selected={selected}>{status.label()}</option> }
                    })}
                </select>
            </div>

            <div class="filter">
                <label for="order-type">{"Order type"}</label>
                <select id="order-type" onchange={on_order_type}>
                    <option value="all" selected={selected_type.is_none()}>{"All"}</option>
                    {for props.order_types.iter().map(|order_type| html! {
                        <option value={order_type.id.to_string()} selected={selected_type == Some(order_type.id)}>
                            {&order_type.name}
                        </option>
                    })}
                </select>
            </div>

            <div class="filter">
                <label for="order-location">{"Location"}</label>
                <select id="order-location" onchange={on_location}>
                    {for [LocationFilter::All, LocationFilter::Offsite, LocationFilter::InRestaurant].into_iter().map(|location| html! {
                        <option value={location.value()} selected={props.filters.location == location}>
                            {location_label(location)}
                        </option>
                    })}
                </select>
            </div>
        </div>
    }
}

fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

fn location_label(location: LocationFilter) -> &'static str {
    match location {
        LocationFilter::All => "All",
        LocationFilter::Offsite => "Offsite",
        LocationFilter::InRestaurant => "In restaurant",
    }
}
