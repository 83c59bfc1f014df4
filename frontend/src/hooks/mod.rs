pub mod use_order_types;
pub mod use_orders;
pub mod use_outside_click;
pub mod use_restaurants;
