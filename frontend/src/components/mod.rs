pub mod date_range_picker;
pub mod header;
pub mod login_form;
pub mod order_types;
pub mod orders;
pub mod restaurant_selector;
