pub mod order_type_modal;
pub mod order_types_page;
