pub mod edit_order_modal;
pub mod new_order_page;
pub mod order_filters;
pub mod order_form;
pub mod order_list_container;
pub mod order_table;
