use shared::{OrderDraft, OrderPayload, OrderTypeQuery};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::order_form::OrderForm;
use crate::hooks::use_order_types::use_order_types;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct NewOrderPageProps {
    pub api_client: ApiClient,
    pub restaurant_id: i64,
    pub on_created: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(NewOrderPage)]
pub fn new_order_page(props: &NewOrderPageProps) -> Html {
    let initial = use_memo((), |_| OrderDraft::new(today()));
    let query = use_memo((), |_| OrderTypeQuery::default());
    let order_types = use_order_types(&props.api_client, props.restaurant_id, &query);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_created = props.on_created.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        Callback::from(move |payload: OrderPayload| {
            is_submitting.set(true);
            error_message.set(None);

            let api_client = api_client.clone();
            let on_created = on_created.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            spawn_local(async move {
                match api_client.create_order(&payload).await {
                    Ok(()) => {
                        Logger::info_with_component("new-order", &format!("Created order for {}", payload.full_name));
                        is_submitting.set(false);
                        on_created.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("new-order", &format!("Failed to create order: {}", e));
                        is_submitting.set(false);
                        error_message.set(Some("Could not create the order.".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <section class="order-form-page">
            <h2>{"New order"}</h2>
            {if let Some(error) = &order_types.state.error {
                html! { <div class="error-message">{error}</div> }
            } else {
                html! {}
            }}
            <OrderForm
                initial={(*initial).clone()}
                order_types={order_types.state.order_types.clone()}
                submit_label="Create order"
                submitting={*is_submitting}
                error={(*error_message).clone()}
                on_submit={on_submit}
                on_cancel={props.on_cancel.clone()}
            />
        </section>
    }
}
