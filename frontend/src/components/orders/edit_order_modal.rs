use shared::{Order, OrderDraft, OrderPayload, OrderType};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::order_form::OrderForm;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EditOrderModalProps {
    pub api_client: ApiClient,
    /// Order being edited; nothing renders while `None`
    pub order: Option<Order>,
    pub order_types: Vec<OrderType>,
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(EditOrderModal)]
pub fn edit_order_modal(props: &EditOrderModalProps) -> Html {
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    // Reset state when another order is opened
    {
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        use_effect_with(props.order.as_ref().map(|order| order.id), move |_| {
            is_submitting.set(false);
            error_message.set(None);
            || ()
        });
    }

    let Some(order) = &props.order else {
        return html! {};
    };

    let initial = OrderDraft::from_order(order, &props.order_types);

    let on_submit = {
        let api_client = props.api_client.clone();
        let order_id = order.id;
        let on_saved = props.on_saved.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        Callback::from(move |payload: OrderPayload| {
            is_submitting.set(true);
            error_message.set(None);

            let api_client = api_client.clone();
            let on_saved = on_saved.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            spawn_local(async move {
                match api_client.update_order(order_id, &payload).await {
                    Ok(()) => {
                        Logger::info_with_component("edit-order", &format!("Updated order {}", order_id));
                        is_submitting.set(false);
                        on_saved.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("edit-order", &format!("Failed to update order {}: {}", order_id, e));
                        is_submitting.set(false);
                        error_message.set(Some("Could not update the order.".to_string()));
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{format!("Edit order #{}", order.id)}</h3>
                <OrderForm
                    initial={initial}
                    order_types={props.order_types.clone()}
                    submit_label="Save changes"
                    submitting={*is_submitting}
                    error={(*error_message).clone()}
                    on_submit={on_submit}
                    on_cancel={props.on_close.clone()}
                />
            </div>
        </div>
    }
}
