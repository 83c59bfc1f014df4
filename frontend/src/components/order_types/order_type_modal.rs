use shared::{OrderType, OrderTypeDraft, OrderTypeValidationError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct OrderTypeModalProps {
    pub api_client: ApiClient,
    pub restaurant_id: i64,
    pub is_open: bool,
    /// `Some` edits that order type, `None` creates a new one
    #[prop_or_default]
    pub editing: Option<OrderType>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(OrderTypeModal)]
pub fn order_type_modal(props: &OrderTypeModalProps) -> Html {
    let draft = use_state(OrderTypeDraft::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let info_message = use_state(|| Option::<String>::None);

    // Reset state when modal opens
    use_effect_with((props.is_open, props.editing.clone()), {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let info_message = info_message.clone();
        move |(is_open, editing)| {
            if *is_open {
                draft.set(editing.as_ref().map(OrderTypeDraft::from_order_type).unwrap_or_default());
                is_submitting.set(false);
                error_message.set(None);
                info_message.set(None);
            }
            || ()
        }
    });

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(OrderTypeDraft { name: input.value(), ..(*draft).clone() });
        })
    };

    let on_price_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(OrderTypeDraft { price: input.value(), ..(*draft).clone() });
        })
    };

    let on_active_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(OrderTypeDraft { is_active: input.checked(), ..(*draft).clone() });
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let restaurant_id = props.restaurant_id;
        let editing = props.editing.clone();
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let info_message = info_message.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info_message.set(None);

            let request = match &editing {
                None => draft.to_new(restaurant_id).map(SaveRequest::Create),
                Some(original) => match draft.changes_from(original) {
                    Ok(Some(update)) => Ok(SaveRequest::Update(original.id, update)),
                    Ok(None) => {
                        info_message.set(Some("No changes to save".to_string()));
                        return;
                    }
                    Err(errors) => Err(errors),
                },
            };
            let request = match request {
                Ok(request) => request,
                Err(errors) => {
                    error_message.set(Some(join_errors(&errors)));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let api_client = api_client.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let result = match &request {
                    SaveRequest::Create(body) => api_client.create_order_type(body).await,
                    SaveRequest::Update(id, update) => api_client.update_order_type(*id, update).await,
                };
                is_submitting.set(false);
                match result {
                    Ok(()) => {
                        Logger::info_with_component("order-type-modal", "Order type saved");
                        on_success.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("order-type-modal", &format!("Failed to save order type: {}", e));
                        error_message.set(Some("Could not save the order type.".to_string()));
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

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    if !props.is_open {
        return html! {};
    }

    let title = if props.editing.is_some() { "Edit order type" } else { "New order type" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{title}</h3>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-error">{error}</div> }
                } else {
                    html! {}
                }}
                {if let Some(info) = (*info_message).clone() {
                    html! { <div class="form-info">{info}</div> }
                } else {
                    html! {}
                }}

                <form class="order-type-form" onsubmit={on_submit} novalidate={true}>
                    <div class="form-group">
                        <label for="order-type-name">{"Name"}</label>
                        <input
                            id="order-type-name"
                            type="text"
                            value={draft.name.clone()}
                            oninput={on_name_input}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="order-type-price">{"Price"}</label>
                        <input
                            id="order-type-price"
                            type="number"
                            min="0"
                            step="0.01"
                            value={draft.price.clone()}
                            oninput={on_price_input}
                            disabled={*is_submitting}
                        />
                    </div>
                    <label class="form-switch">
                        <input
                            type="checkbox"
                            checked={draft.is_active}
                            onchange={on_active_change}
                            disabled={*is_submitting}
                        />
                        {"Active"}
                    </label>

                    <div class="form-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*is_submitting}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

enum SaveRequest {
    Create(shared::NewOrderType),
    Update(i64, shared::OrderTypeUpdate),
}

fn join_errors(errors: &[OrderTypeValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(". ")
}
