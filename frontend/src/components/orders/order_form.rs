use std::rc::Rc;

use shared::{
    format_amount, OrderDraft, OrderField, OrderPayload, OrderStatus, OrderType, OrderValidationError, FORM_STATUSES,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

type FieldSetter = fn(&mut OrderDraft, String);

enum DraftAction {
    Edit(FieldSetter, String),
    Reset(OrderDraft),
}

#[derive(PartialEq)]
struct DraftReducer(OrderDraft);

impl Reducible for DraftReducer {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Edit(set, value) => {
                let mut next = self.0.clone();
                set(&mut next, value);
                Rc::new(DraftReducer(next))
            }
            DraftAction::Reset(draft) => Rc::new(DraftReducer(draft)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OrderFormProps {
    /// Starting values; the form resets whenever this changes
    pub initial: OrderDraft,
    pub order_types: Vec<OrderType>,
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub submitting: bool,
    /// Server-side failure to show above the buttons
    #[prop_or_default]
    pub error: Option<String>,
    /// Only called with input that passed validation
    pub on_submit: Callback<OrderPayload>,
    pub on_cancel: Callback<()>,
}

/// Fields shared by the new order page and the edit dialog
#[function_component(OrderForm)]
pub fn order_form(props: &OrderFormProps) -> Html {
    let draft = {
        let initial = props.initial.clone();
        use_reducer(move || DraftReducer(initial))
    };
    let errors = use_state(Vec::<OrderValidationError>::new);

    {
        let dispatcher = draft.dispatcher();
        let errors = errors.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            dispatcher.dispatch(DraftAction::Reset(initial.clone()));
            errors.set(Vec::new());
            || ()
        });
    }

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.0.validate() {
                Ok(payload) => {
                    errors.set(Vec::new());
                    on_submit.emit(payload);
                }
                Err(problems) => errors.set(problems),
            }
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let text = |set: FieldSetter| {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(DraftAction::Edit(set, input.value()));
        })
    };
    let area = |set: FieldSetter| {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(DraftAction::Edit(set, input.value()));
        })
    };
    let select = |set: FieldSetter| {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(DraftAction::Edit(set, input.value()));
        })
    };
    let on_offsite = {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(DraftAction::Edit(
                |draft, value| draft.offsite = value == "true",
                input.checked().to_string(),
            ));
        })
    };

    let values = &draft.0;
    let disabled = props.submitting;
    let total = values
        .estimated_total()
        .map(format_amount)
        .unwrap_or_else(|| "-".to_string());

    html! {
        <form class="order-form" onsubmit={on_submit} novalidate={true}>
            <div class="form-grid">
                <div class="form-group">
                    <label for="order-full-name">{"Client name"}</label>
                    <input
                        id="order-full-name"
                        type="text"
                        value={values.full_name.clone()}
                        oninput={text(|draft, value| draft.full_name = value)}
                        disabled={disabled}
                    />
                    {field_error(&errors, OrderField::FullName)}
                </div>

                <div class="form-group">
                    <label for="order-phone">{"Phone number"}</label>
                    <input
                        id="order-phone"
                        type="tel"
                        value={values.phonenumber.clone()}
                        oninput={text(|draft, value| draft.phonenumber = value)}
                        disabled={disabled}
                    />
                    {field_error(&errors, OrderField::Phone)}
                </div>

                <div class="form-group">
                    <label for="order-type-select">{"Order type"}</label>
                    <select
                        id="order-type-select"
                        onchange={select(|draft, value| draft.order_type_id = value)}
                        disabled={disabled}
                    >
                        <option value="" selected={values.order_type_id.is_empty()}>{"Choose an order type"}</option>
                        {for props.order_types.iter().map(|order_type| {
                            let id = order_type.id.to_string();
                            let selected = values.order_type_id == id;
                            html! { <option value={id} selected={selected}>{&order_type.name}</option> }
                        })}
                    </select>
                    {field_error(&errors, OrderField::OrderType)}
                </div>

                <div class="form-group">
                    <label for="order-date">{"Date"}</label>
                    <input
                        id="order-date"
                        type="date"
                        value={values.date.clone()}
                        oninput={text(|draft, value| draft.date = value)}
                        disabled={disabled}
                    />
                    {field_error(&errors, OrderField::Date)}
                </div>

                <div class="form-group">
                    <label for="order-guests">{"Guests"}</label>
                    <input
                        id="order-guests"
                        type="number"
                        min="1"
                        value={values.chair_count.clone()}
                        oninput={text(|draft, value| draft.chair_count = value)}
                        disabled={disabled}
                    />
                    {field_error(&errors, OrderField::Guests)}
                </div>

                <div class="form-group">
                    <label for="order-price">{"Price per guest"}</label>
                    <input
                        id="order-price"
                        type="number"
                        min="0"
                        step="0.01"
                        value={values.price.clone()}
                        oninput={text(|draft, value| draft.price = value)}
                        disabled={disabled}
                    />
                    {field_error(&errors, OrderField::Price)}
                </div>

                <div class="form-group">
                    <label for="order-discount">{"Discount (%)"}</label>
                    <input
                        id="order-discount"
                        type="number"
                        min="0"
                        max="100"
                        value={values.discount.clone()}
                        oninput={text(|draft, value| draft.discount = value)}
                        disabled={disabled}
                    />
                    {field_error(&errors, OrderField::Discount)}
                </div>

                <div class="form-group">
                    <label>{"Total"}</label>
                    <div class="order-total">{total}</div>
                </div>

                <div class="form-group">
                    <label for="order-status">{"Status"}</label>
                    <select
                        id="order-status"
                        onchange={select(|draft, value| {
                            if let Some(status) = OrderStatus::parse(&value) {
                                draft.status = status;
                            }
                        })}
                        disabled={disabled}
                    >
                        {if FORM_STATUSES.contains(&values.status) {
                            html! {}
                        } else {
                            html! {
                                <option value={values.status.as_str()} selected={true} disabled={true}>
                                    {values.status.label()}
                                </option>
                            }
                        }}
                        {for FORM_STATUSES.into_iter().map(|status| {
                            let selected = values.status == status;
                            html! { <option value={status.as_str()} selected={selected}>{status.label()}</option> }
                        })}
                    </select>
                    {field_error(&errors, OrderField::Status)}
                </div>
            </div>

            <label class="form-switch">
                <input type="checkbox" checked={values.offsite} onchange={on_offsite} disabled={disabled} />
                {"Offsite event"}
            </label>

            <div class="form-group">
                <label for="order-note">{"Note"}</label>
                <textarea
                    id="order-note"
                    value={values.note.clone()}
                    oninput={area(|draft, value| draft.note = value)}
                    disabled={disabled}
                />
            </div>

            <div class="form-group">
                <label for="order-comment">{"Comment"}</label>
                <textarea
                    id="order-comment"
                    value={values.comment.clone()}
                    oninput={area(|draft, value| draft.comment = value)}
                    disabled={disabled}
                />
            </div>

            {if let Some(error) = &props.error {
                html! { <div class="form-error">{error}</div> }
            } else {
                html! {}
            }}

            <div class="form-buttons">
                <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={disabled}>
                    {"Cancel"}
                </button>
                <button type="submit" class="btn btn-primary" disabled={disabled}>
                    {if disabled { "Saving...".to_string() } else { props.submit_label.to_string() }}
                </button>
            </div>
        </form>
    }
}

fn field_error(errors: &[OrderValidationError], field: OrderField) -> Html {
    match errors.iter().find(|error| error.field() == field) {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

#[cfg(test)]
mod wasm_tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use chrono::NaiveDate;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, HtmlFormElement};

    wasm_bindgen_test_configure!(run_in_browser);

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(10)).await;
    }

    async fn mount(initial: OrderDraft) -> (Element, Rc<RefCell<Vec<OrderPayload>>>) {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let submitted = Rc::new(RefCell::new(Vec::new()));
        let on_submit = {
            let submitted = submitted.clone();
            Callback::from(move |payload: OrderPayload| submitted.borrow_mut().push(payload))
        };
        let order_types = vec![OrderType {
            id: 5,
            name: "Wedding".to_string(),
            price: 150.0,
            is_active: true,
            restaurant_id: 7,
        }];
        yew::Renderer::<OrderForm>::with_root_and_props(
            root.clone(),
            OrderFormProps {
                initial,
                order_types,
                submit_label: AttrValue::from("Create order"),
                submitting: false,
                error: None,
                on_submit,
                on_cancel: Callback::noop(),
            },
        )
        .render();
        settle().await;
        (root, submitted)
    }

    fn submit(root: &Element) {
        root.query_selector("form")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap()
            .request_submit()
            .unwrap();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_blank_form_shows_field_errors_and_does_not_submit() {
        let (root, submitted) = mount(OrderDraft::new(today())).await;
        submit(&root);
        settle().await;

        assert!(submitted.borrow().is_empty());
        let messages: Vec<String> = {
            let nodes = root.query_selector_all(".field-error").unwrap();
            (0..nodes.length())
                .filter_map(|index| nodes.item(index))
                .filter_map(|node| node.text_content())
                .collect()
        };
        assert!(messages.contains(&"Name must be at least 2 characters".to_string()));
        assert!(messages.contains(&"Choose an order type".to_string()));
    }

    #[wasm_bindgen_test]
    async fn test_filled_form_submits_payload() {
        let initial = OrderDraft {
            full_name: "Aman Orazov".to_string(),
            phonenumber: "+99365123456".to_string(),
            order_type_id: "5".to_string(),
            chair_count: "20".to_string(),
            price: "150".to_string(),
            ..OrderDraft::new(today())
        };
        let (root, submitted) = mount(initial).await;

        let total = root.query_selector(".order-total").unwrap().unwrap();
        assert_eq!(total.text_content().unwrap(), "3000.00 TMT");

        submit(&root);
        settle().await;

        let submitted = submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].order_type_id, 5);
        assert_eq!(submitted[0].status, OrderStatus::Prepayment);
        assert!(root.query_selector(".field-error").unwrap().is_none());

        let button = root.query_selector("button[type='submit']").unwrap().unwrap();
        assert_eq!(button.dyn_into::<HtmlElement>().unwrap().inner_text(), "Create order");
    }
}
