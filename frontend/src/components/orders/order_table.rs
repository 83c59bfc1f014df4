use shared::{format_amount, format_short_date, Order, OrderStatus, PaymentStatus, SortDirection};
use yew::prelude::*;

const NO_TEXT: &str = "None";

#[derive(Properties, PartialEq)]
pub struct OrderTableProps {
    pub orders: Vec<Order>,
    pub loading: bool,
    pub direction: SortDirection,
    /// Clicking the date header flips the sort direction
    pub on_toggle_direction: Callback<()>,
    pub on_edit: Callback<Order>,
}

#[function_component(OrderTable)]
pub fn order_table(props: &OrderTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading orders..."}</div> };
    }

    let on_date_header = props.on_toggle_direction.reform(|_: MouseEvent| ());

    html! {
        <div class="table-container">
            <table class="orders-table">
                <thead>
                    <tr>
                        <th class="id">{"ID"}</th>
                        <th>{"Client"}</th>
                        <th class="sortable" onclick={on_date_header}>
                            {format!("Date {}", props.direction.arrow())}
                        </th>
                        <th>{"Order type"}</th>
                        <th>{"Location"}</th>
                        <th class="numeric">{"Guests"}</th>
                        <th>{"Phone"}</th>
                        <th class="numeric">{"Price"}</th>
                        <th class="numeric">{"Discount"}</th>
                        <th class="numeric">{"Paid"}</th>
                        <th class="numeric">{"Full cost"}</th>
                        <th>{"Payment"}</th>
                        <th>{"Status"}</th>
                        <th>{"Note"}</th>
                        <th>{"Comment"}</th>
                        <th>{"Updated by"}</th>
                        <th class="actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {if props.orders.is_empty() {
                        html! { <tr><td class="empty" colspan="17">{"No orders match these filters"}</td></tr> }
                    } else {
                        html! { <>{for props.orders.iter().map(|order| view_row(order, &props.on_edit))}</> }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn view_row(order: &Order, on_edit: &Callback<Order>) -> Html {
    let date = order
        .calendar_date()
        .map(format_short_date)
        .unwrap_or_else(|| order.date.clone());

    let payment = match order.payment_status() {
        PaymentStatus::Paid => html! { <span class="payment paid">{"Paid"}</span> },
        PaymentStatus::Outstanding(remaining) => html! {
            <span class="payment outstanding">{format!("Remaining: {}", format_amount(remaining))}</span>
        },
    };

    let onclick = {
        let order = order.clone();
        on_edit.reform(move |_: MouseEvent| order.clone())
    };

    html! {
        <tr key={order.id.to_string()}>
            <td class="id">{order.id}</td>
            <td>{&order.full_name}</td>
            <td class="date">{date}</td>
            <td>{&order.order_type_name}</td>
            <td>{order.location_label()}</td>
            <td class="numeric">{order.chair_count}</td>
            <td>{&order.phonenumber}</td>
            <td class="numeric">{format_amount(order.price)}</td>
            <td class="numeric">{format!("{}%", order.discount)}</td>
            <td class="numeric total">{format_amount(order.total_payment)}</td>
            <td class="numeric total">{format_amount(order.full_cost())}</td>
            <td>{payment}</td>
            <td><span class={classes!("status-badge", status_class(&order.status))}>{order.status.label()}</span></td>
            {view_text_cell(order.note.as_deref())}
            {view_text_cell(order.comment.as_deref())}
            <td>{order.updated_by.full_name()}</td>
            <td class="actions">
                <button type="button" class="btn btn-small edit-order" onclick={onclick}>{"Edit"}</button>
            </td>
        </tr>
    }
}

/// Truncated cell with the full text as a tooltip
fn view_text_cell(text: Option<&str>) -> Html {
    let text = text.filter(|text| !text.trim().is_empty());
    html! {
        <td class="text-cell" title={text.unwrap_or(NO_TEXT).to_string()}>
            {text.unwrap_or(NO_TEXT)}
        </td>
    }
}

fn status_class(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Accepted => "status-accepted",
        OrderStatus::Rejected => "status-rejected",
        OrderStatus::Prepayment => "status-prepayment",
        OrderStatus::Pending | OrderStatus::Other => "status-neutral",
    }
}
