use std::rc::Rc;

use chrono::NaiveDate;
use shared::{
    format_long_date, range_label, select_day, CalendarCell, DateRange, DayMarks, HorizontalAnchor, PickerAction,
    PickerState, Placement, Rect, Size, VerticalAnchor, WEEKDAY_LABELS,
};
use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_outside_click::use_outside_click;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Selected range, owned by the parent. `None` means nothing is selected.
    pub value: Option<DateRange>,
    /// Called with the new range after every day click
    pub on_change: Callback<DateRange>,
    #[prop_or_default]
    pub disabled: bool,
}

#[derive(PartialEq)]
struct PickerReducer(PickerState);

impl Reducible for PickerReducer {
    type Action = PickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(PickerReducer(next))
        }
    }
}

/// Calendar dropdown for choosing a start and end day with two clicks.
///
/// The picker never stores the range itself: each click proposes a new
/// `DateRange` through `on_change` and the parent feeds it back via `value`.
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let container_ref = use_node_ref();
    let trigger_ref = use_node_ref();
    let dropdown_ref = use_node_ref();

    let picker = {
        let value = props.value;
        use_reducer(move || PickerReducer(PickerState::new(value.as_ref(), today())))
    };
    let state = picker.0;

    use_outside_click(container_ref.clone(), {
        let dispatcher = picker.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PickerAction::OutsidePointer))
    });

    // Disabling an open picker closes it
    {
        let dispatcher = picker.dispatcher();
        use_effect_with(props.disabled, move |disabled| {
            if *disabled {
                dispatcher.dispatch(PickerAction::Close);
            }
            || ()
        });
    }

    // Measure once per open, after the dropdown is in the DOM
    {
        let trigger_ref = trigger_ref.clone();
        let dropdown_ref = dropdown_ref.clone();
        let dispatcher = picker.dispatcher();
        use_effect_with(state.is_open(), move |is_open| {
            if *is_open {
                match measure_placement(&trigger_ref, &dropdown_ref) {
                    Some(placement) => dispatcher.dispatch(PickerAction::Placed(placement)),
                    None => Logger::warn_with_component("range-picker", "Could not measure dropdown geometry"),
                }
            }
            || ()
        });
    }

    let on_toggle = {
        let dispatcher = picker.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PickerAction::Toggle))
    };

    let on_prev_month = {
        let dispatcher = picker.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PickerAction::PrevMonth))
    };

    let on_next_month = {
        let dispatcher = picker.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PickerAction::NextMonth))
    };

    let on_day_click = {
        let value = props.value;
        props.on_change.reform(move |day: NaiveDate| {
            let next = select_day(value.as_ref(), day);
            Logger::debug_with_component("range-picker", &format!("Selected {}", next.label()));
            next
        })
    };

    let is_open = state.is_open() && !props.disabled;

    let dropdown = if is_open {
        let (style, anchor) = match state.placement {
            Some(placement) => (
                format!("top: {}px; left: {}px;", placement.top, placement.left),
                anchor_classes(&placement),
            ),
            // First frame: laid out for measuring but not shown
            None => ("top: 0; left: 0; visibility: hidden;".to_string(), classes!()),
        };

        html! {
            <div
                class={classes!("range-picker-dropdown", anchor)}
                ref={dropdown_ref.clone()}
                style={style}
                role="dialog"
                aria-label="Choose dates"
            >
                <div class="range-picker-header">
                    <button type="button" class="nav-button" onclick={on_prev_month} aria-label="Previous month">{"‹"}</button>
                    <span class="month-year">{state.view.label()}</span>
                    <button type="button" class="nav-button" onclick={on_next_month} aria-label="Next month">{"›"}</button>
                </div>
                <div class="range-picker-grid">
                    {for WEEKDAY_LABELS.iter().map(|label| html! {
                        <div class="weekday">{*label}</div>
                    })}
                    {for state.view.cells().into_iter().map(|cell| {
                        view_cell(cell, props.value.as_ref(), &on_day_click)
                    })}
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="range-picker" ref={container_ref}>
            <button
                type="button"
                class="range-picker-trigger"
                ref={trigger_ref}
                onclick={on_toggle}
                disabled={props.disabled}
                aria-haspopup="true"
                aria-expanded={is_open.to_string()}
            >
                <span class="calendar-icon">{"📅"}</span>
                <span class="range-text">{range_label(props.value.as_ref())}</span>
            </button>
            {dropdown}
        </div>
    }
}

fn view_cell(cell: CalendarCell, value: Option<&DateRange>, on_day_click: &Callback<NaiveDate>) -> Html {
    match cell {
        CalendarCell::Blank => html! {
            <button type="button" class="range-day empty" disabled={true} aria-label="Empty cell"></button>
        },
        CalendarCell::Day(day) => {
            let marks = DayMarks::for_day(value, day);
            let onclick = on_day_click.reform(move |_: MouseEvent| day);
            html! {
                <button
                    type="button"
                    class={classes!(
                        "range-day",
                        marks.in_range.then(|| "in-range"),
                        marks.is_start.then(|| "range-start"),
                        marks.is_end.then(|| "range-end"),
                        marks.is_interior().then(|| "range-interior")
                    )}
                    onclick={onclick}
                    aria-label={format_long_date(day)}
                    aria-selected={marks.in_range.to_string()}
                >
                    {day.format("%-d").to_string()}
                </button>
            }
        }
    }
}

fn anchor_classes(placement: &Placement) -> Classes {
    classes!(
        match placement.vertical {
            VerticalAnchor::Below => "anchor-below",
            VerticalAnchor::Above => "anchor-above",
        },
        match placement.horizontal {
            HorizontalAnchor::Left => "anchor-left",
            HorizontalAnchor::Right => "anchor-right",
        }
    )
}

/// Read trigger and dropdown geometry from the DOM
fn measure_placement(trigger: &NodeRef, dropdown: &NodeRef) -> Option<Placement> {
    let trigger = trigger.cast::<Element>()?.get_bounding_client_rect();
    let dropdown = dropdown.cast::<Element>()?.get_bounding_client_rect();
    let window = web_sys::window()?;
    let viewport = Size {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    };

    let trigger = Rect {
        left: trigger.left(),
        top: trigger.top(),
        right: trigger.right(),
        bottom: trigger.bottom(),
    };
    let dropdown = Size {
        width: dropdown.width(),
        height: dropdown.height(),
    };
    Some(Placement::compute(trigger, dropdown, viewport))
}

#[cfg(test)]
mod wasm_tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn mount(value: Option<DateRange>) -> (Element, Rc<RefCell<Vec<DateRange>>>) {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let changes = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let changes = changes.clone();
            Callback::from(move |range: DateRange| changes.borrow_mut().push(range))
        };
        yew::Renderer::<DateRangePicker>::with_root_and_props(
            root.clone(),
            DateRangePickerProps { value, on_change, disabled: false },
        )
        .render();
        settle().await;
        (root, changes)
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element for {}", selector))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(10)).await;
    }

    #[wasm_bindgen_test]
    async fn test_trigger_toggles_dropdown() {
        let (root, _) = mount(None).await;
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_none());

        click(&root, ".range-picker-trigger");
        settle().await;
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_some());

        click(&root, ".range-picker-trigger");
        settle().await;
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_day_click_completes_open_range() {
        let (root, changes) = mount(Some(DateRange::starting_at(date(2024, 3, 10)))).await;
        click(&root, ".range-picker-trigger");
        settle().await;

        assert_eq!(root.query_selector(".month-year").unwrap().unwrap().text_content().unwrap(), "March 2024");
        click(&root, "[aria-label='15 March 2024']");
        settle().await;

        assert_eq!(
            changes.borrow().as_slice(),
            &[DateRange::closed(date(2024, 3, 10), date(2024, 3, 15)).unwrap()]
        );
        // Day clicks keep the calendar open
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    async fn test_navigation_does_not_emit_or_close() {
        let (root, changes) = mount(Some(DateRange::starting_at(date(2024, 3, 10)))).await;
        click(&root, ".range-picker-trigger");
        settle().await;

        click(&root, "[aria-label='Next month']");
        settle().await;

        assert_eq!(root.query_selector(".month-year").unwrap().unwrap().text_content().unwrap(), "April 2024");
        assert!(changes.borrow().is_empty());
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    async fn test_outside_press_closes_without_emitting() {
        let (root, changes) = mount(None).await;
        click(&root, ".range-picker-trigger");
        settle().await;

        // Presses inside the dropdown keep it open
        let inside = root.query_selector(".range-picker-header").unwrap().unwrap();
        inside.dispatch_event(&web_sys::MouseEvent::new("mousedown").unwrap()).unwrap();
        settle().await;
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_some());

        let body = gloo::utils::document().body().unwrap();
        body.dispatch_event(&web_sys::MouseEvent::new("mousedown").unwrap()).unwrap();
        settle().await;

        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_none());
        assert!(changes.borrow().is_empty());
    }

    #[function_component(DisablingHost)]
    fn disabling_host() -> Html {
        let disabled = use_state(|| false);
        let on_disable = {
            let disabled = disabled.clone();
            Callback::from(move |_: MouseEvent| disabled.set(!*disabled))
        };
        html! {
            <>
                <button type="button" class="disable" onclick={on_disable}>{"Disable"}</button>
                <DateRangePicker value={None} on_change={Callback::noop()} disabled={*disabled} />
            </>
        }
    }

    #[wasm_bindgen_test]
    async fn test_disabling_closes_open_dropdown() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<DisablingHost>::with_root(root.clone()).render();
        settle().await;

        click(&root, ".range-picker-trigger");
        settle().await;
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_some());

        // click() fires no mousedown, so only the disabled prop closes it here
        click(&root, ".disable");
        settle().await;

        let trigger = root.query_selector(".range-picker-trigger").unwrap().unwrap();
        assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_none());

        // Re-enabling does not bring the dropdown back
        click(&root, ".disable");
        settle().await;
        assert!(root.query_selector(".range-picker-dropdown").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_dropdown_gets_placed_after_open() {
        let (root, _) = mount(None).await;
        click(&root, ".range-picker-trigger");
        settle().await;

        let dropdown = root
            .query_selector(".range-picker-dropdown")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        let class_name = dropdown.class_name();
        assert!(class_name.contains("anchor-below") || class_name.contains("anchor-above"));
        assert_ne!(dropdown.style().get_property_value("visibility").unwrap(), "hidden");
    }
}
