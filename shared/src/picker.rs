//! Open/close state, month navigation and dropdown placement for the range picker.
//!
//! The selected range is deliberately not part of `PickerState`. The picker's
//! owner holds it, and nothing in here can change it.

use chrono::NaiveDate;

use crate::calendar::MonthView;
use crate::date_range::DateRange;

/// Axis-aligned box in viewport coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Dropdown top edge sits on the trigger's bottom edge
    Below,
    /// Dropdown bottom edge sits on the trigger's top edge
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// Left edges aligned
    Left,
    /// Right edges aligned
    Right,
}

/// Where to put the dropdown, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
}

impl Placement {
    /// Anchor below-left of the trigger, flipping above when the dropdown
    /// would run past the viewport bottom and right-aligning when it would
    /// run past the viewport right edge.
    pub fn compute(trigger: Rect, dropdown: Size, viewport: Size) -> Self {
        let (top, vertical) = if trigger.bottom + dropdown.height > viewport.height {
            (trigger.top - dropdown.height, VerticalAnchor::Above)
        } else {
            (trigger.bottom, VerticalAnchor::Below)
        };

        let (left, horizontal) = if trigger.left + dropdown.width > viewport.width {
            (trigger.right - dropdown.width, HorizontalAnchor::Right)
        } else {
            (trigger.left, HorizontalAnchor::Left)
        };

        Self { top, left, vertical, horizontal }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

/// Inputs the picker reacts to, apart from day clicks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerAction {
    /// The trigger button was activated
    Toggle,
    /// A pointer went down somewhere outside the picker
    OutsidePointer,
    /// The owner disabled the picker
    Close,
    PrevMonth,
    NextMonth,
    /// Geometry was measured after the dropdown rendered
    Placed(Placement),
}

/// Widget-local state of one picker instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerState {
    pub visibility: Visibility,
    pub view: MonthView,
    /// Set once per open, after the first measurement
    pub placement: Option<Placement>,
}

impl PickerState {
    /// Closed, showing the month of the range start, or of `today` when there is no range
    pub fn new(value: Option<&DateRange>, today: NaiveDate) -> Self {
        let anchor = value.map(DateRange::from).unwrap_or(today);
        Self {
            visibility: Visibility::Closed,
            view: MonthView::containing(anchor),
            placement: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn apply(self, action: PickerAction) -> Self {
        let next = match action {
            PickerAction::Toggle => match self.visibility {
                Visibility::Closed => Self { visibility: Visibility::Open, placement: None, ..self },
                Visibility::Open => Self { visibility: Visibility::Closed, placement: None, ..self },
            },
            PickerAction::OutsidePointer | PickerAction::Close => match self.visibility {
                Visibility::Open => Self { visibility: Visibility::Closed, placement: None, ..self },
                Visibility::Closed => self,
            },
            PickerAction::PrevMonth => Self { view: self.view.prev(), ..self },
            PickerAction::NextMonth => Self { view: self.view.next(), ..self },
            PickerAction::Placed(placement) if self.is_open() && self.placement.is_none() => {
                Self { placement: Some(placement), ..self }
            }
            PickerAction::Placed(_) => self,
        };
        if next.visibility != self.visibility {
            log::debug!("range picker {:?} -> {:?}", self.visibility, next.visibility);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::select_day;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const VIEWPORT: Size = Size { width: 1280.0, height: 800.0 };
    const DROPDOWN: Size = Size { width: 300.0, height: 320.0 };

    fn trigger_at(left: f64, top: f64) -> Rect {
        Rect { left, top, right: left + 200.0, bottom: top + 40.0 }
    }

    #[test]
    fn test_placement_defaults_below_left() {
        let trigger = trigger_at(100.0, 100.0);
        let placement = Placement::compute(trigger, DROPDOWN, VIEWPORT);
        assert_eq!(placement.top, 140.0);
        assert_eq!(placement.left, 100.0);
        assert_eq!(placement.vertical, VerticalAnchor::Below);
        assert_eq!(placement.horizontal, HorizontalAnchor::Left);
    }

    #[test]
    fn test_placement_flips_above_near_bottom() {
        let trigger = trigger_at(100.0, 600.0);
        let placement = Placement::compute(trigger, DROPDOWN, VIEWPORT);
        assert_eq!(placement.vertical, VerticalAnchor::Above);
        assert_eq!(placement.top, 600.0 - 320.0);
    }

    #[test]
    fn test_placement_right_aligns_near_right_edge() {
        let trigger = trigger_at(1100.0, 100.0);
        let placement = Placement::compute(trigger, DROPDOWN, VIEWPORT);
        assert_eq!(placement.horizontal, HorizontalAnchor::Right);
        assert_eq!(placement.left, 1300.0 - 300.0);
        assert_eq!(placement.vertical, VerticalAnchor::Below);
    }

    #[test]
    fn test_placement_exact_fit_stays_below_left() {
        // Bottom edge lands exactly on the viewport edge
        let trigger = Rect { left: 980.0, top: 440.0, right: 1180.0, bottom: 480.0 };
        let placement = Placement::compute(trigger, DROPDOWN, VIEWPORT);
        assert_eq!(placement.vertical, VerticalAnchor::Below);
        assert_eq!(placement.horizontal, HorizontalAnchor::Left);
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let state = PickerState::new(None, date(2024, 3, 20));
        assert!(!state.is_open());

        let open = state.apply(PickerAction::Toggle);
        assert!(open.is_open());

        let closed = open.apply(PickerAction::Toggle);
        assert_eq!(closed.visibility, Visibility::Closed);
    }

    #[test]
    fn test_outside_pointer_closes_only_when_open() {
        let closed = PickerState::new(None, date(2024, 3, 20));
        assert_eq!(closed.apply(PickerAction::OutsidePointer), closed);

        let open = closed.apply(PickerAction::Toggle);
        assert_eq!(open.apply(PickerAction::OutsidePointer).visibility, Visibility::Closed);
    }

    #[test]
    fn test_close_shuts_an_open_picker_and_ignores_a_closed_one() {
        let closed = PickerState::new(None, date(2024, 3, 20));
        assert_eq!(closed.apply(PickerAction::Close), closed);

        let open = closed.apply(PickerAction::Toggle).apply(PickerAction::Placed(Placement::compute(
            trigger_at(100.0, 100.0),
            DROPDOWN,
            VIEWPORT,
        )));
        let shut = open.apply(PickerAction::Close);
        assert!(!shut.is_open());
        assert_eq!(shut.placement, None);
        assert_eq!(shut.view, open.view);
    }

    #[test]
    fn test_navigation_keeps_dropdown_open_and_selection_untouched() {
        let range = select_day(None, date(2024, 3, 10));
        let state = PickerState::new(Some(&range), date(2024, 6, 1)).apply(PickerAction::Toggle);
        assert_eq!(state.view, MonthView::new(2024, 3));

        let april = state.apply(PickerAction::NextMonth);
        assert_eq!(april.view, MonthView::new(2024, 4));
        assert!(april.is_open());
        assert_eq!(range, DateRange::starting_at(date(2024, 3, 10)));

        let back = april.apply(PickerAction::PrevMonth).apply(PickerAction::PrevMonth);
        assert_eq!(back.view, MonthView::new(2024, 2));
        assert!(back.is_open());
    }

    #[test]
    fn test_initial_view_falls_back_to_today() {
        let state = PickerState::new(None, date(2025, 11, 4));
        assert_eq!(state.view, MonthView::new(2025, 11));
    }

    #[test]
    fn test_placement_recorded_once_per_open() {
        let first = Placement::compute(trigger_at(100.0, 100.0), DROPDOWN, VIEWPORT);
        let second = Placement::compute(trigger_at(100.0, 600.0), DROPDOWN, VIEWPORT);

        let closed = PickerState::new(None, date(2024, 3, 1));
        assert_eq!(closed.apply(PickerAction::Placed(first)).placement, None);

        let open = closed.apply(PickerAction::Toggle).apply(PickerAction::Placed(first));
        assert_eq!(open.placement, Some(first));
        assert_eq!(open.apply(PickerAction::Placed(second)).placement, Some(first));

        let reopened = open
            .apply(PickerAction::Toggle)
            .apply(PickerAction::Toggle)
            .apply(PickerAction::Placed(second));
        assert_eq!(reopened.placement, Some(second));
    }
}
