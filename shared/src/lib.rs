use serde::{Deserialize, Serialize};

pub mod auth;
pub mod calendar;
pub mod date_range;
pub mod format;
pub mod forms;
pub mod orders;
pub mod picker;

pub use auth::{AccessToken, AuthTokens, LoginRequest, LoginResponse};
pub use calendar::{month_name, CalendarCell, MonthView, WEEKDAY_LABELS};
pub use date_range::{range_label, select_day, DateRange, DateRangeError, DayMarks, SelectionState};
pub use format::{format_amount, format_long_date, format_short_date};
pub use forms::{
    NewOrderType, OrderDraft, OrderField, OrderPayload, OrderTypeDraft, OrderTypeUpdate, OrderTypeValidationError,
    OrderValidationError, FORM_STATUSES,
};
pub use orders::{
    LocationFilter, Order, OrderFilters, OrderStatus, OrderType, OrderTypeQuery, PaymentStatus, StatusFilter,
    UpdatedBy,
};
pub use picker::{
    HorizontalAnchor, PickerAction, PickerState, Placement, Rect, Size, VerticalAnchor, Visibility,
};

/// Sort direction as the backend spells it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header arrow
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Paging for list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub limit: u32,
    pub page: u32,
    pub order_direction: SortDirection,
    pub order_by: String,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: 20,
            page: 1,
            order_direction: SortDirection::Desc,
            order_by: "id".to_string(),
        }
    }
}

impl PaginationParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
            ("order_direction", self.order_direction.as_str().to_string()),
            ("order_by", self.order_by.clone()),
        ]
    }

    /// Header click: the current column flips direction, a new column starts descending
    pub fn sorted_by(&self, column: &str) -> Self {
        let order_direction = if self.order_by == column {
            self.order_direction.toggled()
        } else {
            SortDirection::Desc
        };
        Self {
            order_by: column.to_string(),
            order_direction,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}
