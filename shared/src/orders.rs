//! Orders as the backend returns them, payment arithmetic and list filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::format::{format_query_date, parse_calendar_date};
use crate::{PaginationParams, SortDirection};

/// How many days the order list shows when first opened
pub const DEFAULT_RANGE_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Accepted,
    Rejected,
    Pending,
    Prepayment,
    /// Any status this console does not know about yet
    #[serde(other)]
    Other,
}

impl OrderStatus {
    pub const KNOWN: [OrderStatus; 4] = [
        OrderStatus::Accepted,
        OrderStatus::Rejected,
        OrderStatus::Pending,
        OrderStatus::Prepayment,
    ];

    /// Value used on the wire and in select options
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Accepted => "accepted",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Pending => "pending",
            OrderStatus::Prepayment => "prepayment",
            OrderStatus::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Pending => "Pending",
            OrderStatus::Prepayment => "Prepayment",
            OrderStatus::Other => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::KNOWN.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedBy {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl UpdatedBy {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub full_name: String,
    pub phonenumber: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    /// ISO date or RFC 3339 timestamp
    pub date: String,
    /// Percent, 0-100
    pub discount: f64,
    pub offsite: bool,
    pub chair_count: u32,
    /// Price per guest
    pub price: f64,
    pub order_type_name: String,
    /// Not every backend version sends it; forms fall back to matching by name
    #[serde(default)]
    pub order_type_id: Option<i64>,
    pub status: OrderStatus,
    /// Amount paid so far
    pub total_payment: f64,
    pub updated_by: UpdatedBy,
}

/// Whether an order still has money owing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentStatus {
    Paid,
    Outstanding(f64),
}

impl Order {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// Price for every guest, before discount
    pub fn full_cost(&self) -> f64 {
        self.price * f64::from(self.chair_count)
    }

    pub fn final_cost(&self) -> f64 {
        let full = self.full_cost();
        full - full * (self.discount / 100.0)
    }

    pub fn remaining_payment(&self) -> f64 {
        (self.final_cost() - self.total_payment).max(0.0)
    }

    pub fn payment_status(&self) -> PaymentStatus {
        let remaining = self.remaining_payment();
        if remaining > 0.0 {
            PaymentStatus::Outstanding(remaining)
        } else {
            PaymentStatus::Paid
        }
    }

    pub fn location_label(&self) -> &'static str {
        if self.offsite {
            "Offsite"
        } else {
            "In restaurant"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderType {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub is_active: bool,
    pub restaurant_id: i64,
}

/// Status select: everything, or one status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn from_value(value: &str) -> Self {
        OrderStatus::parse(value).map(StatusFilter::Only).unwrap_or_default()
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Location select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    Offsite,
    InRestaurant,
}

impl LocationFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "true" => LocationFilter::Offsite,
            "false" => LocationFilter::InRestaurant,
            _ => LocationFilter::All,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            LocationFilter::All => "all",
            LocationFilter::Offsite => "true",
            LocationFilter::InRestaurant => "false",
        }
    }

    fn offsite(&self) -> Option<bool> {
        match self {
            LocationFilter::All => None,
            LocationFilter::Offsite => Some(true),
            LocationFilter::InRestaurant => Some(false),
        }
    }
}

/// Everything the order list can be narrowed by
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilters {
    pub search: String,
    pub date_range: Option<DateRange>,
    pub status: StatusFilter,
    pub order_type_id: Option<i64>,
    pub location: LocationFilter,
    pub direction: SortDirection,
}

impl OrderFilters {
    /// Filters the list opens with: the last 30 days, newest first
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            date_range: Some(DateRange::last_days(today, DEFAULT_RANGE_DAYS)),
            ..Self::default()
        }
    }

    /// Query pairs for `GET /orders`
    pub fn to_query(&self, restaurant_id: i64) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("order_by", "date".to_string()),
            ("order_direction", self.direction.as_str().to_string()),
            ("restaurantId", restaurant_id.to_string()),
        ];

        let search = self.search.trim();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        if let Some(range) = &self.date_range {
            query.push(("minDate", format_query_date(range.from())));
            if let Some(to) = range.to() {
                query.push(("maxDate", format_query_date(to)));
            }
        }
        if let StatusFilter::Only(status) = &self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(order_type_id) = self.order_type_id {
            query.push(("orderTypeId", order_type_id.to_string()));
        }
        if let Some(offsite) = self.location.offsite() {
            query.push(("offsite", offsite.to_string()));
        }

        query
    }
}

/// List query for the order types page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderTypeQuery {
    pub pagination: PaginationParams,
    pub search: String,
}

impl OrderTypeQuery {
    /// Query pairs for `GET /order-types`
    pub fn to_query(&self, restaurant_id: i64) -> Vec<(&'static str, String)> {
        let mut query = self.pagination.to_query();
        query.push(("restaurantId", restaurant_id.to_string()));
        let search = self.search.trim();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        query
    }
}
