//! Order and order type forms.
//!
//! Drafts keep every field as the text the operator typed. `validate` turns
//! a draft into the request body the backend expects, or into the full list
//! of problems so each input can show its own message.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_query_date;
use crate::orders::{Order, OrderStatus, OrderType};

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 8;

/// Statuses an operator may set from the order form
pub const FORM_STATUSES: [OrderStatus; 3] = [
    OrderStatus::Prepayment,
    OrderStatus::Accepted,
    OrderStatus::Rejected,
];

/// Inputs on the order form, used to place error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    FullName,
    Phone,
    OrderType,
    Date,
    Guests,
    Price,
    Discount,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Enter a valid phone number")]
    PhoneTooShort,
    #[error("Choose an order type")]
    MissingOrderType,
    #[error("Choose a date")]
    InvalidDate,
    #[error("At least one guest is required")]
    InvalidGuestCount,
    #[error("Price must be a number of at least 0")]
    InvalidPrice,
    #[error("Discount must be between 0 and 100")]
    InvalidDiscount,
    #[error("Choose prepayment, accepted or rejected")]
    UnsupportedStatus,
}

impl OrderValidationError {
    pub fn field(&self) -> OrderField {
        match self {
            OrderValidationError::NameTooShort => OrderField::FullName,
            OrderValidationError::PhoneTooShort => OrderField::Phone,
            OrderValidationError::MissingOrderType => OrderField::OrderType,
            OrderValidationError::InvalidDate => OrderField::Date,
            OrderValidationError::InvalidGuestCount => OrderField::Guests,
            OrderValidationError::InvalidPrice => OrderField::Price,
            OrderValidationError::InvalidDiscount => OrderField::Discount,
            OrderValidationError::UnsupportedStatus => OrderField::Status,
        }
    }
}

/// Body of `POST /orders` and `PATCH /orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub phonenumber: String,
    pub order_type_id: i64,
    /// yyyy-MM-dd
    pub date: String,
    pub chair_count: u32,
    pub price: f64,
    pub discount: f64,
    pub status: OrderStatus,
    pub offsite: bool,
    pub note: String,
    pub comment: String,
}

/// Order form contents as typed
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub full_name: String,
    pub phonenumber: String,
    /// Selected option value, empty until one is chosen
    pub order_type_id: String,
    /// yyyy-MM-dd, as `<input type="date">` reports it
    pub date: String,
    pub chair_count: String,
    pub price: String,
    pub discount: String,
    pub status: OrderStatus,
    pub offsite: bool,
    pub note: String,
    pub comment: String,
}

impl OrderDraft {
    /// Blank form for a new order on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            full_name: String::new(),
            phonenumber: String::new(),
            order_type_id: String::new(),
            date: format_query_date(today),
            chair_count: "1".to_string(),
            price: "0".to_string(),
            discount: "0".to_string(),
            status: OrderStatus::Prepayment,
            offsite: false,
            note: String::new(),
            comment: String::new(),
        }
    }

    /// Form pre-filled from an existing order.
    ///
    /// When the order carries no type id, the type is looked up by name.
    pub fn from_order(order: &Order, order_types: &[OrderType]) -> Self {
        let order_type_id = order
            .order_type_id
            .or_else(|| {
                order_types
                    .iter()
                    .find(|order_type| order_type.name == order.order_type_name)
                    .map(|order_type| order_type.id)
            })
            .map(|id| id.to_string())
            .unwrap_or_default();

        Self {
            full_name: order.full_name.clone(),
            phonenumber: order.phonenumber.clone(),
            order_type_id,
            date: order.calendar_date().map(format_query_date).unwrap_or_default(),
            chair_count: order.chair_count.to_string(),
            price: order.price.to_string(),
            discount: order.discount.to_string(),
            status: order.status.clone(),
            offsite: order.offsite,
            note: order.note.clone().unwrap_or_default(),
            comment: order.comment.clone().unwrap_or_default(),
        }
    }

    /// Price for all guests after discount, while the inputs are numbers
    pub fn estimated_total(&self) -> Option<f64> {
        let guests = self.chair_count.trim().parse::<u32>().ok()?;
        let price = parse_number(&self.price)?;
        let discount = parse_number(&self.discount)?;
        let full = price * f64::from(guests);
        Some(full - full * discount / 100.0)
    }

    pub fn validate(&self) -> Result<OrderPayload, Vec<OrderValidationError>> {
        let mut errors = Vec::new();

        let full_name = self.full_name.trim();
        if full_name.chars().count() < MIN_NAME_CHARS {
            errors.push(OrderValidationError::NameTooShort);
        }

        let phonenumber = self.phonenumber.trim();
        if phonenumber.chars().count() < MIN_PHONE_CHARS {
            errors.push(OrderValidationError::PhoneTooShort);
        }

        let order_type_id = self.order_type_id.trim().parse::<i64>().ok();
        if order_type_id.is_none() {
            errors.push(OrderValidationError::MissingOrderType);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            errors.push(OrderValidationError::InvalidDate);
        }

        let chair_count = self.chair_count.trim().parse::<u32>().ok().filter(|count| *count >= 1);
        if chair_count.is_none() {
            errors.push(OrderValidationError::InvalidGuestCount);
        }

        let price = parse_number(&self.price).filter(|price| *price >= 0.0);
        if price.is_none() {
            errors.push(OrderValidationError::InvalidPrice);
        }

        let discount = parse_number(&self.discount).filter(|discount| (0.0..=100.0).contains(discount));
        if discount.is_none() {
            errors.push(OrderValidationError::InvalidDiscount);
        }

        if !FORM_STATUSES.contains(&self.status) {
            errors.push(OrderValidationError::UnsupportedStatus);
        }

        match (order_type_id, date, chair_count, price, discount) {
            (Some(order_type_id), Some(date), Some(chair_count), Some(price), Some(discount))
                if errors.is_empty() =>
            {
                Ok(OrderPayload {
                    full_name: full_name.to_string(),
                    phonenumber: phonenumber.to_string(),
                    order_type_id,
                    date: format_query_date(date),
                    chair_count,
                    price,
                    discount,
                    status: self.status.clone(),
                    offsite: self.offsite,
                    note: self.note.clone(),
                    comment: self.comment.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderTypeValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Price must be a number of at least 0")]
    InvalidPrice,
}

/// Body of `POST /order-types`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderType {
    pub name: String,
    pub price: f64,
    pub is_active: bool,
    pub restaurant_id: i64,
}

/// Body of `PATCH /order-types/{id}`: only changed fields, plus the restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub restaurant_id: i64,
}

impl OrderTypeUpdate {
    /// The active switch in the list sends nothing else
    pub fn active(restaurant_id: i64, is_active: bool) -> Self {
        Self {
            name: None,
            price: None,
            is_active: Some(is_active),
            restaurant_id,
        }
    }
}

/// Order type form contents as typed
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTypeDraft {
    pub name: String,
    pub price: String,
    pub is_active: bool,
}

impl Default for OrderTypeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: "0".to_string(),
            is_active: true,
        }
    }
}

impl OrderTypeDraft {
    pub fn from_order_type(order_type: &OrderType) -> Self {
        Self {
            name: order_type.name.clone(),
            price: order_type.price.to_string(),
            is_active: order_type.is_active,
        }
    }

    pub fn to_new(&self, restaurant_id: i64) -> Result<NewOrderType, Vec<OrderTypeValidationError>> {
        let (name, price) = self.validate()?;
        Ok(NewOrderType {
            name,
            price,
            is_active: self.is_active,
            restaurant_id,
        })
    }

    /// Fields that differ from `original`. `Ok(None)` means there is nothing to save.
    pub fn changes_from(
        &self,
        original: &OrderType,
    ) -> Result<Option<OrderTypeUpdate>, Vec<OrderTypeValidationError>> {
        let (name, price) = self.validate()?;
        let update = OrderTypeUpdate {
            name: (name != original.name).then_some(name),
            price: (price != original.price).then_some(price),
            is_active: (self.is_active != original.is_active).then_some(self.is_active),
            restaurant_id: original.restaurant_id,
        };

        if update.name.is_none() && update.price.is_none() && update.is_active.is_none() {
            Ok(None)
        } else {
            Ok(Some(update))
        }
    }

    fn validate(&self) -> Result<(String, f64), Vec<OrderTypeValidationError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            errors.push(OrderTypeValidationError::NameTooShort);
        }
        let price = parse_number(&self.price).filter(|price| *price >= 0.0);
        if price.is_none() {
            errors.push(OrderTypeValidationError::InvalidPrice);
        }

        match price {
            Some(price) if errors.is_empty() => Ok((name.to_string(), price)),
            _ => Err(errors),
        }
    }
}

fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_draft() -> OrderDraft {
        OrderDraft {
            full_name: "Aman Orazov".to_string(),
            phonenumber: "+99365123456".to_string(),
            order_type_id: "5".to_string(),
            chair_count: "20".to_string(),
            price: "150".to_string(),
            discount: "10".to_string(),
            ..OrderDraft::new(date(2024, 3, 10))
        }
    }

    fn order_type(id: i64, name: &str) -> OrderType {
        OrderType {
            id,
            name: name.to_string(),
            price: 150.0,
            is_active: true,
            restaurant_id: 7,
        }
    }

    fn wedding_order(order_type_id: Option<i64>) -> Order {
        let mut order: Order = serde_json::from_str(
            r#"{
                "id": 42,
                "fullName": "Aman Orazov",
                "phonenumber": "+99365000000",
                "note": null,
                "comment": "Window table",
                "date": "2024-03-10T18:00:00.000Z",
                "discount": 10,
                "offsite": true,
                "chairCount": 20,
                "price": 150.5,
                "orderTypeName": "Wedding",
                "status": "accepted",
                "totalPayment": 1000,
                "updatedBy": { "id": 3, "firstName": "Maya", "lastName": "Berdiyeva" }
            }"#,
        )
        .unwrap();
        order.order_type_id = order_type_id;
        order
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = OrderDraft::new(date(2024, 3, 10));
        assert_eq!(draft.date, "2024-03-10");
        assert_eq!(draft.chair_count, "1");
        assert_eq!(draft.status, OrderStatus::Prepayment);
        assert!(!draft.offsite);
    }

    #[test]
    fn test_valid_draft_becomes_payload() {
        let payload = filled_draft().validate().unwrap();
        assert_eq!(payload.order_type_id, 5);
        assert_eq!(payload.chair_count, 20);
        assert_eq!(payload.date, "2024-03-10");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fullName"], "Aman Orazov");
        assert_eq!(json["orderTypeId"], 5);
        assert_eq!(json["chairCount"], 20);
        assert_eq!(json["status"], "prepayment");
        assert!(json.get("totalPayment").is_none());
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let draft = OrderDraft {
            full_name: " A ".to_string(),
            phonenumber: "1234".to_string(),
            order_type_id: String::new(),
            date: "10.03.2024".to_string(),
            chair_count: "0".to_string(),
            price: "-1".to_string(),
            discount: "120".to_string(),
            status: OrderStatus::Pending,
            ..filled_draft()
        };

        let errors = draft.validate().unwrap_err();
        let fields: Vec<OrderField> = errors.iter().map(OrderValidationError::field).collect();
        assert_eq!(
            fields,
            vec![
                OrderField::FullName,
                OrderField::Phone,
                OrderField::OrderType,
                OrderField::Date,
                OrderField::Guests,
                OrderField::Price,
                OrderField::Discount,
                OrderField::Status,
            ]
        );
    }

    #[test]
    fn test_non_numeric_inputs_are_rejected() {
        let draft = OrderDraft {
            chair_count: "many".to_string(),
            price: "NaN".to_string(),
            discount: "".to_string(),
            ..filled_draft()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![
                OrderValidationError::InvalidGuestCount,
                OrderValidationError::InvalidPrice,
                OrderValidationError::InvalidDiscount,
            ]
        );
    }

    #[test]
    fn test_estimated_total_applies_discount_to_all_guests() {
        assert_eq!(filled_draft().estimated_total(), Some(2700.0));

        let unfinished = OrderDraft { price: "".to_string(), ..filled_draft() };
        assert_eq!(unfinished.estimated_total(), None);
    }

    #[test]
    fn test_draft_from_order_uses_type_id_when_present() {
        let draft = OrderDraft::from_order(&wedding_order(Some(9)), &[order_type(5, "Wedding")]);
        assert_eq!(draft.order_type_id, "9");
        assert_eq!(draft.date, "2024-03-10");
        assert_eq!(draft.price, "150.5");
        assert_eq!(draft.note, "");
        assert_eq!(draft.comment, "Window table");
        assert!(draft.offsite);
    }

    #[test]
    fn test_draft_from_order_matches_type_by_name() {
        let types = [order_type(4, "Birthday"), order_type(5, "Wedding")];
        let draft = OrderDraft::from_order(&wedding_order(None), &types);
        assert_eq!(draft.order_type_id, "5");

        let unknown = OrderDraft::from_order(&wedding_order(None), &types[..1]);
        assert_eq!(unknown.order_type_id, "");
        assert_eq!(unknown.validate().unwrap_err(), vec![OrderValidationError::MissingOrderType]);
    }

    #[test]
    fn test_new_order_type_body() {
        let draft = OrderTypeDraft {
            name: "  Banquet ".to_string(),
            price: "75.5".to_string(),
            is_active: true,
        };
        let body = draft.to_new(7).unwrap();
        assert_eq!(body.name, "Banquet");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(json["restaurantId"], 7);
        assert_eq!(json["price"], 75.5);
    }

    #[test]
    fn test_order_type_validation() {
        let draft = OrderTypeDraft {
            name: "B".to_string(),
            price: "free".to_string(),
            is_active: false,
        };
        assert_eq!(
            draft.to_new(7).unwrap_err(),
            vec![OrderTypeValidationError::NameTooShort, OrderTypeValidationError::InvalidPrice]
        );
    }

    #[test]
    fn test_order_type_update_sends_only_changes() {
        let original = order_type(5, "Wedding");

        let unchanged = OrderTypeDraft::from_order_type(&original);
        assert_eq!(unchanged.changes_from(&original).unwrap(), None);

        let repriced = OrderTypeDraft { price: "180".to_string(), ..unchanged };
        let update = repriced.changes_from(&original).unwrap().unwrap();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 180.0, "restaurantId": 7 }));
    }

    #[test]
    fn test_active_switch_update() {
        let json = serde_json::to_value(OrderTypeUpdate::active(7, false)).unwrap();
        assert_eq!(json, serde_json::json!({ "isActive": false, "restaurantId": 7 }));
    }
}
