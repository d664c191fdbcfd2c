use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::errors::DomainError;

/// Receipt code assigned to the first order in an empty store.
pub const FIRST_RECEIPT_CODE: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    New,
    Completed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("new") => Ok(OrderStatus::New),
            v if v.eq_ignore_ascii_case("completed") => Ok(OrderStatus::Completed),
            other => Err(DomainError::InvalidInput(format!(
                "unknown order status '{other}'"
            ))),
        }
    }
}

/// An order row as loaded for listing.
///
/// `status` keeps the stored text so rows with unexpected values still render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: i32,
    pub receipt_code: i32,
    pub status: String,
    pub pickup_address: String,
    pub client_name: String,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    pub status: OrderStatus,
    pub pickup_point_id: Option<i32>,
    pub client_id: Option<i32>,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

/// Identity of a freshly created order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderKey {
    pub id: i32,
    pub receipt_code: i32,
}

/// Days between the order date and the default delivery date.
pub const DEFAULT_DELIVERY_DAYS: i64 = 7;

pub fn default_delivery_date(order_date: NaiveDate) -> NaiveDate {
    order_date + Duration::days(DEFAULT_DELIVERY_DAYS)
}

/// Next receipt code given the highest one in the store.
pub fn next_receipt_code(latest: Option<i32>) -> i32 {
    latest.map_or(FIRST_RECEIPT_CODE, |code| code + 1)
}

/// Formats a pickup point address the way it is shown to users.
pub fn pickup_address(city: &str, street: &str, house: &str) -> String {
    format!("{city}, {street}, {house}")
}
