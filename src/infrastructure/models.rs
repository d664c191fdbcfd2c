use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::{orders, products, users};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub article: String,
    pub p_name: String,
    pub category_id: Option<i32>,
    pub brend_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub price: BigDecimal,
    pub quantity: i32,
    pub discount_percent: i32,
    pub description: String,
    pub image_path: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    pub article: &'a str,
    pub p_name: &'a str,
    pub category_id: Option<i32>,
    pub brend_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub price: &'a BigDecimal,
    pub quantity: i32,
    pub discount_percent: i32,
    pub description: &'a str,
    pub image_path: Option<&'a str>,
}

/// Every mutable column; `None` writes NULL.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset<'a> {
    pub p_name: &'a str,
    pub category_id: Option<i32>,
    pub brend_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub price: &'a BigDecimal,
    pub quantity: i32,
    pub discount_percent: i32,
    pub description: &'a str,
    pub image_path: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub receipt_code: i32,
    pub order_status: String,
    pub pickup_point_id: Option<i32>,
    pub client_id: Option<i32>,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub receipt_code: i32,
    pub order_status: &'a str,
    pub pickup_point_id: Option<i32>,
    pub client_id: Option<i32>,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = orders)]
#[diesel(treat_none_as_null = true)]
pub struct OrderChangeset<'a> {
    pub order_status: &'a str,
    pub pickup_point_id: Option<i32>,
    pub client_id: Option<i32>,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub u_name: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role_id: i32,
}
