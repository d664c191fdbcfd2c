use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::domain::order::OrderView;
use crate::domain::product::ProductView;

pub(crate) fn product(article: &str, price: &str, discount_percent: i32, quantity: i32) -> ProductView {
    ProductView {
        id: 0,
        article: article.to_string(),
        name: format!("Product {article}"),
        category: "Shoes".to_string(),
        brand: "Kari".to_string(),
        supplier: "Kari".to_string(),
        price: BigDecimal::from_str(price).expect("valid decimal"),
        quantity,
        discount_percent,
        description: String::new(),
        image_path: None,
    }
}

pub(crate) fn order(receipt_code: i32, status: &str) -> OrderView {
    OrderView {
        id: receipt_code - 999,
        receipt_code,
        status: status.to_string(),
        pickup_address: "Moscow, Lenina, 12".to_string(),
        client_name: "Ivan Petrov".to_string(),
        order_date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
        delivery_date: NaiveDate::from_ymd_opt(2025, 3, 8).expect("valid date"),
    }
}

pub(crate) fn articles(rows: &[&ProductView]) -> Vec<String> {
    rows.iter().map(|p| p.article.clone()).collect()
}
