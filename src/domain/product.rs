use bigdecimal::BigDecimal;
use serde::Serialize;

/// A product row as loaded for listing, with reference names already joined in.
///
/// Names of missing references are empty strings; numeric columns are never null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub article: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub supplier: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub discount_percent: i32,
    pub description: String,
    pub image_path: Option<String>,
}

/// Form input for creating or overwriting a product.
///
/// Reference selections are `None` until the user picks one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub article: String,
    pub name: String,
    pub category_id: Option<i32>,
    pub brand_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub price: BigDecimal,
    pub quantity: i32,
    pub discount_percent: i32,
    pub description: String,
    pub image_path: Option<String>,
}

/// A selectable reference row (category, brand, supplier, pickup point, client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub id: i32,
    pub name: String,
}

/// Finds a reference by exact name.
pub fn find_reference<'a>(references: &'a [Reference], name: &str) -> Option<&'a Reference> {
    references.iter().find(|r| r.name == name)
}
