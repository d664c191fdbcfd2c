use bigdecimal::{BigDecimal, RoundingMode};
use serde::Serialize;

use crate::domain::order::{OrderStatus, OrderView};
use crate::domain::product::ProductView;

use super::schema::{OrderColumn, ProductColumn, RowAction, ViewSchema};

pub const CURRENCY_SUFFIX: &str = "₽";

/// Discounts strictly above this percentage get the deep-discount highlight.
pub const DEEP_DISCOUNT_THRESHOLD: i32 = 15;

pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Row highlight. At most one applies; deep discount wins over out of stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Highlight {
    DeepDiscount,
    OutOfStock,
}

impl Highlight {
    pub fn for_product(discount_percent: i32, quantity: i32) -> Option<Highlight> {
        if discount_percent > DEEP_DISCOUNT_THRESHOLD {
            Some(Highlight::DeepDiscount)
        } else if quantity == 0 {
            Some(Highlight::OutOfStock)
        } else {
            None
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Highlight::DeepDiscount => "#2E8B57",
            Highlight::OutOfStock => "#87CEEB",
        }
    }
}

/// Background colour for an order status cell; unknown statuses are uncoloured.
pub fn status_color(status: &str) -> Option<&'static str> {
    match status.parse::<OrderStatus>() {
        Ok(OrderStatus::Completed) => Some("#90EE90"),
        Ok(OrderStatus::New) => Some("#FFB6C1"),
        Err(_) => None,
    }
}

/// `round(price * (1 - discount / 100), 2)`, half-up. Discounts are clamped to 0..=100.
pub fn final_price(price: &BigDecimal, discount_percent: i32) -> BigDecimal {
    let remaining = BigDecimal::from(100 - discount_percent.clamp(0, 100));
    (price * remaining / BigDecimal::from(100)).with_scale_round(2, RoundingMode::HalfUp)
}

pub fn format_amount(amount: &BigDecimal) -> String {
    amount.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceDisplay {
    Plain { price: String },
    /// `original` is shown struck through next to `final_price`.
    Discounted { original: String, final_price: String },
}

impl PriceDisplay {
    pub fn for_product(price: &BigDecimal, discount_percent: i32) -> Self {
        if discount_percent > 0 {
            PriceDisplay::Discounted {
                original: format_amount(price),
                final_price: format_amount(&final_price(price, discount_percent)),
            }
        } else {
            PriceDisplay::Plain {
                price: format_amount(price),
            }
        }
    }

    /// Plain-text rendering, strikethrough marked with `~~`.
    pub fn text(&self) -> String {
        match self {
            PriceDisplay::Plain { price } => format!("{price} {CURRENCY_SUFFIX}"),
            PriceDisplay::Discounted {
                original,
                final_price,
            } => format!("~~{original}~~ → {final_price} {CURRENCY_SUFFIX}"),
        }
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self, PriceDisplay::Discounted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Price(PriceDisplay),
    Actions(Vec<RowAction>),
}

impl CellValue {
    pub fn text(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Price(price) => price.text(),
            CellValue::Actions(actions) => actions
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCell {
    pub column: ProductColumn,
    pub value: CellValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDisplay {
    pub article: String,
    pub cells: Vec<ProductCell>,
    pub highlight: Option<Highlight>,
}

impl ProductDisplay {
    pub fn cell(&self, column: ProductColumn) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderCell {
    pub column: OrderColumn,
    pub value: CellValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDisplay {
    pub id: i32,
    pub receipt_code: i32,
    pub cells: Vec<OrderCell>,
    pub status_color: Option<&'static str>,
}

impl OrderDisplay {
    pub fn cell(&self, column: OrderColumn) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.value)
    }
}

pub fn present_product(product: &ProductView, schema: &ViewSchema) -> ProductDisplay {
    let cells = schema
        .product_columns
        .iter()
        .map(|&column| ProductCell {
            column,
            value: product_cell(product, column, schema),
        })
        .collect();

    ProductDisplay {
        article: product.article.clone(),
        cells,
        highlight: Highlight::for_product(product.discount_percent, product.quantity),
    }
}

pub fn present_order(order: &OrderView, schema: &ViewSchema) -> OrderDisplay {
    let cells = schema
        .order_columns
        .iter()
        .map(|&column| OrderCell {
            column,
            value: order_cell(order, column, schema),
        })
        .collect();

    OrderDisplay {
        id: order.id,
        receipt_code: order.receipt_code,
        cells,
        status_color: status_color(&order.status),
    }
}

fn product_cell(product: &ProductView, column: ProductColumn, schema: &ViewSchema) -> CellValue {
    match column {
        ProductColumn::Article => CellValue::Text(product.article.clone()),
        ProductColumn::Name => CellValue::Text(product.name.clone()),
        ProductColumn::Category => CellValue::Text(product.category.clone()),
        ProductColumn::Brand => CellValue::Text(product.brand.clone()),
        ProductColumn::Supplier => CellValue::Text(product.supplier.clone()),
        ProductColumn::Price => CellValue::Price(PriceDisplay::for_product(
            &product.price,
            product.discount_percent,
        )),
        ProductColumn::Quantity => CellValue::Text(product.quantity.to_string()),
        ProductColumn::Discount => CellValue::Text(product.discount_percent.to_string()),
        ProductColumn::Description => CellValue::Text(preview(&product.description)),
        ProductColumn::Actions => CellValue::Actions(schema.row_actions.to_vec()),
    }
}

fn order_cell(order: &OrderView, column: OrderColumn, schema: &ViewSchema) -> CellValue {
    match column {
        OrderColumn::ReceiptCode => CellValue::Text(order.receipt_code.to_string()),
        OrderColumn::Status => CellValue::Text(order.status.clone()),
        OrderColumn::PickupPoint => CellValue::Text(order.pickup_address.clone()),
        OrderColumn::OrderDate => CellValue::Text(order.order_date.to_string()),
        OrderColumn::DeliveryDate => CellValue::Text(order.delivery_date.to_string()),
        OrderColumn::Client => CellValue::Text(order.client_name.clone()),
        OrderColumn::Actions => CellValue::Actions(schema.row_actions.to_vec()),
    }
}

fn preview(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::role::Role;
    use crate::view::criteria::{ProductCriteria, Sort, SortDirection, SortKey};
    use crate::view::filter::filter_products;
    use crate::view::test_support::{order, product};

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn final_price_formula() {
        let cases = [
            ("100", 0, "100.00"),
            ("50", 20, "40.00"),
            ("19.99", 15, "16.99"),
            ("10.05", 50, "5.03"),
            ("1234.56", 100, "0.00"),
            ("0", 30, "0.00"),
            ("99.99", 33, "66.99"),
        ];
        for (price, discount, expected) in cases {
            assert_eq!(final_price(&dec(price), discount), dec(expected), "{price} -{discount}%");
        }
    }

    #[test]
    fn final_price_clamps_out_of_range_discounts() {
        assert_eq!(final_price(&dec("80"), -5), dec("80.00"));
        assert_eq!(final_price(&dec("80"), 150), dec("0.00"));
    }

    #[test]
    fn highlight_first_match_wins() {
        let cases = [
            (20, 0, Some(Highlight::DeepDiscount)),
            (16, 7, Some(Highlight::DeepDiscount)),
            (15, 0, Some(Highlight::OutOfStock)),
            (0, 0, Some(Highlight::OutOfStock)),
            (15, 3, None),
            (0, 1, None),
        ];
        for (discount, quantity, expected) in cases {
            assert_eq!(
                Highlight::for_product(discount, quantity),
                expected,
                "discount {discount}, quantity {quantity}"
            );
        }
    }

    #[test]
    fn highlight_colors_differ() {
        assert_ne!(Highlight::DeepDiscount.color(), Highlight::OutOfStock.color());
    }

    #[test]
    fn price_display_text() {
        assert_eq!(PriceDisplay::for_product(&dec("100"), 0).text(), "100.00 ₽");
        assert_eq!(
            PriceDisplay::for_product(&dec("50"), 20).text(),
            "~~50.00~~ → 40.00 ₽"
        );
        assert!(!PriceDisplay::for_product(&dec("10"), 0).is_discounted());
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_color("Completed"), Some("#90EE90"));
        assert_eq!(status_color("New"), Some("#FFB6C1"));
        assert_eq!(status_color("Cancelled"), None);
        assert_eq!(status_color(""), None);
    }

    #[test]
    fn product_display_shape_depends_on_role() {
        let p = product("A1", "100", 0, 4);

        let admin = present_product(&p, Role::Administrator.view_schema());
        assert_eq!(admin.cells.len(), 10);
        assert_eq!(
            admin.cell(ProductColumn::Supplier),
            Some(&CellValue::Text("Kari".to_string()))
        );
        assert_eq!(
            admin.cell(ProductColumn::Actions),
            Some(&CellValue::Actions(vec![RowAction::Edit, RowAction::Delete]))
        );

        let guest = present_product(&p, Role::Guest.view_schema());
        assert_eq!(guest.cells.len(), 8);
        assert_eq!(guest.cell(ProductColumn::Supplier), None);
        assert_eq!(guest.cell(ProductColumn::Actions), None);
    }

    #[test]
    fn preview_cuts_only_past_the_limit() {
        let exact = "ж".repeat(DESCRIPTION_PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);

        let over = "ж".repeat(DESCRIPTION_PREVIEW_CHARS + 1);
        assert_eq!(preview(&over), format!("{exact}..."));

        assert_eq!(preview(""), "");
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let mut p = product("D1", "1", 0, 1);
        p.description = "ж".repeat(120);
        let display = present_product(&p, Role::Client.view_schema());
        let Some(CellValue::Text(text)) = display.cell(ProductColumn::Description) else {
            panic!("description cell missing");
        };
        assert_eq!(text.chars().count(), 103);
        assert!(text.ends_with("..."));

        p.description = "short".to_string();
        let display = present_product(&p, Role::Client.view_schema());
        assert_eq!(
            display.cell(ProductColumn::Description),
            Some(&CellValue::Text("short".to_string()))
        );
    }

    #[test]
    fn order_display_by_role() {
        let o = order(1042, "Completed");

        let admin = present_order(&o, Role::Administrator.view_schema());
        assert_eq!(admin.cells.len(), 7);
        assert_eq!(
            admin.cell(OrderColumn::Client),
            Some(&CellValue::Text("Ivan Petrov".to_string()))
        );
        assert_eq!(admin.status_color, Some("#90EE90"));

        let manager = present_order(&o, Role::Manager.view_schema());
        assert_eq!(manager.cells.len(), 5);
        assert_eq!(manager.cell(OrderColumn::Client), None);
        assert_eq!(
            manager.cell(OrderColumn::OrderDate),
            Some(&CellValue::Text("2025-03-01".to_string()))
        );
    }

    #[test]
    fn price_sorted_scenario() {
        let source = vec![product("A1", "100", 0, 0), product("A2", "50", 20, 5)];
        let criteria = ProductCriteria {
            sort: Some(Sort::new(SortKey::Price, SortDirection::Ascending)),
            ..Default::default()
        };
        let schema = Role::Administrator.view_schema();

        let rows: Vec<ProductDisplay> = filter_products(&source, &criteria)
            .into_iter()
            .map(|p| present_product(p, schema))
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].article, "A2");
        assert_eq!(
            rows[0].cell(ProductColumn::Price),
            Some(&CellValue::Price(PriceDisplay::Discounted {
                original: "50.00".to_string(),
                final_price: "40.00".to_string(),
            }))
        );
        assert_eq!(rows[0].highlight, Some(Highlight::DeepDiscount));

        assert_eq!(rows[1].article, "A1");
        assert_eq!(
            rows[1].cell(ProductColumn::Price),
            Some(&CellValue::Price(PriceDisplay::Plain {
                price: "100.00".to_string(),
            }))
        );
        assert_eq!(rows[1].highlight, Some(Highlight::OutOfStock));
    }

    #[test]
    fn display_records_serialize() {
        let display = present_product(&product("J1", "50", 20, 5), Role::Manager.view_schema());
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["article"], "J1");
        assert_eq!(json["highlight"], "DeepDiscount");
        assert_eq!(json["cells"][4]["value"]["kind"], "price");
        assert_eq!(json["cells"][4]["value"]["value"]["final_price"], "40.00");
    }
}
