use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Style};

use crate::domain::product::Reference;
use crate::domain::user::Session;
use crate::view::display::{CellValue, CURRENCY_SUFFIX};
use crate::view::{Highlight, OrderColumn, OrderDisplay, PriceDisplay, ProductDisplay, ViewSchema};

const STRIKE_ON: &str = "\x1b[9m";
const STRIKE_OFF: &str = "\x1b[29m";
const RED_ON: &str = "\x1b[31m";
const RED_OFF: &str = "\x1b[39m";

pub(crate) fn write_session(out: &mut dyn Write, session: &Session) -> io::Result<()> {
    writeln!(out, "{} ({})", session.display_name, session.role)
}

pub(crate) fn write_products(
    out: &mut dyn Write,
    schema: &ViewSchema,
    rows: &[ProductDisplay],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No products match the current filters");
    }

    let mut builder = Builder::default();
    builder.push_record(schema.product_columns.iter().map(|c| c.header()));
    for row in rows {
        builder.push_record(row.cells.iter().map(|cell| cell_text(&cell.value)));
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    for (index, row) in rows.iter().enumerate() {
        if let Some(highlight) = row.highlight {
            let line = index + 1;
            table.modify(Rows::new(line..line + 1), highlight_color(highlight));
        }
    }

    writeln!(out, "{table}")
}

pub(crate) fn write_orders(
    out: &mut dyn Write,
    schema: &ViewSchema,
    rows: &[OrderDisplay],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No orders match the current filters");
    }

    let mut builder = Builder::default();
    builder.push_record(schema.order_columns.iter().map(|c| c.header()));
    for row in rows {
        builder.push_record(row.cells.iter().map(|cell| cell_text(&cell.value)));
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    let status_column = schema
        .order_columns
        .iter()
        .position(|&c| c == OrderColumn::Status);
    if let Some(column) = status_column {
        for (index, row) in rows.iter().enumerate() {
            if let Some(color) = row.status_color.and_then(background) {
                table.modify((index + 1, column), color);
            }
        }
    }

    writeln!(out, "{table}")
}

pub(crate) fn write_references(out: &mut dyn Write, references: &[Reference]) -> io::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["Id", "Name"]);
    for reference in references {
        builder.push_record([reference.id.to_string(), reference.name.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")
}

/// Terminal text for a cell. Discounted prices are red with the original struck through.
pub(crate) fn cell_text(value: &CellValue) -> String {
    match value {
        CellValue::Price(PriceDisplay::Discounted {
            original,
            final_price,
        }) => format!(
            "{RED_ON}{STRIKE_ON}{original}{STRIKE_OFF} {final_price} {CURRENCY_SUFFIX}{RED_OFF}"
        ),
        other => other.text(),
    }
}

fn highlight_color(highlight: Highlight) -> Color {
    background(highlight.color()).unwrap_or(Color::BOLD)
}

/// Truecolor background for the `#RRGGBB` colours the view layer hands out.
fn background(hex: &str) -> Option<Color> {
    let prefix = match hex {
        "#2E8B57" => "\x1b[48;2;46;139;87m",
        "#87CEEB" => "\x1b[48;2;135;206;235m",
        "#90EE90" => "\x1b[48;2;144;238;144m",
        "#FFB6C1" => "\x1b[48;2;255;182;193m",
        _ => return None,
    };
    Some(Color::new(prefix, "\x1b[49m"))
}
