use std::io::Write;

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::application::OrderService;
use crate::domain::errors::DomainError;
use crate::domain::order::{default_delivery_date, OrderInput, OrderStatus};
use crate::domain::ports::LookupRepository;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::infrastructure::{DieselLookupRepository, DieselOrderRepository};
use crate::view::criteria::{selection, ALL_SENTINEL};
use crate::view::{filter_orders, present_order, Capability, OrderCriteria, OrderDisplay};

use super::{render, resolve, Context};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    List(ListOrdersArgs),
    /// Place an order; the receipt code is assigned automatically
    Add(AddOrderArgs),
    /// Overwrite an order identified by its id
    Update(UpdateOrderArgs),
    /// Delete an order together with its items
    Delete(DeleteOrderArgs),
}

#[derive(Debug, Args)]
struct ListOrdersArgs {
    /// Text matched against the receipt code
    #[arg(long, default_value = "")]
    query: String,

    /// New, Completed or all
    #[arg(long, default_value = ALL_SENTINEL)]
    status: String,
}

impl ListOrdersArgs {
    fn criteria(&self) -> OrderCriteria {
        OrderCriteria {
            query: self.query.trim().to_string(),
            status: selection(&self.status),
        }
    }
}

#[derive(Debug, Args)]
struct AddOrderArgs {
    /// Pickup point as listed by `lookups pickup-points`
    #[arg(long)]
    pickup: String,

    /// Client full name as listed by `lookups clients`
    #[arg(long)]
    client: String,

    #[arg(long, default_value_t = OrderStatus::New)]
    status: OrderStatus,

    /// Defaults to today
    #[arg(long)]
    order_date: Option<NaiveDate>,

    /// Defaults to a week after the order date
    #[arg(long)]
    delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
struct UpdateOrderArgs {
    id: i32,

    #[arg(long)]
    pickup: String,

    #[arg(long)]
    client: String,

    #[arg(long)]
    status: OrderStatus,

    #[arg(long)]
    order_date: NaiveDate,

    #[arg(long)]
    delivery_date: NaiveDate,
}

#[derive(Debug, Args)]
struct DeleteOrderArgs {
    id: i32,
}

/// Fills in the defaults of a new order relative to `today`.
fn new_order_input(
    args: &AddOrderArgs,
    today: NaiveDate,
    lookups: &impl LookupRepository,
) -> Result<OrderInput, DomainError> {
    let order_date = args.order_date.unwrap_or(today);
    Ok(OrderInput {
        status: args.status,
        pickup_point_id: resolve(&lookups.pickup_points()?, &args.pickup),
        client_id: resolve(&lookups.clients()?, &args.client),
        order_date,
        delivery_date: args
            .delivery_date
            .unwrap_or_else(|| default_delivery_date(order_date)),
    })
}

fn updated_order_input(
    args: &UpdateOrderArgs,
    lookups: &impl LookupRepository,
) -> Result<OrderInput, DomainError> {
    Ok(OrderInput {
        status: args.status,
        pickup_point_id: resolve(&lookups.pickup_points()?, &args.pickup),
        client_id: resolve(&lookups.clients()?, &args.client),
        order_date: args.order_date,
        delivery_date: args.delivery_date,
    })
}

pub(crate) fn run(
    ctx: &Context,
    pool: &DbPool,
    command: OrdersCommand,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let service = OrderService::new(DieselOrderRepository::new(pool.clone()));
    let lookups = DieselLookupRepository::new(pool.clone());

    match command.command {
        OrdersSubcommand::List(args) => {
            ctx.require(Capability::ViewOrders)?;
            let criteria = args.criteria();
            if !criteria.is_unfiltered() {
                ctx.require(Capability::Filter)?;
            }

            let schema = ctx.session.role.view_schema();
            let orders = service.list_orders()?;
            let rows: Vec<OrderDisplay> = filter_orders(&orders, &criteria)
                .into_iter()
                .map(|o| present_order(o, schema))
                .collect();

            if ctx.json {
                return ctx.write_json(out, &rows);
            }
            render::write_session(out, &ctx.session)?;
            render::write_orders(out, schema, &rows)?;
            writeln!(out, "{} of {} orders", rows.len(), orders.len())?;
        }
        OrdersSubcommand::Add(args) => {
            ctx.require(Capability::ManageOrders)?;
            let today = Local::now().date_naive();
            let key = service.create_order(new_order_input(&args, today, &lookups)?)?;

            if ctx.json {
                return ctx.write_json(out, &key);
            }
            writeln!(out, "Order {} created (id {})", key.receipt_code, key.id)?;
        }
        OrdersSubcommand::Update(args) => {
            ctx.require(Capability::ManageOrders)?;
            service.update_order(args.id, updated_order_input(&args, &lookups)?)?;

            if ctx.json {
                return ctx.write_json(out, &json!({ "updated": args.id }));
            }
            writeln!(out, "Order {} updated", args.id)?;
        }
        OrdersSubcommand::Delete(args) => {
            ctx.require(Capability::ManageOrders)?;
            service.delete_order(args.id)?;

            if ctx.json {
                return ctx.write_json(out, &json!({ "deleted": args.id }));
            }
            writeln!(out, "Order {} deleted", args.id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::domain::ports::MockLookupRepository;
    use crate::domain::product::Reference;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(subcommand)]
        command: OrdersSubcommand,
    }

    fn parse(args: &[&str]) -> OrdersSubcommand {
        Harness::try_parse_from(std::iter::once("orders").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn lookups() -> MockLookupRepository {
        let mut lookups = MockLookupRepository::new();
        lookups.expect_pickup_points().returning(|| {
            Ok(vec![Reference {
                id: 4,
                name: "Moscow, Lenina, 12".to_string(),
            }])
        });
        lookups.expect_clients().returning(|| {
            Ok(vec![Reference {
                id: 9,
                name: "Ivan Petrov".to_string(),
            }])
        });
        lookups
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_order_defaults_to_today_and_a_week() {
        let OrdersSubcommand::Add(args) = parse(&[
            "add",
            "--pickup",
            "Moscow, Lenina, 12",
            "--client",
            "Ivan Petrov",
        ]) else {
            panic!("expected add");
        };

        let input = new_order_input(&args, date(2025, 3, 1), &lookups()).unwrap();

        assert_eq!(input.status, OrderStatus::New);
        assert_eq!(input.pickup_point_id, Some(4));
        assert_eq!(input.client_id, Some(9));
        assert_eq!(input.order_date, date(2025, 3, 1));
        assert_eq!(input.delivery_date, date(2025, 3, 8));
    }

    #[test]
    fn explicit_dates_and_status_win() {
        let OrdersSubcommand::Add(args) = parse(&[
            "add",
            "--pickup",
            "Moscow, Lenina, 12",
            "--client",
            "Nobody",
            "--status",
            "completed",
            "--order-date",
            "2025-02-10",
            "--delivery-date",
            "2025-02-12",
        ]) else {
            panic!("expected add");
        };

        let input = new_order_input(&args, date(2025, 3, 1), &lookups()).unwrap();

        assert_eq!(input.status, OrderStatus::Completed);
        assert_eq!(input.client_id, None);
        assert_eq!(input.order_date, date(2025, 2, 10));
        assert_eq!(input.delivery_date, date(2025, 2, 12));
    }

    #[test]
    fn update_requires_every_field() {
        let parsed = Harness::try_parse_from(["orders", "update", "7", "--status", "new"]);
        assert!(parsed.is_err());

        let OrdersSubcommand::Update(args) = parse(&[
            "update",
            "7",
            "--pickup",
            "Moscow, Lenina, 12",
            "--client",
            "Ivan Petrov",
            "--status",
            "Completed",
            "--order-date",
            "2025-03-01",
            "--delivery-date",
            "2025-03-05",
        ]) else {
            panic!("expected update");
        };
        let input = updated_order_input(&args, &lookups()).unwrap();
        assert_eq!(args.id, 7);
        assert_eq!(input.status, OrderStatus::Completed);
        assert_eq!(input.delivery_date, date(2025, 3, 5));
    }

    #[test]
    fn list_status_filter() {
        let OrdersSubcommand::List(args) = parse(&["list", "--status", "Completed", "--query", "104"])
        else {
            panic!("expected list");
        };
        let criteria = args.criteria();
        assert_eq!(criteria.status.as_deref(), Some("Completed"));
        assert_eq!(criteria.query, "104");
    }
}
