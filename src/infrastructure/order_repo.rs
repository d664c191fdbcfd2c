use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{next_receipt_code, pickup_address, OrderInput, OrderKey, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_items, orders, take_points, users};

use super::models::{NewOrderRow, OrderChangeset, OrderRow};

type OrderJoinRow = (
    OrderRow,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_view((row, city, street, house, name, surname): OrderJoinRow) -> OrderView {
    let pickup_address = match (city, street, house) {
        (Some(city), Some(street), Some(house)) => pickup_address(&city, &street, &house),
        _ => String::new(),
    };
    let client_name = [name.unwrap_or_default(), surname.unwrap_or_default()]
        .join(" ")
        .trim()
        .to_string();

    OrderView {
        id: row.id,
        receipt_code: row.receipt_code,
        status: row.order_status,
        pickup_address,
        client_name,
        order_date: row.order_date,
        delivery_date: row.delivery_date,
    }
}

fn write_error(e: DieselError) -> DomainError {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DomainError::InvalidInput("selected pickup point or client does not exist".to_string())
        }
        other => other.into(),
    }
}

impl OrderRepository for DieselOrderRepository {
    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .left_join(take_points::table)
            .left_join(users::table)
            .select((
                OrderRow::as_select(),
                take_points::city.nullable(),
                take_points::street.nullable(),
                take_points::num_house.nullable(),
                users::u_name.nullable(),
                users::surname.nullable(),
            ))
            .order((orders::order_date.desc(), orders::id.desc()))
            .load::<OrderJoinRow>(&mut conn)?;

        log::debug!("loaded {} orders", rows.len());
        Ok(rows.into_iter().map(into_view).collect())
    }

    fn create(&self, input: &OrderInput) -> Result<OrderKey, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // Serialises receipt code generation across writers until commit.
            diesel::sql_query("LOCK TABLE orders IN SHARE ROW EXCLUSIVE MODE").execute(conn)?;

            let latest: Option<i32> = orders::table
                .select(diesel::dsl::max(orders::receipt_code))
                .get_result(conn)?;
            let receipt_code = next_receipt_code(latest);

            let id = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    receipt_code,
                    order_status: input.status.as_str(),
                    pickup_point_id: input.pickup_point_id,
                    client_id: input.client_id,
                    order_date: input.order_date,
                    delivery_date: input.delivery_date,
                })
                .returning(orders::id)
                .get_result(conn)
                .map_err(write_error)?;

            Ok(OrderKey { id, receipt_code })
        })
    }

    fn update(&self, id: i32, input: &OrderInput) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        diesel::update(orders::table.filter(orders::id.eq(id)))
            .set(&OrderChangeset {
                order_status: input.status.as_str(),
                pickup_point_id: input.pickup_point_id,
                client_id: input.client_id,
                order_date: input.order_date,
                delivery_date: input.delivery_date,
            })
            .execute(&mut conn)
            .map_err(write_error)
    }

    fn delete(&self, id: i32) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let items = diesel::delete(order_items::table.filter(order_items::order_id.eq(id)))
                .execute(conn)?;
            let deleted = diesel::delete(orders::table.filter(orders::id.eq(id))).execute(conn)?;
            log::debug!("deleted order {id} with {items} items");
            Ok(deleted)
        })
    }
}
