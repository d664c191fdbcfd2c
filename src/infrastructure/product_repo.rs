use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{ProductInput, ProductView};
use crate::schema::{brends, categories, order_items, products, suppliers};

use super::models::{NewProductRow, ProductChangeset, ProductRow};

type ProductJoinRow = (ProductRow, Option<String>, Option<String>, Option<String>);

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_view((row, category, brand, supplier): ProductJoinRow) -> ProductView {
    ProductView {
        id: row.id,
        article: row.article,
        name: row.p_name,
        category: category.unwrap_or_default(),
        brand: brand.unwrap_or_default(),
        supplier: supplier.unwrap_or_default(),
        price: row.price,
        quantity: row.quantity,
        discount_percent: row.discount_percent,
        description: row.description,
        image_path: row.image_path,
    }
}

fn write_error(input: &ProductInput, e: DieselError) -> DomainError {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DomainError::DuplicateArticle(input.article.clone())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DomainError::InvalidInput(
                "selected category, brand or supplier does not exist".to_string(),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
            DomainError::InvalidInput(info.message().to_string())
        }
        other => other.into(),
    }
}

impl ProductRepository for DieselProductRepository {
    fn list(&self) -> Result<Vec<ProductView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .left_join(categories::table)
            .left_join(brends::table)
            .left_join(suppliers::table)
            .select((
                ProductRow::as_select(),
                categories::category_name.nullable(),
                brends::b_name.nullable(),
                suppliers::s_name.nullable(),
            ))
            .order(products::id.asc())
            .load::<ProductJoinRow>(&mut conn)?;

        log::debug!("loaded {} products", rows.len());
        Ok(rows.into_iter().map(into_view).collect())
    }

    fn find_by_article(&self, article: &str) -> Result<Option<ProductView>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .left_join(categories::table)
            .left_join(brends::table)
            .left_join(suppliers::table)
            .filter(products::article.eq(article))
            .select((
                ProductRow::as_select(),
                categories::category_name.nullable(),
                brends::b_name.nullable(),
                suppliers::s_name.nullable(),
            ))
            .first::<ProductJoinRow>(&mut conn)
            .optional()?;

        Ok(row.map(into_view))
    }

    fn article_exists(&self, article: &str) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let exists = diesel::select(diesel::dsl::exists(
            products::table.filter(products::article.eq(article)),
        ))
        .get_result(&mut conn)?;

        Ok(exists)
    }

    fn insert(&self, input: &ProductInput) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(products::table)
            .values(&NewProductRow {
                article: &input.article,
                p_name: &input.name,
                category_id: input.category_id,
                brend_id: input.brand_id,
                supplier_id: input.supplier_id,
                price: &input.price,
                quantity: input.quantity,
                discount_percent: input.discount_percent,
                description: &input.description,
                image_path: input.image_path.as_deref(),
            })
            .returning(products::id)
            .get_result(&mut conn)
            .map_err(|e| write_error(input, e))
    }

    fn update(&self, article: &str, input: &ProductInput) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        diesel::update(products::table.filter(products::article.eq(article)))
            .set(&ProductChangeset {
                p_name: &input.name,
                category_id: input.category_id,
                brend_id: input.brand_id,
                supplier_id: input.supplier_id,
                price: &input.price,
                quantity: input.quantity,
                discount_percent: input.discount_percent,
                description: &input.description,
                image_path: input.image_path.as_deref(),
            })
            .execute(&mut conn)
            .map_err(|e| write_error(input, e))
    }

    fn count_order_items(&self, article: &str) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;

        let count = order_items::table
            .filter(order_items::product_article.eq(article))
            .count()
            .get_result(&mut conn)?;

        Ok(count)
    }

    fn delete(&self, article: &str) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        diesel::delete(products::table.filter(products::article.eq(article)))
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                    DomainError::ProductInUse(article.to_string())
                }
                other => other.into(),
            })
    }
}
