use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{ProductInput, ProductView};
use crate::images::is_safe_stem;

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_products(&self) -> Result<Vec<ProductView>, DomainError> {
        self.repo.list()
    }

    pub fn get_product(&self, article: &str) -> Result<ProductView, DomainError> {
        self.repo
            .find_by_article(article)?
            .ok_or(DomainError::NotFound)
    }

    /// Validates the form, rejects a taken article, then inserts.
    pub fn create_product(&self, input: ProductInput) -> Result<i32, DomainError> {
        let input = validate(input)?;

        if self.repo.article_exists(&input.article)? {
            return Err(DomainError::DuplicateArticle(input.article));
        }

        let id = self.repo.insert(&input)?;
        log::info!("created product {} ({})", input.article, input.name);
        Ok(id)
    }

    /// Overwrites every mutable field of the product identified by `article`.
    pub fn update_product(&self, article: &str, input: ProductInput) -> Result<(), DomainError> {
        let input = validate(ProductInput {
            article: article.to_string(),
            ..input
        })?;

        match self.repo.update(article, &input)? {
            0 => Err(DomainError::NotFound),
            _ => {
                log::info!("updated product {article}");
                Ok(())
            }
        }
    }

    /// Deletes a product no order refers to and returns the removed row.
    pub fn delete_product(&self, article: &str) -> Result<ProductView, DomainError> {
        let product = self.get_product(article)?;

        if self.repo.count_order_items(article)? > 0 {
            return Err(DomainError::ProductInUse(article.to_string()));
        }

        match self.repo.delete(article)? {
            0 => Err(DomainError::NotFound),
            _ => {
                log::info!("deleted product {article}");
                Ok(product)
            }
        }
    }
}

fn validate(input: ProductInput) -> Result<ProductInput, DomainError> {
    let article = input.article.trim().to_string();
    let name = input.name.trim().to_string();

    if article.is_empty() {
        return Err(DomainError::InvalidInput("article is required".to_string()));
    }
    if !is_safe_stem(&article) {
        return Err(DomainError::InvalidInput(format!(
            "article '{article}' may only contain letters, digits, '-', '_' and '.'"
        )));
    }
    if name.is_empty() {
        return Err(DomainError::InvalidInput("name is required".to_string()));
    }
    if input.category_id.is_none() || input.brand_id.is_none() || input.supplier_id.is_none() {
        return Err(DomainError::InvalidInput(
            "select a category, brand and supplier".to_string(),
        ));
    }
    if input.price < BigDecimal::from(0) {
        return Err(DomainError::InvalidInput("price cannot be negative".to_string()));
    }
    if input.quantity < 0 {
        return Err(DomainError::InvalidInput("quantity cannot be negative".to_string()));
    }
    if !(0..=100).contains(&input.discount_percent) {
        return Err(DomainError::InvalidInput(
            "discount must be between 0 and 100".to_string(),
        ));
    }

    Ok(ProductInput {
        article,
        name,
        ..input
    })
}
